//! Error types for Merkle tree operations.

use thiserror::Error;

use crate::Digest;

/// Alias for `core::result::Result<T, MerkleTreeError>`.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;

/// Errors from building or querying a [`MerkleTree`](crate::MerkleTree).
///
/// A record whose current fields no longer hash to the root is not an error;
/// that is reported as [`Verification::Invalid`](crate::Verification).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// A tree has no defined root over zero leaves.
    #[error("cannot build a Merkle tree from zero leaves")]
    EmptyInput,
    /// The digest does not appear in the leaf level.
    #[error("digest {digest} is not a leaf of this tree")]
    NotFound {
        /// The digest that was looked up.
        digest: Digest,
    },
    /// A claimed leaf position past the end of the leaf level.
    #[error("leaf index {index} out of range (leaf count {leaf_count})")]
    LeafIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Text that is not a canonical lowercase hex digest.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}
