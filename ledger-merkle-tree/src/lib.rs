//! Level-cached Merkle trees over ordered batches of transaction records.
//!
//! Records are appended to a [`Batch`]; the batch's leaf digests are handed
//! to [`MerkleTree::build`], which keeps every level so that a single record
//! can later be checked with [`MerkleTree::verify_record`] without rebuilding
//! the tree. [`Batch::consistency_check`] answers the coarser question of
//! whether the batch's stored root still matches all of its records.
//!
//! # Core types
//!
//! - [`Record`]: leaf data with a construction-time digest and an on-demand
//!   fresh digest.
//! - [`Batch`]: ordered records plus an externally maintained root.
//! - [`MerkleTree`]: build, root lookup, proofs, verification.
//! - [`InclusionProof`]: a detachable sibling path for one leaf.
//!
//! # Digest functions
//!
//! [`Record`], [`Batch`] and [`MerkleTree`] are generic over a
//! [`DigestFunction`], and a record carries its digest function with it so a
//! batch cannot mix records hashed by different backends.
//!
//! - [`Sha256Hasher`]: the default type parameter, always available.
//! - [`Blake3Hasher`]: optional backend behind the `blake3` cargo feature,
//!   which is enabled by default.

#![warn(missing_docs)]

mod batch;
mod digest;
mod error;
/// Level and index arithmetic.
pub mod helper;
mod record;
mod tree;

#[cfg(test)]
mod tests;

pub use batch::{Batch, Consistency};
#[cfg(feature = "blake3")]
pub use digest::Blake3Hasher;
pub use digest::{DIGEST_HEX_LEN, Digest, DigestFunction, Sha256Hasher};
pub use error::{MerkleTreeError, Result};
pub use ledger_costs::{CostContext, CostResult, OperationCost};
pub use record::{CANONICAL_ENCODING_LEN, Record};
pub use tree::{
    MerkleTree,
    proof::{InclusionProof, ProofStep},
    verify::Verification,
};
