//! Level-cached binary Merkle tree.
//!
//! All levels are kept in memory, leaves first: `levels[0]` is the leaf
//! level in batch order and the last level holds the single root digest.
//! Nodes are paired left to right as `(2k, 2k + 1)`; a node left without a
//! partner at the end of an odd-length level is carried into the next level
//! as is, without rehashing.
//!
//! ```text
//! level 2:        H(H(a||b)||c)
//!                 /           \
//! level 1:     H(a||b)         c
//!              /     \         |
//! level 0:    a       b        c
//! ```

pub(crate) mod proof;
pub(crate) mod verify;

use ledger_costs::{CostResult, CostsExt, OperationCost};
use tracing::{debug, trace};

use crate::{
    Digest, DigestFunction, MerkleTreeError, Sha256Hasher,
    error::Result,
    helper::{height_for_leaf_count, next_level_len},
};

/// An immutable Merkle tree built once from an ordered list of leaf digests.
#[derive(Clone, Debug)]
pub struct MerkleTree<D: DigestFunction = Sha256Hasher> {
    levels: Vec<Vec<Digest>>,
    hasher: D,
}

impl<D: DigestFunction> MerkleTree<D> {
    /// Build a tree over `leaves`, in order.
    ///
    /// Fails with [`MerkleTreeError::EmptyInput`] if `leaves` is empty.
    pub fn build(leaves: Vec<Digest>, hasher: D) -> Result<Self> {
        Self::build_with_cost(leaves, hasher).unwrap()
    }

    /// Like [`build`](Self::build), also reporting one `hash_node_calls` per
    /// pairing. A tree over `n` leaves always costs `n - 1` pairings.
    pub fn build_with_cost(leaves: Vec<Digest>, hasher: D) -> CostResult<Self, MerkleTreeError> {
        let mut cost = OperationCost::default();
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyInput).wrap_with_cost(cost);
        }

        let leaf_count = leaves.len();
        let mut levels = Vec::with_capacity(height_for_leaf_count(leaf_count) + 1);
        levels.push(leaves);

        while let Some(top) = levels.last().filter(|level| level.len() > 1) {
            let next = Self::pair_level(top, &hasher, &mut cost);
            trace!(level = levels.len(), len = next.len(), "built tree level");
            levels.push(next);
        }

        let tree = MerkleTree { levels, hasher };
        debug!(
            leaf_count,
            height = tree.height(),
            root = %tree.root(),
            "built merkle tree"
        );
        Ok(tree).wrap_with_cost(cost)
    }

    fn pair_level(level: &[Digest], hasher: &D, cost: &mut OperationCost) -> Vec<Digest> {
        let mut next = Vec::with_capacity(next_level_len(level.len()));
        for pair in level.chunks(2) {
            match pair {
                [left, right] => {
                    cost.hash_node_calls += 1;
                    next.push(hasher.combine(left, right));
                }
                // odd tail, carried up unchanged
                _ => next.push(pair[0].clone()),
            }
        }
        next
    }

    /// The root digest.
    pub fn root(&self) -> &Digest {
        &self.levels[self.height()][0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaf level; zero for a single leaf.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels, leaves first, root last.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// The level at `index` (0 = leaves), if it exists.
    pub fn level(&self, index: usize) -> Option<&[Digest]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    /// The leaf level, in the order the tree was built from.
    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0]
    }

    /// Position of the first leaf equal to `digest`.
    pub fn leaf_position(&self, digest: &Digest) -> Option<usize> {
        self.leaves().iter().position(|leaf| leaf == digest)
    }

    /// The digest function the tree was built with.
    pub fn hasher(&self) -> &D {
        &self.hasher
    }
}
