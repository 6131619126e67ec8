//! Record verification against a built tree.
//!
//! A record is located by the digest it had when it was committed, then the
//! digest of its current field values is climbed up that position's sibling
//! path. The record is valid only if the climb lands on the tree's root.

use ledger_costs::{CostResult, CostsExt, OperationCost, cost_return_on_error_no_add};
use tracing::debug;

use crate::{Digest, DigestFunction, MerkleTree, MerkleTreeError, Record, error::Result};

/// Outcome of verifying a record or leaf against a root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    /// The current values hash up to the root.
    Valid,
    /// The leaf position is known but the current values no longer hash up
    /// to the root.
    Invalid,
}

impl Verification {
    pub(crate) fn from_root_match(matches: bool) -> Self {
        if matches {
            Verification::Valid
        } else {
            Verification::Invalid
        }
    }

    /// True for [`Verification::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

impl<D: DigestFunction> MerkleTree<D> {
    /// Verify that `record`'s current fields are still what this tree
    /// committed to.
    ///
    /// Returns [`MerkleTreeError::NotFound`] if the record's cached digest is
    /// not a leaf of this tree. If the digest occurs more than once, the
    /// lowest position is used. The record must come from the same digest
    /// function as the tree.
    pub fn verify_record(&self, record: &Record<D>) -> Result<Verification> {
        self.verify_record_with_cost(record).unwrap()
    }

    /// Like [`verify_record`](Self::verify_record), also reporting the fresh
    /// record digest (`hash_byte_calls`) and the climb (`hash_node_calls`).
    pub fn verify_record_with_cost(
        &self,
        record: &Record<D>,
    ) -> CostResult<Verification, MerkleTreeError> {
        let mut cost = OperationCost::default();
        let position = cost_return_on_error_no_add!(
            &cost,
            self.leaf_position(record.cached_digest())
                .ok_or_else(|| MerkleTreeError::NotFound {
                    digest: record.cached_digest().clone(),
                })
        );

        let current = record.fresh_digest();
        cost.hash_byte_calls += 1;

        self.verify_leaf_with_cost(position, &current).add_cost(cost)
    }

    /// Verify that `digest` sits at leaf `position`, by climbing the
    /// position's sibling path and comparing with the root.
    pub fn verify_leaf(&self, position: usize, digest: &Digest) -> Result<Verification> {
        self.verify_leaf_with_cost(position, digest).unwrap()
    }

    /// Like [`verify_leaf`](Self::verify_leaf), reporting `hash_node_calls`.
    pub fn verify_leaf_with_cost(
        &self,
        position: usize,
        digest: &Digest,
    ) -> CostResult<Verification, MerkleTreeError> {
        let mut cost = OperationCost::default();
        let proof = cost_return_on_error_no_add!(&cost, self.prove(position));
        let computed = proof
            .compute_root_with_cost(digest, self.hasher())
            .unwrap_add_cost(&mut cost);

        let verification = Verification::from_root_match(&computed == self.root());
        debug!(position, ?verification, "verified leaf");
        Ok(verification).wrap_with_cost(cost)
    }
}
