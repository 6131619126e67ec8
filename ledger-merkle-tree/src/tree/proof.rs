//! Inclusion proofs: the sibling path from one leaf to the root.
//!
//! A proof can be checked against a root digest alone, without the tree.

use ledger_costs::{CostContext, CostsExt, OperationCost};

use crate::{
    Digest, DigestFunction, MerkleTree, MerkleTreeError, Verification,
    error::Result,
    helper::{parent_index, sibling_index},
};

/// One level of an inclusion proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofStep {
    /// The sibling sits to the left: `parent = H(sibling || current)`.
    Left(Digest),
    /// The sibling sits to the right: `parent = H(current || sibling)`.
    Right(Digest),
    /// No sibling on this level; the node is carried up unchanged.
    Carry,
}

/// Path from a leaf to the root of the tree it was generated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InclusionProof {
    leaf_index: usize,
    leaf_count: usize,
    steps: Vec<ProofStep>,
}

impl InclusionProof {
    /// Position of the proved leaf.
    pub fn leaf_index(&self) -> usize {
        self.leaf_index
    }

    /// Number of leaves in the tree the proof was generated from.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Steps from the leaf level upward.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Fold `leaf` up the path and return the resulting root.
    pub fn compute_root<D: DigestFunction>(&self, leaf: &Digest, hasher: &D) -> Digest {
        self.compute_root_with_cost(leaf, hasher).unwrap()
    }

    /// Like [`compute_root`](Self::compute_root), counting one
    /// `hash_node_calls` per non-carry step.
    pub fn compute_root_with_cost<D: DigestFunction>(
        &self,
        leaf: &Digest,
        hasher: &D,
    ) -> CostContext<Digest> {
        let mut cost = OperationCost::default();
        let mut current = leaf.clone();
        for step in &self.steps {
            current = match step {
                ProofStep::Left(sibling) => {
                    cost.hash_node_calls += 1;
                    hasher.combine(sibling, &current)
                }
                ProofStep::Right(sibling) => {
                    cost.hash_node_calls += 1;
                    hasher.combine(&current, sibling)
                }
                ProofStep::Carry => current,
            };
        }
        current.wrap_with_cost(cost)
    }

    /// Check that `leaf` folds up to `root`.
    pub fn verify<D: DigestFunction>(&self, leaf: &Digest, root: &Digest, hasher: &D) -> Verification {
        Verification::from_root_match(&self.compute_root(leaf, hasher) == root)
    }
}

impl<D: DigestFunction> MerkleTree<D> {
    /// Generate the inclusion proof for the leaf at `leaf_index`.
    pub fn prove(&self, leaf_index: usize) -> Result<InclusionProof> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(MerkleTreeError::LeafIndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }

        let mut index = leaf_index;
        let mut steps = Vec::with_capacity(self.height());
        // every level except the root level
        for level in &self.levels()[..self.height()] {
            let sibling = sibling_index(index);
            let step = match level.get(sibling) {
                Some(digest) if sibling < index => ProofStep::Left(digest.clone()),
                Some(digest) => ProofStep::Right(digest.clone()),
                None => ProofStep::Carry,
            };
            steps.push(step);
            index = parent_index(index);
        }

        Ok(InclusionProof {
            leaf_index,
            leaf_count,
            steps,
        })
    }
}
