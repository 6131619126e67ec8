//! Ordered, append-only batches of records.
//!
//! A batch carries an optional root digest that is only ever set from the
//! outside, by [`Batch::commit`], [`Batch::refresh_root`] or
//! [`Batch::set_root`]. Appending or mutating records never touches it, so
//! the stored root may lag behind the records until it is refreshed.
//!
//! A batch is bound to one digest function: it only accepts records made
//! with it and builds its trees with it.

use ledger_costs::{CostContext, CostResult, CostsExt, OperationCost};
use tracing::debug;

use crate::{
    Digest, DigestFunction, MerkleTree, MerkleTreeError, Record, Sha256Hasher, error::Result,
};

/// Whether a batch's stored root still summarizes its current records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consistency {
    /// Rebuilding from the current records reproduces the stored root.
    Consistent,
    /// The rebuilt root differs, no root is stored, or the batch is empty.
    Inconsistent,
}

/// An ordered sequence of records; order defines leaf order.
#[derive(Clone, Debug)]
pub struct Batch<D: DigestFunction = Sha256Hasher> {
    records: Vec<Record<D>>,
    root: Option<Digest>,
    hasher: D,
}

impl Batch {
    /// An empty SHA-256 batch with no root.
    pub fn new() -> Self {
        Self::with_hasher(Sha256Hasher)
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DigestFunction> Batch<D> {
    /// An empty batch using `hasher`, with no root.
    pub fn with_hasher(hasher: D) -> Self {
        Batch {
            records: Vec::new(),
            root: None,
            hasher,
        }
    }

    /// A batch holding `records`, in order, with no root.
    pub fn with_records(hasher: D, records: Vec<Record<D>>) -> Self {
        Batch {
            records,
            root: None,
            hasher,
        }
    }

    /// Append a record. The stored root is left as it is.
    pub fn append(&mut self, record: Record<D>) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True if the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in order.
    pub fn records(&self) -> &[Record<D>] {
        &self.records
    }

    /// The record at `index`.
    pub fn record(&self, index: usize) -> Option<&Record<D>> {
        self.records.get(index)
    }

    /// Mutable access to a record. Its cached digest is not refreshed.
    pub fn record_mut(&mut self, index: usize) -> Option<&mut Record<D>> {
        self.records.get_mut(index)
    }

    /// The digest function of this batch.
    pub fn hasher(&self) -> &D {
        &self.hasher
    }

    /// The stored root, if one was set.
    pub fn root(&self) -> Option<&Digest> {
        self.root.as_ref()
    }

    /// Overwrite the stored root.
    pub fn set_root(&mut self, root: Digest) {
        self.root = Some(root);
    }

    /// Cached digest of every record, in batch order.
    pub fn leaf_digests(&self) -> Vec<Digest> {
        self.records
            .iter()
            .map(|record| record.cached_digest().clone())
            .collect()
    }

    /// Digest of every record's current values, in batch order.
    pub fn current_digests(&self) -> Vec<Digest> {
        self.records.iter().map(|record| record.fresh_digest()).collect()
    }

    /// Build a tree over the records' cached digests.
    ///
    /// This is the snapshot a tree verifies records against later on.
    pub fn build_tree(&self) -> Result<MerkleTree<D>> {
        MerkleTree::build(self.leaf_digests(), self.hasher.clone())
    }

    /// Build a tree over the digests of the records' current values.
    pub fn rebuild_tree(&self) -> Result<MerkleTree<D>> {
        self.rebuild_tree_with_cost().unwrap()
    }

    fn rebuild_tree_with_cost(&self) -> CostResult<MerkleTree<D>, MerkleTreeError> {
        let leaves = self.current_digests();
        let cost = OperationCost::with_hash_byte_calls(leaves.len() as u32);
        MerkleTree::build_with_cost(leaves, self.hasher.clone()).add_cost(cost)
    }

    /// Build a tree from the cached digests and store its root.
    pub fn commit(&mut self) -> Result<MerkleTree<D>> {
        let tree = self.build_tree()?;
        self.root = Some(tree.root().clone());
        debug!(count = self.count(), root = %tree.root(), "committed batch root");
        Ok(tree)
    }

    /// Rebuild a tree from the current values and store its root.
    pub fn refresh_root(&mut self) -> Result<MerkleTree<D>> {
        let tree = self.rebuild_tree()?;
        self.root = Some(tree.root().clone());
        debug!(count = self.count(), root = %tree.root(), "refreshed batch root");
        Ok(tree)
    }

    /// Compare the stored root with a root rebuilt from the current values.
    ///
    /// Never fails: an empty batch or a batch without a stored root is
    /// [`Consistency::Inconsistent`].
    pub fn consistency_check(&self) -> Consistency {
        self.consistency_check_with_cost().unwrap()
    }

    /// Like [`consistency_check`](Self::consistency_check), reporting the
    /// cost of the rebuild.
    pub fn consistency_check_with_cost(&self) -> CostContext<Consistency> {
        let Some(stored) = self.root.as_ref() else {
            debug!(count = self.count(), "no stored root, batch inconsistent");
            return Consistency::Inconsistent.wrap_with_cost(OperationCost::default());
        };

        let mut cost = OperationCost::default();
        let consistency = match self.rebuild_tree_with_cost().unwrap_add_cost(&mut cost) {
            Ok(tree) if tree.root() == stored => Consistency::Consistent,
            _ => Consistency::Inconsistent,
        };
        debug!(count = self.count(), ?consistency, "checked batch consistency");
        consistency.wrap_with_cost(cost)
    }
}
