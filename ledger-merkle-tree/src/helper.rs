//! Index arithmetic over the level-cached tree.
//!
//! Every level is a contiguous slice; a node at index `i` pairs with
//! `i ^ 1` and its parent sits at `i / 2` in the level above. A node without
//! a partner (the last node of an odd-length level) is carried up unchanged.

/// Length of the level built on top of a level of `len` nodes.
pub fn next_level_len(len: usize) -> usize {
    len.div_ceil(2)
}

/// Number of levels above the leaf level for `leaf_count` leaves, i.e.
/// `ceil(log2(leaf_count))`. Zero for a single leaf.
pub fn height_for_leaf_count(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        return 0;
    }
    (usize::BITS - (leaf_count - 1).leading_zeros()) as usize
}

/// Lengths of every level from the leaves up to the root.
///
/// Returns an empty vector for zero leaves.
///
/// ```text
/// 11 leaves:  11 -> 6 -> 3 -> 2 -> 1
/// ```
pub fn level_sizes(leaf_count: usize) -> Vec<usize> {
    if leaf_count == 0 {
        return vec![];
    }
    let mut sizes = Vec::with_capacity(height_for_leaf_count(leaf_count) + 1);
    let mut len = leaf_count;
    sizes.push(len);
    while len > 1 {
        len = next_level_len(len);
        sizes.push(len);
    }
    sizes
}

/// Index of the node paired with `index` on the same level.
pub fn sibling_index(index: usize) -> usize {
    index ^ 1
}

/// Index of the parent of `index` in the level above.
pub fn parent_index(index: usize) -> usize {
    index / 2
}
