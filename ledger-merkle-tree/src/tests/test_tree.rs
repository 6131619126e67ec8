use assert_matches::assert_matches;

use super::{leaf, leaves};
use crate::{DigestFunction, MerkleTree, MerkleTreeError, Sha256Hasher, helper::level_sizes};

#[test]
fn test_build_empty_input() {
    assert_matches!(
        MerkleTree::build(vec![], Sha256Hasher),
        Err(MerkleTreeError::EmptyInput)
    );
    let ctx = MerkleTree::build_with_cost(vec![], Sha256Hasher);
    assert!(ctx.cost.is_nothing());
    assert_matches!(ctx.value, Err(MerkleTreeError::EmptyInput));
}

#[test]
fn test_single_leaf_root_is_leaf() {
    let tree = MerkleTree::build(vec![leaf(7)], Sha256Hasher).expect("build");
    assert_eq!(tree.root(), &leaf(7));
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.levels().len(), 1);
}

#[test]
fn test_two_leaves() {
    let tree = MerkleTree::build(leaves(2), Sha256Hasher).expect("build");
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.root(), &Sha256Hasher.combine(&leaf(0), &leaf(1)));
}

#[test]
fn test_combine_concatenates_hex_text() {
    let (a, b) = (leaf(1), leaf(2));
    let expected = Sha256Hasher.digest(format!("{}{}", a, b).as_bytes());
    assert_eq!(Sha256Hasher.combine(&a, &b), expected);
    assert_ne!(Sha256Hasher.combine(&a, &b), Sha256Hasher.combine(&b, &a));
}

#[test]
fn test_odd_carry_three_leaves() {
    let (h1, h2, h3) = (leaf(1), leaf(2), leaf(3));
    let tree =
        MerkleTree::build(vec![h1.clone(), h2.clone(), h3.clone()], Sha256Hasher).expect("build");

    let h12 = Sha256Hasher.combine(&h1, &h2);
    assert_eq!(tree.level(1).expect("level 1"), &[h12.clone(), h3.clone()]);
    assert_eq!(tree.root(), &Sha256Hasher.combine(&h12, &h3));
}

#[test]
fn test_eleven_leaf_shape() {
    let leaves = leaves(11);
    let tree = MerkleTree::build(leaves.clone(), Sha256Hasher).expect("build");

    let sizes: Vec<usize> = tree.levels().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![11, 6, 3, 2, 1]);
    assert_eq!(sizes, level_sizes(11));
    assert_eq!(tree.height(), 4);
    assert!(tree.level(5).is_none());

    let level1 = tree.level(1).expect("level 1");
    let level2 = tree.level(2).expect("level 2");
    let level3 = tree.level(3).expect("level 3");

    // leaf 10 has no partner and is carried up as is
    assert_eq!(level1[5], leaves[10]);
    assert_eq!(level1[0], Sha256Hasher.combine(&leaves[0], &leaves[1]));
    assert_eq!(level2[2], Sha256Hasher.combine(&level1[4], &level1[5]));
    // level 2 has odd length: its last node is carried again
    assert_eq!(level3[1], level2[2]);
    assert_eq!(level3[0], Sha256Hasher.combine(&level2[0], &level2[1]));
    assert_eq!(tree.root(), &Sha256Hasher.combine(&level3[0], &level3[1]));
}

#[test]
fn test_build_cost_counts_pairings() {
    let ctx = MerkleTree::build_with_cost(leaves(11), Sha256Hasher);
    assert_eq!(ctx.cost.hash_node_calls, 10);
    assert_eq!(ctx.cost.hash_byte_calls, 0);
    assert!(ctx.value.is_ok());

    let ctx = MerkleTree::build_with_cost(leaves(1), Sha256Hasher);
    assert!(ctx.cost.is_nothing());
}

#[test]
fn test_build_is_deterministic() {
    let a = MerkleTree::build(leaves(11), Sha256Hasher).expect("build a");
    let b = MerkleTree::build(leaves(11), Sha256Hasher).expect("build b");
    assert_eq!(a.root(), b.root());
    assert_eq!(a.levels(), b.levels());
}

#[test]
fn test_root_depends_on_leaf_order() {
    let original = MerkleTree::build(leaves(11), Sha256Hasher).expect("build");

    let mut swapped = leaves(11);
    swapped.swap(0, 1);
    let within_pair = MerkleTree::build(swapped, Sha256Hasher).expect("build");
    assert_ne!(original.root(), within_pair.root());

    let mut swapped = leaves(11);
    swapped.swap(3, 10);
    let across = MerkleTree::build(swapped, Sha256Hasher).expect("build");
    assert_ne!(original.root(), across.root());
}

#[test]
fn test_swapping_equal_leaves_keeps_root() {
    let same = leaf(5);
    let digests = vec![same.clone(), same.clone(), leaf(6)];
    let tree = MerkleTree::build(digests.clone(), Sha256Hasher).expect("build");
    let mut swapped = digests;
    swapped.swap(0, 1);
    let other = MerkleTree::build(swapped, Sha256Hasher).expect("build");
    assert_eq!(tree.root(), other.root());
}

#[test]
fn test_leaf_position_takes_first_match() {
    let digests = vec![leaf(1), leaf(2), leaf(1)];
    let tree = MerkleTree::build(digests, Sha256Hasher).expect("build");
    assert_eq!(tree.leaf_position(&leaf(1)), Some(0));
    assert_eq!(tree.leaf_position(&leaf(2)), Some(1));
    assert_eq!(tree.leaf_position(&leaf(3)), None);
}
