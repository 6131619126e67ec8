use eyre::eyre;
use ledger_merkle_tree::{Digest, MerkleTree, ProofStep, Sha256Hasher};
use tracing::info;
use tutorials::{init_tracing, sample_batch};

fn main() -> eyre::Result<()> {
    init_tracing()?;

    let count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(11);
    let expected_root = std::env::args()
        .nth(2)
        .map(|arg| Digest::from_hex(&arg))
        .transpose()?;

    let batch = sample_batch(count);
    let ctx = MerkleTree::build_with_cost(batch.leaf_digests(), Sha256Hasher);
    let cost = ctx.cost;
    let tree = ctx.value?;
    info!(hash_node_calls = cost.hash_node_calls, "built tree");

    // Print levels from the root down.
    for (depth, level) in tree.levels().iter().rev().enumerate() {
        println!("level {} ({} nodes)", tree.height() - depth, level.len());
        for digest in level {
            println!("    {}", digest);
        }
    }

    let last = tree.leaf_count() - 1;
    let proof = tree.prove(last)?;
    println!("proof for leaf {}:", last);
    for step in proof.steps() {
        match step {
            ProofStep::Left(sibling) => println!("    left  {}", sibling),
            ProofStep::Right(sibling) => println!("    right {}", sibling),
            ProofStep::Carry => println!("    carry"),
        }
    }

    if let Some(expected) = expected_root {
        if &expected != tree.root() {
            return Err(eyre!("root mismatch: expected {}, built {}", expected, tree.root()));
        }
        info!(root = %expected, "root matches");
    }

    Ok(())
}
