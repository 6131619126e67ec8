use eyre::eyre;
use tracing::info;
use tutorials::{init_tracing, sample_batch};

const TAMPERED: usize = 9;

fn main() -> eyre::Result<()> {
    init_tracing()?;

    // Commit eleven records and remember the root.
    let mut batch = sample_batch(11);
    let tree = batch.commit()?;
    info!(root = %tree.root(), count = batch.count(), "committed batch");

    // Before anything changes, the record verifies and the batch is consistent.
    let record = batch
        .record(TAMPERED)
        .ok_or_else(|| eyre!("batch has no record {}", TAMPERED))?;
    println!("record {} before tampering: {:?}", record.id, tree.verify_record(record)?);
    println!("batch before tampering: {:?}", batch.consistency_check());

    // Change the balance behind the tree's back.
    batch
        .record_mut(TAMPERED)
        .ok_or_else(|| eyre!("batch has no record {}", TAMPERED))?
        .balance = 30000;

    let record = batch
        .record(TAMPERED)
        .ok_or_else(|| eyre!("batch has no record {}", TAMPERED))?;
    println!("record {} after tampering: {:?}", record.id, tree.verify_record(record)?);
    println!("batch after tampering: {:?}", batch.consistency_check());

    // Adopting the rebuilt root hides the change from the batch check.
    let refreshed = batch.refresh_root()?;
    info!(root = %refreshed.root(), "refreshed batch root");
    println!("batch after refresh: {:?}", batch.consistency_check());

    Ok(())
}
