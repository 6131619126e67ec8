//! Shared setup for the tutorial binaries.

use ledger_merkle_tree::{Batch, Record};

/// 2021-01-05T20:23:06.518Z in milliseconds.
pub const BASE_TIMESTAMP_MS: i64 = 1_609_878_186_518;
const FOUR_HOURS_MS: i64 = 4 * 60 * 60 * 1000;

/// Install a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))
}

/// A batch of `count` records with ids `1..=count`, amounts and balances
/// scaling with the id and timestamps four hours apart.
pub fn sample_batch(count: u64) -> Batch {
    let mut batch = Batch::new();
    for id in 1..=count {
        let entropy = id as i64;
        batch.append(Record::new(
            id,
            entropy * 100,
            entropy * 200,
            BASE_TIMESTAMP_MS + entropy * FOUR_HOURS_MS,
        ));
    }
    batch
}
