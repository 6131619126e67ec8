mod test_tree;

use crate::{Batch, Digest, DigestFunction, Record, Sha256Hasher};

/// 2021-01-05T20:23:06.518Z in milliseconds.
const BASE_TIMESTAMP_MS: i64 = 1_609_878_186_518;
const FOUR_HOURS_MS: i64 = 4 * 60 * 60 * 1000;

/// Record `n` of the reference ledger: amount and balance scale with `n`,
/// timestamps four hours apart.
fn ledger_record(n: u64) -> Record {
    let entropy = n as i64;
    Record::new(
        n,
        entropy * 100,
        entropy * 200,
        BASE_TIMESTAMP_MS + entropy * FOUR_HOURS_MS,
    )
}

/// Batch of ledger records with ids `1..=count`.
fn ledger_batch(count: u64) -> Batch {
    let mut batch = Batch::new();
    for n in 1..=count {
        batch.append(ledger_record(n));
    }
    batch
}

fn leaf(seed: u32) -> Digest {
    Sha256Hasher.digest(&seed.to_be_bytes())
}

fn leaves(count: u32) -> Vec<Digest> {
    (0..count).map(leaf).collect()
}
