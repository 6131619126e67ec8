//! Transaction records, the leaf data of a batch.
//!
//! # Canonical encoding
//!
//! A record is encoded as 32 bytes: `id`, `amount`, `balance`, `timestamp`
//! in that order, each as an 8-byte big-endian two's-complement integer.
//! The leaf digest is the digest of those 32 bytes.

use crate::{Digest, DigestFunction, Sha256Hasher};

/// Length of [`Record::canonical_bytes`].
pub const CANONICAL_ENCODING_LEN: usize = 32;

/// A transaction record.
///
/// The fields are public and may be changed at any time. The digest taken
/// at construction is never recomputed: after a mutation
/// [`cached_digest`](Record::cached_digest) still names the record as it was
/// committed while [`fresh_digest`](Record::fresh_digest) reflects the
/// current values. Verification relies on that difference to detect
/// tampering.
///
/// A record keeps the digest function it was created with, so it can only
/// be put into a [`Batch`](crate::Batch) or checked against a
/// [`MerkleTree`](crate::MerkleTree) using that same function:
///
/// ```compile_fail
/// use ledger_merkle_tree::{Batch, Blake3Hasher, Record};
///
/// let mut batch = Batch::with_hasher(Blake3Hasher);
/// batch.append(Record::new(1, 100, 200, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<D: DigestFunction = Sha256Hasher> {
    /// Transaction identifier.
    pub id: u64,
    /// Signed amount moved by the transaction.
    pub amount: i64,
    /// Account balance after the transaction.
    pub balance: i64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    digest: Digest,
    hasher: D,
}

impl Record {
    /// Create a record, digesting it with SHA-256.
    pub fn new(id: u64, amount: i64, balance: i64, timestamp: i64) -> Self {
        Self::new_with(Sha256Hasher, id, amount, balance, timestamp)
    }
}

impl<D: DigestFunction> Record<D> {
    /// Create a record, digesting it with `hasher`.
    pub fn new_with(hasher: D, id: u64, amount: i64, balance: i64, timestamp: i64) -> Self {
        let digest = hasher.digest(&encode_fields(id, amount, balance, timestamp));
        Record {
            id,
            amount,
            balance,
            timestamp,
            digest,
            hasher,
        }
    }

    /// Canonical encoding of the current field values.
    pub fn canonical_bytes(&self) -> [u8; CANONICAL_ENCODING_LEN] {
        encode_fields(self.id, self.amount, self.balance, self.timestamp)
    }

    /// The digest taken at construction.
    pub fn cached_digest(&self) -> &Digest {
        &self.digest
    }

    /// Digest of the current field values.
    pub fn fresh_digest(&self) -> Digest {
        self.hasher.digest(&self.canonical_bytes())
    }

    /// True if the fields were changed after construction.
    pub fn is_tampered(&self) -> bool {
        self.fresh_digest() != self.digest
    }

    /// The digest function this record was created with.
    pub fn hasher(&self) -> &D {
        &self.hasher
    }
}

fn encode_fields(
    id: u64,
    amount: i64,
    balance: i64,
    timestamp: i64,
) -> [u8; CANONICAL_ENCODING_LEN] {
    let mut bytes = [0u8; CANONICAL_ENCODING_LEN];
    bytes[0..8].copy_from_slice(&id.to_be_bytes());
    bytes[8..16].copy_from_slice(&amount.to_be_bytes());
    bytes[16..24].copy_from_slice(&balance.to_be_bytes());
    bytes[24..32].copy_from_slice(&timestamp.to_be_bytes());
    bytes
}
