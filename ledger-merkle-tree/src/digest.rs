//! The digest seam.
//!
//! Digests are carried as lowercase hexadecimal text. Interior nodes are the
//! digest of the two child digests' hex texts concatenated left first, so a
//! node is `H(hex(left) || hex(right))`, not a hash over raw digest bytes.

use core::fmt;

use sha2::Digest as _;

use crate::{MerkleTreeError, error::Result};

/// Length in hex characters of every digest produced by the bundled hashers.
pub const DIGEST_HEX_LEN: usize = 64;

/// A fixed-length digest rendered as lowercase hexadecimal text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// Parse a digest from its hex text.
    ///
    /// Only the canonical form is accepted: exactly [`DIGEST_HEX_LEN`]
    /// characters of `0-9a-f`.
    pub fn from_hex(text: &str) -> Result<Self> {
        if text.len() != DIGEST_HEX_LEN {
            return Err(MerkleTreeError::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                DIGEST_HEX_LEN,
                text.len()
            )));
        }
        if let Some(bad) = text
            .chars()
            .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(MerkleTreeError::InvalidDigest(format!(
                "non-canonical hex character {:?}",
                bad
            )));
        }
        Ok(Digest(text.to_owned()))
    }

    pub(crate) fn from_raw(bytes: &[u8]) -> Self {
        Digest(hex::encode(bytes))
    }

    /// The hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex text as bytes; this is what gets concatenated when combining.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A pure, deterministic one-way function from bytes to a [`Digest`].
pub trait DigestFunction: Clone {
    /// Digest an arbitrary byte string.
    fn digest(&self, data: &[u8]) -> Digest;

    /// Digest of `left` and `right` concatenated in that order.
    fn combine(&self, left: &Digest, right: &Digest) -> Digest {
        let mut input = Vec::with_capacity(left.as_bytes().len() + right.as_bytes().len());
        input.extend_from_slice(left.as_bytes());
        input.extend_from_slice(right.as_bytes());
        self.digest(&input)
    }
}

/// SHA-256. The default digest function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl DigestFunction for Sha256Hasher {
    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_raw(&sha2::Sha256::digest(data))
    }
}

/// Blake3 (256-bit output).
#[cfg(feature = "blake3")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

#[cfg(feature = "blake3")]
impl DigestFunction for Blake3Hasher {
    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_raw(blake3::hash(data).as_bytes())
    }
}
