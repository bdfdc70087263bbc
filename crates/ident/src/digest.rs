//! One-way digest of seed strings.

use sha2::{Digest, Sha256};

/// Length in bytes of every seed digest.
pub const DIGEST_LEN: usize = 32;

/// Turns a seed string into a fixed-length digest.
///
/// Implementations must be pure: the same seed always yields the same bytes. Providers are
/// generic over this trait so tests can force collisions with a hand-built digest.
pub trait SeedDigest {
    /// Returns the digest of the UTF-8 bytes of `seed`.
    fn digest(&self, seed: &str) -> [u8; DIGEST_LEN];
}

/// SHA-256 over the UTF-8 bytes of the seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Digest;

impl SeedDigest for Sha256Digest {
    fn digest(&self, seed: &str) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.finalize().into()
    }
}
