//! Content hashing over any fixed-output digest
//!
//! `ContentHasher` owns one digest instance and reuses it across calls. Every
//! call resets, feeds and finalizes, so nothing from one input leaks into the
//! next.

use crate::types::Hash;
use digest::{Digest, FixedOutputReset};

/// Default digest: BLAKE3 through its `digest` trait implementation.
pub type Blake3 = blake3::Hasher;

/// Digests the builder can drive: resettable, fixed-size output.
pub trait DagDigest: Digest + FixedOutputReset {}

impl<T: Digest + FixedOutputReset> DagDigest for T {}

/// Reusable hasher for payloads and hash pairings.
pub struct ContentHasher<D: DagDigest> {
    digest: D,
}

impl<D: DagDigest> ContentHasher<D> {
    pub fn new() -> Self {
        Self { digest: D::new() }
    }

    /// Output length of the underlying digest in bytes.
    pub fn digest_len() -> usize {
        <D as Digest>::output_size()
    }

    /// Hash a byte payload.
    pub fn hash(&mut self, bytes: &[u8]) -> Hash {
        Digest::reset(&mut self.digest);
        Digest::update(&mut self.digest, bytes);
        Hash::from_bytes(self.digest.finalize_reset().to_vec())
    }

    /// Hash `left ++ right` and return the hash together with the
    /// concatenation it was computed over.
    pub fn combine(&mut self, left: &Hash, right: &Hash) -> (Hash, Vec<u8>) {
        let joined = Hash::concat(left, right);
        let combined = self.hash(&joined);
        (combined, joined)
    }
}

impl<D: DagDigest> Default for ContentHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}
