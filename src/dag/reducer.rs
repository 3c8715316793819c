//! Pairwise reduction of a hash sequence to a single root

use crate::error::DagError;
use crate::store::KvStore;
use crate::tree::hasher::{ContentHasher, DagDigest};
use crate::types::Hash;
use tracing::trace;

/// Reduce an ordered, non-empty sequence of hashes to one root hash.
///
/// Each level pairs `(h[2i], h[2i+1])` left to right. A pair is stored as
/// `combined -> h[2i] ++ h[2i+1]` and `combined` moves up a level. An odd
/// trailing hash moves up unchanged without a write, so it ends up attached
/// closer to the root than its siblings. A single hash is its own root.
///
/// Returns the number of pairings written alongside the root.
pub fn reduce<S, D>(
    mut level: Vec<Hash>,
    hasher: &mut ContentHasher<D>,
    store: &S,
) -> Result<(Hash, usize), DagError>
where
    S: KvStore + ?Sized,
    D: DagDigest,
{
    if level.is_empty() {
        return Err(DagError::EmptySequence);
    }

    let mut pairings = 0;
    let mut depth = 0;

    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut chunks = level.chunks_exact(2);

        for pair in chunks.by_ref() {
            let (combined, joined) = hasher.combine(&pair[0], &pair[1]);
            store.put(combined.as_bytes(), &joined)?;
            pairings += 1;
            next.push(combined);
        }

        if let [carried] = chunks.remainder() {
            next.push(carried.clone());
        }

        trace!(depth, width = level.len(), next_width = next.len(), "Reduced level");
        level = next;
        depth += 1;
    }

    // Loop exits with exactly one element; the initial check rules out zero.
    let root = level.pop().ok_or(DagError::EmptySequence)?;
    Ok((root, pairings))
}
