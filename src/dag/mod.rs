//! Merkle DAG construction
//!
//! `add` turns a node into a root hash and writes every addressable unit it
//! meets into the store:
//!
//! - a file is stored as `hash(content) -> content`;
//! - a directory first adds each child (recursively, so nested directories
//!   and their files are persisted too), then pairs the child hashes with
//!   [`reducer::reduce`], storing `hash(l ++ r) -> l ++ r` for every pairing.
//!
//! Writes are not transactional. If a store write fails the error is
//! returned immediately and earlier writes from the same call stay in place.

pub mod reducer;

pub use reducer::reduce;

use crate::error::DagError;
use crate::store::KvStore;
use crate::tree::hasher::{ContentHasher, DagDigest};
use crate::tree::node::MerkleNode;
use crate::types::Hash;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Add a node to the store and return its root hash.
pub fn add<S, D>(store: &S, node: &MerkleNode, hasher: &mut ContentHasher<D>) -> Result<Hash, DagError>
where
    S: KvStore + ?Sized,
    D: DagDigest,
{
    let mut stats = AddStats::default();
    add_node(store, node, hasher, &mut stats)
}

/// Counters collected while adding a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddStats {
    /// Files hashed and stored
    pub leaves: usize,
    /// Directories reduced
    pub directories: usize,
    /// Pairing nodes stored
    pub pairings: usize,
    /// Sum of value lengths written
    pub bytes_written: u64,
}

/// Result of a [`DagBuilder::add`] call.
#[derive(Debug, Clone, Serialize)]
pub struct AddSummary {
    pub root: Hash,
    pub algorithm: &'static str,
    #[serde(flatten)]
    pub stats: AddStats,
    pub duration_ms: u64,
}

/// DAG builder bound to one store and one hasher.
///
/// The hasher is owned, so a builder cannot be shared across threads
/// mid-build; give each concurrent build its own builder.
pub struct DagBuilder<'s, S: KvStore + ?Sized, D: DagDigest> {
    store: &'s S,
    hasher: ContentHasher<D>,
    algorithm: &'static str,
}

impl<'s, S: KvStore + ?Sized, D: DagDigest> DagBuilder<'s, S, D> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            hasher: ContentHasher::new(),
            algorithm: "custom",
        }
    }

    /// Label reported in summaries and logs.
    pub fn with_algorithm_name(mut self, name: &'static str) -> Self {
        self.algorithm = name;
        self
    }

    /// Add a node and report what was written.
    #[instrument(skip_all, fields(node = %node.name(), algorithm = self.algorithm))]
    pub fn add(&mut self, node: &MerkleNode) -> Result<AddSummary, DagError> {
        let start = Instant::now();
        debug!(leaves = node.leaf_count(), size = node.size(), "Starting add");

        let mut stats = AddStats::default();
        let root = add_node(self.store, node, &mut self.hasher, &mut stats)?;

        let duration = start.elapsed();
        info!(
            root = %root,
            leaves = stats.leaves,
            directories = stats.directories,
            pairings = stats.pairings,
            duration_ms = duration.as_millis(),
            "Add completed"
        );

        Ok(AddSummary {
            root,
            algorithm: self.algorithm,
            stats,
            duration_ms: duration.as_millis() as u64,
        })
    }

    /// Hash a payload with this builder's hasher, without storing anything.
    pub fn content_hash(&mut self, bytes: &[u8]) -> Hash {
        self.hasher.hash(bytes)
    }
}

fn add_node<S, D>(
    store: &S,
    node: &MerkleNode,
    hasher: &mut ContentHasher<D>,
    stats: &mut AddStats,
) -> Result<Hash, DagError>
where
    S: KvStore + ?Sized,
    D: DagDigest,
{
    match node {
        MerkleNode::File(file) => {
            let hash = hasher.hash(&file.content);
            store.put(hash.as_bytes(), &file.content)?;
            stats.leaves += 1;
            stats.bytes_written += file.content.len() as u64;
            trace!(name = %file.name, hash = %hash, size = file.content.len(), "Stored file");
            Ok(hash)
        }
        MerkleNode::Directory(dir) => {
            if dir.is_empty() {
                return Err(DagError::EmptyDirectory {
                    name: dir.name.clone(),
                });
            }

            let child_hashes = dir
                .children()
                .map(|child| add_node(store, child, hasher, stats))
                .collect::<Result<Vec<_>, _>>()?;

            let (root, pairings) = reducer::reduce(child_hashes, hasher, store)?;
            stats.directories += 1;
            stats.pairings += pairings;
            stats.bytes_written += (pairings * 2 * ContentHasher::<D>::digest_len()) as u64;
            debug!(name = %dir.name, children = dir.children.len(), pairings, root = %root, "Reduced directory");
            Ok(root)
        }
    }
}
