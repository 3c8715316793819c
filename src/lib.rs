//! merkledag: content-addressed Merkle DAGs over file trees
//!
//! Files are stored under the hash of their content. Directories are reduced
//! to a single root by hashing their children's hashes together two at a
//! time, and each of those pairings is stored as well, so every node of the
//! resulting DAG can be looked up by its hash.
//!
//! ```no_run
//! use merkledag::dag;
//! use merkledag::store::MemoryStore;
//! use merkledag::tree::{Blake3, ContentHasher, MerkleNode};
//!
//! let node = MerkleNode::directory(
//!     "docs",
//!     vec![MerkleNode::file("a.txt", "a"), MerkleNode::file("b.txt", "b")],
//! );
//! let store = MemoryStore::new();
//! let mut hasher = ContentHasher::<Blake3>::new();
//! let root = dag::add(&store, &node, &mut hasher)?;
//! println!("{root}");
//! # Ok::<(), merkledag::error::DagError>(())
//! ```

pub mod cli;
pub mod config;
pub mod dag;
pub mod error;
pub mod logging;
pub mod store;
pub mod tree;
pub mod types;

pub use dag::{add, AddSummary, DagBuilder};
pub use error::{ApiError, DagError, StorageError};
pub use types::Hash;
