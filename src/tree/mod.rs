//! Node model and its inputs
//!
//! A tree of files and directories is described with [`node::MerkleNode`],
//! hashed with [`hasher::ContentHasher`] and, for trees on disk, loaded by
//! [`walker::Walker`].

pub mod hasher;
pub mod node;
pub mod walker;

pub use hasher::{Blake3, ContentHasher, DagDigest};
pub use node::{DirectoryNode, FileNode, MerkleNode, NodeKind};
pub use walker::{Walker, WalkerConfig};
