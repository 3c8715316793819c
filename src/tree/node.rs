//! Node types: the closed set of shapes the DAG builder accepts.

use crate::error::DagError;

/// Kind of a node, as reported by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Internal,
}

impl NodeKind {
    pub const LEAF_TAG: u8 = 0;
    pub const INTERNAL_TAG: u8 = 1;

    pub fn tag(self) -> u8 {
        match self {
            NodeKind::Leaf => Self::LEAF_TAG,
            NodeKind::Internal => Self::INTERNAL_TAG,
        }
    }
}

/// Entry point for external node sources that encode the kind as a numeric
/// tag. The walker builds `MerkleNode`s directly and never goes through
/// here. Unknown tags are rejected rather than treated as either kind.
impl TryFrom<u8> for NodeKind {
    type Error = DagError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            Self::LEAF_TAG => Ok(NodeKind::Leaf),
            Self::INTERNAL_TAG => Ok(NodeKind::Internal),
            other => Err(DagError::UnsupportedKind(other)),
        }
    }
}

/// File node: an opaque, immutable byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Directory node: ordered children.
///
/// Order is fixed by whoever constructs the node and is the order the
/// builder pairs child hashes in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    pub children: Vec<MerkleNode>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, children: Vec<MerkleNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Iterate children in order. Each call starts a fresh pass.
    pub fn children(&self) -> std::slice::Iter<'_, MerkleNode> {
        self.children.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Merkle node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleNode {
    File(FileNode),
    Directory(DirectoryNode),
}

impl MerkleNode {
    /// Shorthand for a file node.
    pub fn file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        MerkleNode::File(FileNode::new(name, content))
    }

    /// Shorthand for a directory node.
    pub fn directory(name: impl Into<String>, children: Vec<MerkleNode>) -> Self {
        MerkleNode::Directory(DirectoryNode::new(name, children))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            MerkleNode::File(_) => NodeKind::Leaf,
            MerkleNode::Directory(_) => NodeKind::Internal,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MerkleNode::File(file) => &file.name,
            MerkleNode::Directory(dir) => &dir.name,
        }
    }

    /// Raw payload. Only files carry one.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            MerkleNode::File(file) => Some(&file.content),
            MerkleNode::Directory(_) => None,
        }
    }

    /// Byte length: payload length for files, total payload bytes beneath a directory.
    pub fn size(&self) -> u64 {
        match self {
            MerkleNode::File(file) => file.content.len() as u64,
            MerkleNode::Directory(dir) => dir.children().map(MerkleNode::size).sum(),
        }
    }

    /// Number of file nodes at or beneath this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            MerkleNode::File(_) => 1,
            MerkleNode::Directory(dir) => dir.children().map(MerkleNode::leaf_count).sum(),
        }
    }
}
