//! Filesystem walker that loads a directory tree into `MerkleNode`s

use crate::error::StorageError;
use crate::tree::node::MerkleNode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Entry names to ignore (e.g., ".git", "target", "node_modules")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
    /// Drop directories with nothing to hash instead of handing them to the builder
    pub skip_empty_dirs: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: vec![
                ".git".to_string(),
                "target".to_string(),
                "node_modules".to_string(),
            ],
            max_depth: None,
            skip_empty_dirs: true,
        }
    }
}

/// Directory being assembled while its entries stream past.
struct Frame {
    depth: usize,
    name: String,
    children: Vec<MerkleNode>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Load the root into a node tree.
    ///
    /// A regular file root becomes a single file node. A directory root
    /// becomes a directory node whose children are sorted by name, which
    /// fixes the order the builder pairs them in.
    pub fn load(&self) -> Result<MerkleNode, StorageError> {
        let root = dunce::canonicalize(&self.root).map_err(|e| {
            StorageError::InvalidPath(format!("{}: {}", self.root.display(), e))
        })?;

        let walker = WalkDir::new(&root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        let mut stack: Vec<Frame> = Vec::new();
        let mut loaded: Option<MerkleNode> = None;
        let mut files = 0usize;

        let entries = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.should_ignore(entry));

        for entry in entries {
            let entry = entry.map_err(|e| {
                StorageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk directory: {}", e),
                ))
            })?;

            let depth = entry.depth();
            if let Some(node) = self.close_frames(&mut stack, depth) {
                loaded = Some(node);
            }

            let name = entry_name(&entry, &root);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                stack.push(Frame {
                    depth,
                    name,
                    children: Vec::new(),
                });
            } else if file_type.is_file() {
                let content = read_file(entry.path())?;
                trace!(path = %entry.path().display(), size = content.len(), "Loaded file");
                files += 1;
                let node = MerkleNode::file(name, content);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => loaded = Some(node),
                }
            } else {
                trace!(path = %entry.path().display(), "Skipping non-regular entry");
            }
        }

        if let Some(node) = self.close_frames(&mut stack, 0) {
            loaded = Some(node);
        }

        let node = loaded.ok_or_else(|| {
            StorageError::InvalidPath(format!("Nothing to load at {}", root.display()))
        })?;
        debug!(root = %root.display(), files, "Loaded tree");
        Ok(node)
    }

    /// Pop every frame at `depth` or deeper, attaching each to its parent.
    /// Returns the root node if the outermost frame was closed.
    fn close_frames(&self, stack: &mut Vec<Frame>, depth: usize) -> Option<MerkleNode> {
        let mut closed_root = None;
        while stack.last().map_or(false, |frame| frame.depth >= depth) {
            let Some(frame) = stack.pop() else {
                break;
            };
            let is_empty = frame.children.is_empty();
            let node = MerkleNode::directory(frame.name, frame.children);
            match stack.last_mut() {
                Some(parent) => {
                    if is_empty && self.config.skip_empty_dirs {
                        trace!(name = %node.name(), "Dropping empty directory");
                    } else {
                        parent.children.push(node);
                    }
                }
                None => closed_root = Some(node),
            }
        }
        closed_root
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}

fn entry_name(entry: &DirEntry, root: &Path) -> String {
    if entry.depth() == 0 {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string())
    } else {
        entry.file_name().to_string_lossy().into_owned()
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, StorageError> {
    std::fs::read(path).map_err(|e| {
        StorageError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to read file {}: {}", path.display(), e),
        ))
    })
}
