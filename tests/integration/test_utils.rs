//! Shared helpers for integration tests

use merkledag::tree::{ContentHasher, DagDigest};
use merkledag::types::Hash;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Hash a payload with a fresh hasher.
pub fn h<D: DagDigest>(bytes: &[u8]) -> Hash {
    ContentHasher::<D>::new().hash(bytes)
}

/// Hash of `left ++ right` with a fresh hasher.
pub fn pair<D: DagDigest>(left: &Hash, right: &Hash) -> Hash {
    h::<D>(&Hash::concat(left, right))
}

/// Write `files` (relative path, content) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Serializes tests that read or write `MERKLEDAG__*` variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}
