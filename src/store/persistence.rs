//! Persistence layer backed by sled

use crate::error::StorageError;
use crate::store::KvStore;
use std::path::Path;
use tracing::debug;

/// Sled-based implementation of KvStore
///
/// Keys are raw hash bytes and values are raw payloads; no serialization
/// layer sits in between.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open (or create) a SledStore at the given path
    ///
    /// The path can be a directory (sled will create a database there) or
    /// a file path (sled will use it as the database file).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|e| {
            StorageError::Backend(format!(
                "Failed to open sled database at {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "Opened sled store");
        Ok(Self { db })
    }

    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key)?.map(|value| value.to_vec()))
    }

    /// Check if a key exists in the store
    pub fn contains(&self, key: &[u8]) -> Result<bool, StorageError> {
        Ok(self.db.contains_key(key)?)
    }

    /// Number of entries in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Total bytes held in values
    pub fn value_bytes(&self) -> Result<u64, StorageError> {
        let mut total = 0u64;
        for item in self.db.iter() {
            let (_, value) = item?;
            total += value.len() as u64;
        }
        Ok(total)
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

impl KvStore for SledStore {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        self.db.insert(key, value)?;
        Ok(())
    }
}
