//! Content-addressed key-value store
//!
//! The DAG builder only ever writes: every leaf payload and every pairing
//! concatenation goes in under its hash. Reading back is left to the concrete
//! stores.

pub mod memory;
pub mod persistence;

pub use memory::MemoryStore;
pub use persistence::SledStore;

use crate::error::StorageError;

/// Key-value store interface
///
/// Implementations must tolerate concurrent writes of independent keys.
/// Writing the same key twice with the same value is harmless.
pub trait KvStore: Send + Sync {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}
