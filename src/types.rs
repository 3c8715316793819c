//! Core types for the Merkle DAG builder.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash: output of a digest, used verbatim as a store key.
///
/// The length is fixed per digest (32 bytes for BLAKE3 and SHA-256, 64 for
/// SHA-512) but not fixed at the type level, so one `Hash` type serves every
/// hash function the builder is instantiated with.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Hash(Vec<u8>);

impl Hash {
    /// Wrap digest output bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Hash(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse a hash from lowercase or uppercase hex.
    pub fn from_hex(input: &str) -> Result<Self, ApiError> {
        let bytes = hex::decode(input.trim())
            .map_err(|e| ApiError::InvalidHash(format!("{}: {}", input, e)))?;
        if bytes.is_empty() {
            return Err(ApiError::InvalidHash("empty hash".to_string()));
        }
        Ok(Hash(bytes))
    }

    /// Concatenate two hashes into a freshly allocated buffer.
    ///
    /// Neither operand is grown in place; the result owns its own storage.
    pub fn concat(left: &Hash, right: &Hash) -> Vec<u8> {
        let mut joined = Vec::with_capacity(left.len() + right.len());
        joined.extend_from_slice(left.as_bytes());
        joined.extend_from_slice(right.as_bytes());
        joined
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl FromStr for Hash {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl From<Hash> for String {
    fn from(value: Hash) -> Self {
        value.to_hex()
    }
}

impl TryFrom<String> for Hash {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hash::from_hex(&value)
    }
}
