//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file,
//! then the workspace file, then `MERKLEDAG__*` environment variables. An
//! explicit config file replaces both file layers.

use crate::error::ApiError;
use crate::logging::{self, LoggingConfig};
use crate::tree::walker::WalkerConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

mod merge {
    pub mod merge_policy;
}

mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use merge::merge_policy::ENV_PREFIX;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Hash function used to address nodes.
///
/// Every algorithm yields different keys for the same content, so a store
/// should be populated with one algorithm only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest output length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Blake3 | HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blake3" => Ok(HashAlgorithm::Blake3),
            "sha256" | "sha2-256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha2-512" => Ok(HashAlgorithm::Sha512),
            other => Err(ApiError::ConfigError(format!(
                "Unknown hash algorithm: {} (expected blake3, sha256 or sha512)",
                other
            ))),
        }
    }
}

/// Storage paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the sled database
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// `<data dir>/merkledag/store`, or `.merkledag/store` when no home directory is known.
pub fn default_store_path() -> PathBuf {
    ProjectDirs::from("", "", "merkledag")
        .map(|dirs| dirs.data_dir().join("store"))
        .unwrap_or_else(|| PathBuf::from(".merkledag").join("store"))
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagConfig {
    /// Hash function for content and pairings
    #[serde(default)]
    pub hash: HashAlgorithm,

    /// Store location
    #[serde(default)]
    pub store: StorageConfig,

    /// Filesystem loading rules
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DagConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.store.path.as_os_str().is_empty() {
            errors.push("store.path cannot be empty".to_string());
        }

        if self.walker.ignore_patterns.iter().any(|p| p.is_empty()) {
            errors.push("walker.ignore_patterns cannot contain empty patterns".to_string());
        }

        if let Err(e) = logging::validate_format(&self.logging.format) {
            errors.push(e.to_string());
        }
        if let Err(e) = logging::validate_output(&self.logging.output) {
            errors.push(e.to_string());
        }
        if self.logging.output == "file" && self.logging.file.is_none() {
            errors.push("logging.file is required when logging.output is 'file'".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render as TOML, the same format the config files use.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}

/// Loads `DagConfig` from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global file, `<workspace_root>/.merkledag.toml` and environment.
    pub fn load(workspace_root: &Path) -> Result<DagConfig, ApiError> {
        Self::load_layers(global_config_path().as_deref(), workspace_root)
    }

    /// Load defaults, one explicit file, then environment.
    pub fn load_from_file(path: &Path) -> Result<DagConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = Self::defaults()?.add_source(config::File::from(path));
        Self::finish(builder)
    }

    /// Layered load with an explicit global file location.
    pub fn load_layers(
        global_file: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<DagConfig, ApiError> {
        let builder = Self::defaults()?;
        let builder = sources::global_file::add_to_builder(builder, global_file);
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root);
        Self::finish(builder)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ApiError> {
        let store_path = default_store_path();
        Ok(merge::merge_policy::builder_with_defaults(
            &store_path.to_string_lossy(),
        )?)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<DagConfig, ApiError> {
        let config: DagConfig = merge::merge_policy::add_env_overrides(builder)
            .build()?
            .try_deserialize()?;

        config.validate().map_err(|errors| {
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;

        debug!(hash = %config.hash, store = %config.store.path.display(), "Configuration loaded");
        Ok(config)
    }
}
