//! CLI route: single route table and run context.

use crate::cli::output::CommandOutput;
use crate::cli::parse::{Cli, Commands};
use crate::config::{ConfigLoader, DagConfig, HashAlgorithm};
use crate::dag::{AddSummary, DagBuilder};
use crate::error::{ApiError, DagError, StorageError};
use crate::store::{KvStore, MemoryStore, SledStore};
use crate::tree::hasher::Blake3;
use crate::tree::node::MerkleNode;
use crate::tree::walker::Walker;
use crate::types::Hash;
use serde_json::json;
use sha2::{Sha256, Sha512};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Runtime context for CLI execution: the resolved configuration and the
/// store, opened on first use.
pub struct RunContext {
    config: DagConfig,
    store: OnceLock<SledStore>,
}

impl RunContext {
    /// Resolve configuration from the config file (or workspace layers) and
    /// apply command-line overrides on top.
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&cli.workspace)?,
        };

        if let Some(ref store) = cli.store {
            config.store.path = store.clone();
        }
        if let Some(hash) = cli.hash {
            config.hash = hash;
        }

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: DagConfig) -> Self {
        Self {
            config,
            store: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &DagConfig {
        &self.config
    }

    /// Execute one command.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Add { path, json } => self.handle_add(path, *json),
            Commands::Root { path } => self.handle_root(path),
            Commands::Get { key, raw } => self.handle_get(key, *raw),
            Commands::Stats { json } => self.handle_stats(*json),
            Commands::Config => Ok(CommandOutput::Text(self.config.to_toml()?)),
        }
    }

    fn handle_add(&self, path: &Path, as_json: bool) -> Result<CommandOutput, ApiError> {
        let node = self.load(path)?;
        let store = self.open_store()?;
        let summary = add_with_algorithm(store, &node, self.config.hash)?;
        store.flush()?;

        if as_json {
            let rendered = serde_json::to_string_pretty(&summary)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render summary: {}", e)))?;
            Ok(CommandOutput::Text(rendered))
        } else {
            Ok(CommandOutput::Text(summary.root.to_hex()))
        }
    }

    fn handle_root(&self, path: &Path) -> Result<CommandOutput, ApiError> {
        let node = self.load(path)?;
        let scratch = MemoryStore::new();
        let summary = add_with_algorithm(&scratch, &node, self.config.hash)?;
        debug!(entries = scratch.len(), "Dry run discarded store entries");
        Ok(CommandOutput::Text(summary.root.to_hex()))
    }

    fn handle_get(&self, hash: &str, raw: bool) -> Result<CommandOutput, ApiError> {
        let key = Hash::from_hex(hash)?;
        let expected = self.config.hash.digest_len();
        if key.len() != expected {
            return Err(ApiError::InvalidHash(format!(
                "{} is {} bytes, {} hashes are {} bytes",
                hash,
                key.len(),
                self.config.hash,
                expected
            )));
        }

        let store = self.open_store()?;
        let value = store
            .get(key.as_bytes())?
            .ok_or_else(|| ApiError::NotFound(key.to_hex()))?;

        if raw {
            Ok(CommandOutput::Bytes(value))
        } else {
            Ok(CommandOutput::Text(hex::encode(value)))
        }
    }

    fn handle_stats(&self, as_json: bool) -> Result<CommandOutput, ApiError> {
        let store = self.open_store()?;
        let entries = store.len();
        let value_bytes = store.value_bytes()?;
        let path = self.config.store.path.display().to_string();

        if as_json {
            let body = json!({
                "store": path,
                "entries": entries,
                "value_bytes": value_bytes,
            });
            Ok(CommandOutput::Text(body.to_string()))
        } else {
            Ok(CommandOutput::Text(format!(
                "store: {}\nentries: {}\nvalue bytes: {}",
                path, entries, value_bytes
            )))
        }
    }

    fn load(&self, path: &Path) -> Result<MerkleNode, ApiError> {
        let node = Walker::with_config(path, self.config.walker.clone()).load()?;
        info!(path = %path.display(), leaves = node.leaf_count(), "Loaded input");
        Ok(node)
    }

    fn open_store(&self) -> Result<&SledStore, ApiError> {
        if let Some(store) = self.store.get() {
            return Ok(store);
        }
        let path = &self.config.store.path;
        std::fs::create_dir_all(path).map_err(StorageError::IoError)?;
        let opened = SledStore::open(path)?;
        Ok(self.store.get_or_init(|| opened))
    }
}

/// Run the builder with the digest named by `algorithm`.
pub fn add_with_algorithm<S: KvStore + ?Sized>(
    store: &S,
    node: &MerkleNode,
    algorithm: HashAlgorithm,
) -> Result<AddSummary, DagError> {
    let name = algorithm.name();
    match algorithm {
        HashAlgorithm::Blake3 => DagBuilder::<S, Blake3>::new(store)
            .with_algorithm_name(name)
            .add(node),
        HashAlgorithm::Sha256 => DagBuilder::<S, Sha256>::new(store)
            .with_algorithm_name(name)
            .add(node),
        HashAlgorithm::Sha512 => DagBuilder::<S, Sha512>::new(store)
            .with_algorithm_name(name)
            .add(node),
    }
}
