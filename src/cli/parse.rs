//! CLI parse: clap types for merkledag. No behavior; definitions only.

use crate::config::HashAlgorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// merkledag CLI - content-addressed Merkle DAGs over file trees
#[derive(Debug, Parser)]
#[command(name = "merkledag", version)]
#[command(about = "Build content-addressed Merkle DAGs over files and directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root (where .merkledag.toml is looked up)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store directory (overrides store.path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Hash algorithm: blake3, sha256, sha512 (overrides hash)
    #[arg(long, global = true)]
    pub hash: Option<HashAlgorithm>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a file or directory to the store and print its root hash
    Add {
        /// Path to add
        path: PathBuf,
        /// Print a JSON summary instead of the bare hash
        #[arg(long)]
        json: bool,
    },
    /// Compute the root hash without writing to the store
    Root {
        /// Path to hash
        path: PathBuf,
    },
    /// Print the value stored under a hash
    Get {
        /// Hex-encoded hash
        #[arg(value_name = "HASH")]
        key: String,
        /// Write the raw bytes instead of hex
        #[arg(long)]
        raw: bool,
    },
    /// Show store statistics
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}
