//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Prefix for environment overrides, e.g. `MERKLEDAG__HASH=sha256` or
/// `MERKLEDAG__STORE__PATH=/var/lib/merkledag`.
pub const ENV_PREFIX: &str = "MERKLEDAG";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults(
    default_store_path: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("hash", "blake3")?
        .set_default("store.path", default_store_path)
}

/// Environment variables are applied last and win over every file.
pub fn add_env_overrides(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    )
}
