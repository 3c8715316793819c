//! Layered configuration loading

use super::test_utils::env_lock;
use merkledag::config::{workspace_config_path, ConfigLoader, HashAlgorithm};
use merkledag::error::ApiError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_file() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::load_layers(None, temp_dir.path()).unwrap();
    assert_eq!(config.hash, HashAlgorithm::Blake3);
    assert!(config.walker.skip_empty_dirs);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_workspace_file_sets_nested_sections() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        workspace_config_path(temp_dir.path()),
        r#"
[store]
path = "/srv/dag"

[walker]
follow_symlinks = true
ignore_patterns = [".hg"]

[logging.modules]
sled = "error"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_layers(None, temp_dir.path()).unwrap();
    assert_eq!(config.store.path, PathBuf::from("/srv/dag"));
    assert!(config.walker.follow_symlinks);
    assert_eq!(config.walker.ignore_patterns, vec![".hg".to_string()]);
    assert_eq!(
        config.logging.modules.get("sled").map(String::as_str),
        Some("error")
    );
}

#[test]
fn test_nested_env_override() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();

    std::env::set_var("MERKLEDAG__WALKER__SKIP_EMPTY_DIRS", "false");
    std::env::set_var("MERKLEDAG__WALKER__MAX_DEPTH", "3");
    let result = ConfigLoader::load_layers(None, temp_dir.path());
    std::env::remove_var("MERKLEDAG__WALKER__SKIP_EMPTY_DIRS");
    std::env::remove_var("MERKLEDAG__WALKER__MAX_DEPTH");

    let config = result.unwrap();
    assert!(!config.walker.skip_empty_dirs);
    assert_eq!(config.walker.max_depth, Some(3));
}

#[test]
fn test_unknown_hash_rejected() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    fs::write(workspace_config_path(temp_dir.path()), "hash = \"md5\"\n").unwrap();

    let result = ConfigLoader::load_layers(None, temp_dir.path());
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn test_file_output_requires_path() {
    let _guard = env_lock();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        workspace_config_path(temp_dir.path()),
        "[logging]\noutput = \"file\"\n",
    )
    .unwrap();

    let err = ConfigLoader::load_layers(None, temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("logging.file"));
}
