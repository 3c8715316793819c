//! Filesystem trees loaded with the walker and reduced to roots

use super::test_utils::write_tree;
use merkledag::dag;
use merkledag::store::MemoryStore;
use merkledag::tree::{Blake3, ContentHasher, MerkleNode, Walker, WalkerConfig};
use merkledag::types::Hash;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn root_of(path: &Path) -> Hash {
    root_with(path, WalkerConfig::default())
}

fn root_with(path: &Path, config: WalkerConfig) -> Hash {
    let node = Walker::with_config(path, config).load().unwrap();
    let mut hasher = ContentHasher::<Blake3>::new();
    dag::add(&MemoryStore::new(), &node, &mut hasher).unwrap()
}

/// Test that the same filesystem produces the same root hash
#[test]
fn test_same_filesystem_same_root() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[("file1.txt", "content1"), ("file2.txt", "content2"), ("dir1/file3.txt", "content3")],
    );

    assert_eq!(root_of(temp_dir.path()), root_of(temp_dir.path()));
}

/// Test that file content changes produce different root hashes
#[test]
fn test_file_content_change_different_root() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("a.txt", "one"), ("b.txt", "two")]);
    let before = root_of(temp_dir.path());

    fs::write(temp_dir.path().join("b.txt"), "three").unwrap();
    assert_ne!(before, root_of(temp_dir.path()));
}

#[test]
fn test_file_addition_different_root() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("a.txt", "one")]);
    let before = root_of(temp_dir.path());

    write_tree(temp_dir.path(), &[("b.txt", "one")]);
    assert_ne!(before, root_of(temp_dir.path()));
}

/// Renames only matter through the sort order they imply.
#[test]
fn test_rename_changes_root_only_when_order_changes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", "first"), ("b.txt", "second")]);
    let original = root_of(root);

    fs::rename(root.join("a.txt"), root.join("a2.txt")).unwrap();
    assert_eq!(original, root_of(root));

    fs::rename(root.join("a2.txt"), root.join("c.txt")).unwrap();
    assert_ne!(original, root_of(root));
}

#[test]
fn test_loaded_tree_matches_hand_built_tree() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[("a.txt", "a"), ("sub/b.txt", "b"), ("sub/c.txt", "c"), ("z.txt", "z")],
    );

    let expected = MerkleNode::directory(
        "ignored",
        vec![
            MerkleNode::file("a.txt", "a"),
            MerkleNode::directory(
                "sub",
                vec![MerkleNode::file("b.txt", "b"), MerkleNode::file("c.txt", "c")],
            ),
            MerkleNode::file("z.txt", "z"),
        ],
    );
    let mut hasher = ContentHasher::<Blake3>::new();
    let expected_root = dag::add(&MemoryStore::new(), &expected, &mut hasher).unwrap();

    assert_eq!(root_of(temp_dir.path()), expected_root);
}

#[test]
fn test_ignored_and_empty_entries_do_not_affect_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", "a"), ("b.txt", "b")]);
    let clean = root_of(root);

    write_tree(root, &[(".git/HEAD", "ref: refs/heads/main"), ("target/out.bin", "xx")]);
    fs::create_dir(root.join("empty")).unwrap();
    assert_eq!(clean, root_of(root));

    let config = WalkerConfig {
        ignore_patterns: Vec::new(),
        ..WalkerConfig::default()
    };
    assert_ne!(clean, root_with(root, config));
}

#[test]
fn test_single_file_root() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("lonely.txt", "solo")]);

    let file_root = root_of(&temp_dir.path().join("lonely.txt"));
    assert_eq!(file_root, ContentHasher::<Blake3>::new().hash(b"solo"));
    // a directory holding one file reduces to that file
    assert_eq!(root_of(temp_dir.path()), file_root);
}

#[test]
fn test_empty_directory_kept_when_configured() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("a.txt", "a")]);
    fs::create_dir(temp_dir.path().join("hollow")).unwrap();

    let config = WalkerConfig {
        skip_empty_dirs: false,
        ..WalkerConfig::default()
    };
    let node = Walker::with_config(temp_dir.path(), config).load().unwrap();
    let mut hasher = ContentHasher::<Blake3>::new();

    let err = dag::add(&MemoryStore::new(), &node, &mut hasher).unwrap_err();
    assert!(err.to_string().contains("hollow"));
}
