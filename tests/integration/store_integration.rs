//! Store backends driven through the DAG builder

use super::test_utils::{h, pair};
use merkledag::dag::{self, DagBuilder};
use merkledag::store::{KvStore, MemoryStore, SledStore};
use merkledag::tree::{Blake3, ContentHasher, MerkleNode};
use merkledag::types::Hash;
use tempfile::TempDir;

fn sample() -> MerkleNode {
    MerkleNode::directory(
        "root",
        vec![
            MerkleNode::file("a", "alpha"),
            MerkleNode::file("b", "beta"),
            MerkleNode::file("c", "gamma"),
        ],
    )
}

#[test]
fn test_sled_and_memory_agree() {
    let temp_dir = TempDir::new().unwrap();
    let sled_store = SledStore::open(temp_dir.path()).unwrap();
    let memory = MemoryStore::new();

    let mut hasher = ContentHasher::<Blake3>::new();
    let sled_root = dag::add(&sled_store, &sample(), &mut hasher).unwrap();
    let memory_root = dag::add(&memory, &sample(), &mut hasher).unwrap();

    assert_eq!(sled_root, memory_root);
    assert_eq!(sled_store.len(), memory.len());
    for (key, value) in memory.entries() {
        assert_eq!(sled_store.get(&key).unwrap(), Some(value));
    }
}

#[test]
fn test_sled_pairing_values_resolve_to_children() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::open(temp_dir.path()).unwrap();
    let mut hasher = ContentHasher::<Blake3>::new();

    let root = dag::add(&store, &sample(), &mut hasher).unwrap();
    store.flush().unwrap();

    // root -> ab ++ c, ab -> a ++ b
    let value = store.get(root.as_bytes()).unwrap().unwrap();
    let (left, right) = value.split_at(32);
    let ab = pair::<Blake3>(&h::<Blake3>(b"alpha"), &h::<Blake3>(b"beta"));
    assert_eq!(left, ab.as_bytes());
    assert_eq!(store.get(right).unwrap(), Some(b"gamma".to_vec()));

    let ab_value = store.get(left).unwrap().unwrap();
    let (a, b) = ab_value.split_at(32);
    assert_eq!(store.get(a).unwrap(), Some(b"alpha".to_vec()));
    assert_eq!(store.get(b).unwrap(), Some(b"beta".to_vec()));
}

#[test]
fn test_readding_is_idempotent() {
    let store = MemoryStore::new();
    let mut builder = DagBuilder::<_, Blake3>::new(&store);

    let first = builder.add(&sample()).unwrap();
    let entries = store.entries();
    let second = builder.add(&sample()).unwrap();

    assert_eq!(first.root, second.root);
    assert_eq!(store.entries(), entries);
    assert_eq!(store.writes(), 2 * (first.stats.leaves + first.stats.pairings) as u64);
}

#[test]
fn test_boxed_trait_object_store() {
    let store: Box<dyn KvStore> = Box::new(MemoryStore::new());
    let mut hasher = ContentHasher::<Blake3>::new();

    let root = dag::add(&store, &sample(), &mut hasher).unwrap();
    assert_eq!(root, dag::add(&MemoryStore::new(), &sample(), &mut hasher).unwrap());
}

#[test]
fn test_concurrent_adds_share_one_store() {
    let store = MemoryStore::new();
    let trees: Vec<MerkleNode> = (0..4)
        .map(|i| {
            MerkleNode::directory(
                format!("tree{i}"),
                (0..=i)
                    .map(|j| MerkleNode::file(format!("f{j}"), format!("{i}-{j}")))
                    .collect(),
            )
        })
        .collect();

    let roots: Vec<Hash> = std::thread::scope(|scope| {
        let handles: Vec<_> = trees
            .iter()
            .map(|tree| {
                let store = &store;
                scope.spawn(move || {
                    let mut hasher = ContentHasher::<Blake3>::new();
                    dag::add(store, tree, &mut hasher).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    for (tree, root) in trees.iter().zip(&roots) {
        let mut hasher = ContentHasher::<Blake3>::new();
        assert_eq!(*root, dag::add(&MemoryStore::new(), tree, &mut hasher).unwrap());
        assert!(store.contains(root.as_bytes()));
    }
}
