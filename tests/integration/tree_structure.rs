//! Integration tests for tree structure correctness

use dirtree::tree::builder::TreeBuilder;
use dirtree::tree::node::FsNode;
use std::fs;
use tempfile::TempDir;

fn names(node: &FsNode) -> Vec<&str> {
    node.entries().iter().map(FsNode::name).collect()
}

/// Test that tree contains all files
#[test]
fn test_tree_contains_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("file1.txt"), "content1").unwrap();
    fs::write(root.join("file2.txt"), "content2").unwrap();

    let tree = TreeBuilder::new(root).build().unwrap();

    let stats = tree.stats();
    assert_eq!(stats.files, 2);
    assert_eq!(stats.directories, 1);
    assert_eq!(stats.total_size, 16);
}

/// Test that entries are sorted by name at every level
#[test]
fn test_entries_sorted_at_every_level() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    for name in ["zeta", "Alpha", "mid", "_under", "10", "9"] {
        fs::write(root.join(name), name).unwrap();
    }
    fs::create_dir(root.join("dir")).unwrap();
    for name in ["b", "a", "c"] {
        fs::write(root.join("dir").join(name), name).unwrap();
    }

    let tree = TreeBuilder::new(root).build().unwrap();

    assert_eq!(
        names(&tree),
        vec!["10", "9", "Alpha", "_under", "dir", "mid", "zeta"]
    );
    assert_eq!(names(tree.search("dir").unwrap()), vec!["a", "b", "c"]);
}

/// Test that lookup finds every built entry
#[test]
fn test_search_finds_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    for i in 0..50 {
        fs::write(root.join(format!("file_{:02}.txt", i)), format!("{}", i)).unwrap();
    }

    let tree = TreeBuilder::new(root).build().unwrap();

    for i in 0..50 {
        let name = format!("file_{:02}.txt", i);
        let node = tree.search(&name).unwrap();
        assert_eq!(node.name(), name);
        assert!(node.is_file());
    }
    assert!(tree.search("file_50.txt").is_none());
    assert!(tree.search("").is_none());
}

/// Test that root node is a directory named "."
#[test]
fn test_root_is_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("named_root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("file.txt"), "content").unwrap();

    let tree = TreeBuilder::new(root).build().unwrap();

    assert!(tree.is_dir());
    assert_eq!(tree.name(), ".");
}

/// Test that nested paths resolve through locate
#[test]
fn test_locate_deep_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    let deep = root.join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.txt"), "leaf").unwrap();

    let tree = TreeBuilder::new(root).build().unwrap();

    let leaf = tree.locate("a/b/c/leaf.txt").unwrap();
    assert_eq!(leaf.size(), Some(4));
    assert!(tree.locate("a/b/c").unwrap().is_dir());
    assert!(tree.locate("a/b/x").is_none());
}

/// Test lookup over a small directory and an empty one
#[test]
fn test_search_small_and_empty_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    for name in ["c", "a", "b"] {
        fs::write(root.join(name), name).unwrap();
    }
    fs::create_dir(root.join("empty")).unwrap();

    let tree = TreeBuilder::new(root).build().unwrap();

    for name in ["a", "b", "c"] {
        assert_eq!(tree.search(name).unwrap().name(), name);
    }
    assert!(tree.search("d").is_none());

    let empty = tree.search("empty").unwrap();
    assert!(empty.entries().is_empty());
    assert!(empty.hash().is_zero());
    assert!(empty.search("a").is_none());
}
