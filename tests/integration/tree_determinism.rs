//! Integration tests for tree building determinism

use dirtree::tree::builder::TreeBuilder;
use std::fs;
use tempfile::TempDir;

/// Test that the same filesystem produces the same root hash
#[test]
fn test_same_filesystem_same_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("file1.txt"), "content1").unwrap();
    fs::write(root.join("file2.txt"), "content2").unwrap();
    fs::create_dir(root.join("dir1")).unwrap();
    fs::write(root.join("dir1").join("file3.txt"), "content3").unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();
    let root2 = builder.compute_root().unwrap();

    assert_eq!(root1, root2);
}

/// Test that identical trees in different locations produce the same root
#[test]
fn test_identical_trees_different_locations() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    // Created in opposite orders so directory listing order differs
    for root in [first.path(), second.path()] {
        fs::create_dir(root.join("nested")).unwrap();
    }
    for name in ["a.txt", "b.txt", "c.txt"] {
        fs::write(first.path().join(name), name).unwrap();
    }
    for name in ["c.txt", "b.txt", "a.txt"] {
        fs::write(second.path().join(name), name).unwrap();
    }
    fs::write(first.path().join("nested").join("x"), "x").unwrap();
    fs::write(second.path().join("nested").join("x"), "x").unwrap();

    let root1 = TreeBuilder::new(first.path()).compute_root().unwrap();
    let root2 = TreeBuilder::new(second.path()).compute_root().unwrap();

    assert_eq!(root1, root2);
}

/// Test that the root directory's own name does not affect the root hash
#[test]
fn test_root_name_does_not_matter() {
    let temp_dir = TempDir::new().unwrap();
    let alpha = temp_dir.path().join("alpha");
    let beta = temp_dir.path().join("beta");
    for dir in [&alpha, &beta] {
        fs::create_dir(dir).unwrap();
        fs::write(dir.join("same.txt"), "same").unwrap();
    }

    let tree_a = TreeBuilder::new(&alpha).build().unwrap();
    let tree_b = TreeBuilder::new(&beta).build().unwrap();

    assert_eq!(tree_a, tree_b);
}

/// Test that file content changes produce different root hashes
#[test]
fn test_file_content_change_different_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("test.txt"), "content1").unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();

    fs::write(root.join("test.txt"), "content2").unwrap();

    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Test that renaming an entry so that the order changes produces a different root
#[test]
fn test_rename_reordering_different_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("a.txt"), "first").unwrap();
    fs::write(root.join("b.txt"), "second").unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();

    fs::rename(root.join("a.txt"), root.join("c.txt")).unwrap();

    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Test that file addition produces different root hash
#[test]
fn test_file_addition_different_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("file1.txt"), "content").unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();

    fs::write(root.join("file2.txt"), "content").unwrap();

    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Test that an added empty directory changes the root hash
#[test]
fn test_empty_directory_addition_different_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("file1.txt"), "content").unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();

    fs::create_dir(root.join("empty_dir")).unwrap();

    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Test that file deletion produces different root hash
#[test]
fn test_file_deletion_different_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("file1.txt"), "content1").unwrap();
    fs::write(root.join("file2.txt"), "content2").unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();

    fs::remove_file(root.join("file2.txt")).unwrap();

    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Test that retargeting a symbolic link changes the root hash
#[cfg(unix)]
#[test]
fn test_link_target_change_different_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    std::os::unix::fs::symlink("one", root.join("link")).unwrap();

    let builder = TreeBuilder::new(root.clone());
    let root1 = builder.compute_root().unwrap();

    fs::remove_file(root.join("link")).unwrap();
    std::os::unix::fs::symlink("two", root.join("link")).unwrap();

    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}
