//! Tests for verifying a directory against its registry

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use crate::hash::{HashAlgorithm, compute_bytes_hash};
use crate::registry::{DirectoryHasher, Sha2Hasher, verify};

fn populated() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.txt"), "hi").expect("Failed to write file");
    fs::write(temp_dir.path().join("b.txt"), "bye").expect("Failed to write file");
    temp_dir
}

#[test]
fn test_verify_unchanged_directory_is_clean() {
    let dir = populated();
    let registry = Sha2Hasher::new().hash_directory(dir.path()).unwrap();

    let report = verify(dir.path(), &registry, true).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.matched, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_verify_detects_modified_file() {
    let dir = populated();
    let registry = Sha2Hasher::new().hash_directory(dir.path()).unwrap();
    fs::write(dir.path().join("a.txt"), "changed").expect("Failed to write file");

    let report = verify(dir.path(), &registry, true).unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.mismatched.len(), 1);
    let mismatch = &report.mismatched[0];
    assert_eq!(mismatch.path, "a.txt");
    assert_eq!(mismatch.expected, compute_bytes_hash(b"hi", HashAlgorithm::Sha256));
    assert_eq!(mismatch.actual, compute_bytes_hash(b"changed", HashAlgorithm::Sha256));
}

#[test]
fn test_verify_detects_missing_and_unlisted() {
    let dir = populated();
    let registry = Sha2Hasher::new().hash_directory(dir.path()).unwrap();
    fs::remove_file(dir.path().join("b.txt")).expect("Failed to remove file");
    fs::write(dir.path().join("c.txt"), "new").expect("Failed to write file");

    let report = verify(dir.path(), &registry, true).unwrap();

    assert_eq!(report.matched, vec!["a.txt"]);
    assert_eq!(report.missing, vec!["b.txt"]);
    assert_eq!(report.unlisted, vec!["c.txt"]);
    assert!(!report.is_clean());
}

#[test]
fn test_verify_uses_algorithm_recorded_in_entry() {
    let dir = populated();
    let registry = Sha2Hasher::new()
        .with_algorithm(HashAlgorithm::Sha512)
        .hash_directory(dir.path())
        .unwrap();

    let report = verify(dir.path(), &registry, true).unwrap();
    assert!(report.is_clean());
}

#[test]
fn test_verify_whitespace_names_after_reload() {
    let dir = populated();
    fs::write(dir.path().join(" lead.txt"), "l").expect("Failed to write file");
    fs::write(dir.path().join("trail.txt "), "t").expect("Failed to write file");

    let registry = Sha2Hasher::new().hash_directory(dir.path()).unwrap();
    let reloaded = crate::registry::Registry::parse(&registry.render()).unwrap();
    let report = verify(dir.path(), &reloaded, true).unwrap();

    assert!(report.is_clean(), "{report:?}");
    assert_eq!(report.matched.len(), 4);
}
