//! Tests for checksum values and file hashing

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use crate::error::RegistryError;
use crate::hash::{Checksum, HashAlgorithm, compute_bytes_hash, compute_file_hash};

const SHA256_HI: &str = "8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4";
const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_compute_file_hash_known_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("a.txt");
    fs::write(&path, "hi").expect("Failed to write file");

    let checksum = compute_file_hash(&path, HashAlgorithm::Sha256).expect("Failed to hash");

    assert_eq!(checksum.hex(), SHA256_HI);
    assert_eq!(checksum.algorithm(), HashAlgorithm::Sha256);
}

#[test]
fn test_compute_file_hash_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty");
    fs::write(&path, "").expect("Failed to write file");

    let checksum = compute_file_hash(&path, HashAlgorithm::Sha256).expect("Failed to hash");
    assert_eq!(checksum.hex(), SHA256_EMPTY);
}

#[test]
fn test_compute_file_hash_matches_bytes_hash_for_large_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("big.bin");
    // Larger than the BufReader buffer so the digest sees several chunks
    let content: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).expect("Failed to write file");

    for alg in HashAlgorithm::ALL {
        let from_file = compute_file_hash(&path, alg).expect("Failed to hash");
        assert_eq!(from_file, compute_bytes_hash(&content, alg));
        assert_eq!(from_file.hex().len(), alg.hex_len());
    }
}

#[test]
fn test_compute_file_hash_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nope");

    let err = compute_file_hash(&path, HashAlgorithm::Sha256).unwrap_err();
    assert!(matches!(err, RegistryError::Io { path: ref p, .. } if *p == path));
}

#[test]
fn test_different_content_different_hash() {
    let a = compute_bytes_hash(b"content A", HashAlgorithm::Sha256);
    let b = compute_bytes_hash(b"content B", HashAlgorithm::Sha256);
    assert_ne!(a, b);
}

#[test]
fn test_sha256_displays_bare() {
    let checksum = compute_bytes_hash(b"hi", HashAlgorithm::Sha256);
    assert_eq!(checksum.to_string(), SHA256_HI);
}

#[test]
fn test_other_algorithms_display_with_prefix() {
    let checksum = compute_bytes_hash(b"hi", HashAlgorithm::Sha224);
    assert_eq!(
        checksum.to_string(),
        "sha224:1a15bca3e4ed3ab82367c6c434f86c41040bdac577fa1c2de62c3be0"
    );
}

#[rstest]
#[case(SHA256_HI, HashAlgorithm::Sha256)]
#[case("sha256:8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4", HashAlgorithm::Sha256)]
#[case("SHA224:1A15BCA3E4ED3AB82367C6C434F86C41040BDAC577FA1C2DE62C3BE0", HashAlgorithm::Sha224)]
fn test_parse_checksum(#[case] input: &str, #[case] alg: HashAlgorithm) {
    let checksum: Checksum = input.parse().unwrap();
    assert_eq!(checksum.algorithm(), alg);
    assert_eq!(checksum.hex(), checksum.hex().to_ascii_lowercase());
}

#[rstest]
#[case("abc")]
#[case("zz434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4")]
#[case("sha512:8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4")]
fn test_parse_invalid_checksum(#[case] input: &str) {
    let err = input.parse::<Checksum>().unwrap_err();
    assert!(matches!(err, RegistryError::InvalidChecksum { .. }));
}

#[test]
fn test_parse_checksum_unknown_prefix() {
    let err = "md5:d41d8cd98f00b204e9800998ecf8427e"
        .parse::<Checksum>()
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownAlgorithm(_)));
}
