//! Directory hashing

use std::path::Path;

use tracing::debug;

use super::Registry;
use crate::error::Result;
use crate::hash::{HashAlgorithm, compute_file_hash};
use crate::scanner::FileScanner;

/// Produces a registry for a directory: every file beneath it mapped to
/// its checksum
pub trait DirectoryHasher {
    /// Hash every file under `directory`
    ///
    /// # Errors
    /// Returns any walk or I/O error encountered while hashing.
    fn hash_directory(&self, directory: &Path) -> Result<Registry>;

    /// Algorithm used for the checksums this hasher produces
    fn algorithm(&self) -> HashAlgorithm;
}

/// Default hasher built on the SHA-2 family
#[derive(Debug, Clone, Copy)]
pub struct Sha2Hasher {
    algorithm: HashAlgorithm,
    recursive: bool,
}

impl Default for Sha2Hasher {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            recursive: true,
        }
    }
}

impl Sha2Hasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn recursive(&self) -> bool {
        self.recursive
    }
}

impl DirectoryHasher for Sha2Hasher {
    fn hash_directory(&self, directory: &Path) -> Result<Registry> {
        let mut registry = Registry::new();
        let scanner = FileScanner::new(directory).with_recursive(self.recursive);

        for file in scanner.scan() {
            let file = file?;
            let checksum = compute_file_hash(&file.path, self.algorithm)?;
            debug!("  {} → {}", file.relative, checksum);
            registry.insert(file.relative, checksum);
        }

        Ok(registry)
    }

    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}
