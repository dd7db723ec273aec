//! Verifying a directory against a registry

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use super::Registry;
use crate::error::Result;
use crate::hash::{Checksum, compute_file_hash};
use crate::scanner::FileScanner;

/// A file whose current checksum differs from the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub path: String,
    pub expected: Checksum,
    pub actual: Checksum,
}

/// Outcome of comparing a directory with its registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub matched: Vec<String>,
    pub mismatched: Vec<Mismatch>,
    /// Listed in the registry but absent on disk
    pub missing: Vec<String>,
    /// Present on disk but not listed
    pub unlisted: Vec<String>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatched.is_empty() && self.missing.is_empty() && self.unlisted.is_empty()
    }
}

/// Re-hash `directory` and compare it with `registry`
///
/// Each listed file is hashed with the algorithm recorded in its entry.
///
/// # Errors
/// Returns any walk or I/O error encountered while hashing.
pub fn verify(directory: &Path, registry: &Registry, recursive: bool) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    let mut seen = BTreeSet::new();

    for file in FileScanner::new(directory).with_recursive(recursive).scan() {
        let file = file?;
        match registry.get(&file.relative) {
            Some(expected) => {
                let actual = compute_file_hash(&file.path, expected.algorithm())?;
                if &actual == expected {
                    report.matched.push(file.relative.clone());
                } else {
                    report.mismatched.push(Mismatch {
                        path: file.relative.clone(),
                        expected: expected.clone(),
                        actual,
                    });
                }
                seen.insert(file.relative);
            }
            None => report.unlisted.push(file.relative),
        }
    }

    report.missing = registry
        .iter()
        .filter(|entry| !seen.contains(entry.path))
        .map(|entry| entry.path.to_string())
        .collect();

    report.matched.sort();
    report.mismatched.sort_by(|a, b| a.path.cmp(&b.path));
    report.unlisted.sort();

    Ok(report)
}
