//! Registry data model and text format

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::hash::{Checksum, HashAlgorithm};

/// Ordered mapping of relative path to checksum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    entries: BTreeMap<String, Checksum>,
}

/// A single registry line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry<'a> {
    pub path: &'a str,
    pub checksum: &'a Checksum,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the checksum it replaced
    pub fn insert(&mut self, path: impl Into<String>, checksum: Checksum) -> Option<Checksum> {
        self.entries.insert(path.into(), checksum)
    }

    /// Checksum recorded for `path`
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Checksum> {
        self.entries.get(path)
    }

    /// Whether `path` is listed
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order
    pub fn iter(&self) -> impl Iterator<Item = RegistryEntry<'_>> {
        self.entries
            .iter()
            .map(|(path, checksum)| RegistryEntry { path, checksum })
    }

    /// Render the registry file contents
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in self.iter() {
            out.push_str(entry.path);
            out.push(' ');
            out.push_str(&entry.checksum.to_string());
            out.push('\n');
        }
        out
    }

    /// Parse registry file contents, reading bare digests as SHA-256
    ///
    /// # Errors
    /// See [`Registry::parse_with`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, HashAlgorithm::Sha256)
    }

    /// Parse registry file contents, reading bare digests as `bare`
    ///
    /// Each line is split at its last space; everything before it is the
    /// path, kept byte for byte. Blank lines are skipped, as are lines
    /// starting with `#` that do not end in a valid checksum.
    ///
    /// # Errors
    /// Returns a `Parse` error with the 1-based line number for a line with
    /// no checksum, an invalid checksum, or a duplicate path.
    pub fn parse_with(text: &str, bare: HashAlgorithm) -> Result<Self> {
        let mut registry = Self::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }

            let (path, checksum) = match parse_line(line, bare) {
                Ok(entry) => entry,
                Err(_) if line.starts_with('#') => continue,
                Err(reason) => {
                    return Err(RegistryError::Parse {
                        line: line_no,
                        reason,
                    });
                }
            };

            if registry.insert(path, checksum).is_some() {
                return Err(RegistryError::Parse {
                    line: line_no,
                    reason: format!("duplicate entry for '{path}'"),
                });
            }
        }

        Ok(registry)
    }
}

fn parse_line(line: &str, bare: HashAlgorithm) -> std::result::Result<(&str, Checksum), String> {
    let (path, checksum) = line
        .rsplit_once(' ')
        .filter(|(p, _)| !p.is_empty())
        .ok_or_else(|| "expected '<path> <checksum>'".to_string())?;
    let checksum = Checksum::parse_with(checksum, bare).map_err(|e| e.to_string())?;
    Ok((path, checksum))
}

impl FromIterator<(String, Checksum)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, Checksum)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
