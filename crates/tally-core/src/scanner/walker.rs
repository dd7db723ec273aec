//! File walker: Discovers files in a directory tree

use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{RegistryError, Result};

/// A file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    /// Path relative to the scan root, always `/`-separated
    pub relative: String,
}

/// Scanner for discovering files in a directory
#[derive(Debug)]
pub struct FileScanner {
    root: PathBuf,
    recursive: bool,
}

impl FileScanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
        }
    }

    /// Only list files directly inside the root when `recursive` is false
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Scan the directory and yield discovered files
    ///
    /// Symlinks are included when they resolve to a regular file. Symlinked
    /// directories are not descended.
    pub fn scan(&self) -> impl Iterator<Item = Result<DiscoveredFile>> + '_ {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if is_file(&entry) => Some(self.discovered(&entry)),
                Ok(_) => None,
                Err(e) => Some(Err(RegistryError::from(e))),
            })
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn discovered(&self, entry: &DirEntry) -> Result<DiscoveredFile> {
        let path = entry.path();
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        Ok(DiscoveredFile {
            relative: to_slash_path(relative)?,
            path: path.to_path_buf(),
        })
    }
}

fn is_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_file() || (ft.is_symlink() && entry.path().is_file())
}

/// Join the normal components of `path` with `/`
///
/// # Errors
/// Returns `NonUtf8Path` if any component is not valid UTF-8, or
/// `LineBreakInPath` if one contains `\n` or `\r`.
pub(crate) fn to_slash_path(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| RegistryError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;
            parts.push(part);
        }
    }
    let joined = parts.join("/");
    check_listable(&joined)?;
    Ok(joined)
}

/// A registry line can hold any path without a line break
///
/// # Errors
/// Returns `LineBreakInPath` if `path` contains `\n` or `\r`.
pub(crate) fn check_listable(path: &str) -> Result<()> {
    if path.contains(&['\n', '\r'][..]) {
        return Err(RegistryError::LineBreakInPath {
            path: path.to_string(),
        });
    }
    Ok(())
}
