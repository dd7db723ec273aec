//! Registration of a single directory

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{RegistryError, Result};
use crate::hash::HashAlgorithm;
use crate::registry::{DirectoryHasher, write_registry};

/// Appended to the directory stem to name its registry file
pub const REGISTRY_SUFFIX: &str = "-registry.txt";

/// What a successful registration produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub directory: PathBuf,
    pub registry_path: PathBuf,
    pub file_count: usize,
    pub algorithm: HashAlgorithm,
}

/// Path of the registry file for `directory`: `<parent>/<stem>-registry.txt`
///
/// A path with no final name component (`.` or `..`) is canonicalized
/// first so the registry lands next to the directory it names.
///
/// # Errors
/// Returns an `Io` error if such a path cannot be canonicalized, or
/// `NoDirectoryName` if it still has no name (the filesystem root).
pub fn registry_path_for(directory: &Path) -> Result<PathBuf> {
    let named = if directory.file_name().is_some() {
        directory.to_path_buf()
    } else {
        directory
            .canonicalize()
            .map_err(|e| RegistryError::io(directory, e))?
    };

    let stem = named
        .file_stem()
        .ok_or_else(|| RegistryError::NoDirectoryName {
            path: directory.to_path_buf(),
        })?;
    let parent = named.parent().unwrap_or_else(|| Path::new(""));

    let mut file_name = OsString::from(stem);
    file_name.push(REGISTRY_SUFFIX);
    Ok(parent.join(file_name))
}

/// Register a directory: hash every file in it and write the registry file
///
/// Any existing registry file is overwritten. Nothing is written when the
/// directory is missing or when hashing fails.
///
/// # Errors
/// Returns `NotADirectory` if `directory` does not exist as a directory;
/// errors from the hasher or from writing the file propagate unchanged.
pub fn register<H>(directory: impl AsRef<Path>, hasher: &H) -> Result<RegistrationOutcome>
where
    H: DirectoryHasher + ?Sized,
{
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(RegistryError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let registry_path = registry_path_for(directory)?;
    info!(
        "Registering {} → {}",
        directory.display(),
        registry_path.display()
    );

    let registry = hasher.hash_directory(directory)?;
    write_registry(&registry, &registry_path)?;

    info!("✓ Registered {} files", registry.len());

    Ok(RegistrationOutcome {
        directory: directory.to_path_buf(),
        registry_path,
        file_count: registry.len(),
        algorithm: hasher.algorithm(),
    })
}
