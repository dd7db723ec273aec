//! Reading and writing registry files

use std::fs;
use std::path::Path;

use tracing::debug;

use super::Registry;
use crate::error::{RegistryError, Result};
use crate::hash::HashAlgorithm;
use crate::scanner::check_listable;

/// Write a registry to `output`, replacing any existing file
///
/// # Errors
/// Returns `LineBreakInPath` if an entry's path would span lines, or an
/// `Io` error if the file cannot be written. Nothing is written on error.
pub fn write_registry(registry: &Registry, output: &Path) -> Result<()> {
    for entry in registry.iter() {
        check_listable(entry.path)?;
    }
    let contents = registry.render();
    fs::write(output, contents).map_err(|e| RegistryError::io(output, e))?;
    debug!("Wrote {} entries to {}", registry.len(), output.display());
    Ok(())
}

/// Load a registry file, reading bare digests as SHA-256
///
/// # Errors
/// Returns an `Io` error if the file cannot be read, or a `Parse` error if
/// its contents are malformed.
pub fn load_registry(path: &Path) -> Result<Registry> {
    load_registry_with(path, HashAlgorithm::Sha256)
}

/// Load a registry file, reading bare digests as `bare`
///
/// # Errors
/// Returns an `Io` error if the file cannot be read, or a `Parse` error if
/// its contents are malformed.
pub fn load_registry_with(path: &Path, bare: HashAlgorithm) -> Result<Registry> {
    let text = fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
    Registry::parse_with(&text, bare)
}
