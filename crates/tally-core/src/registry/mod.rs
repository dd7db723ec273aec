//! Registry module: Checksum manifests
//!
//! A registry maps `/`-separated relative file paths to checksums. It is
//! built by a [`DirectoryHasher`], persisted as one `<path> <checksum>` line
//! per file, and can be read back to verify a directory against it.

mod file;
mod hasher;
mod model;
mod verify;

pub use file::{load_registry, load_registry_with, write_registry};
pub use hasher::{DirectoryHasher, Sha2Hasher};
pub use model::{Registry, RegistryEntry};
pub use verify::{Mismatch, VerifyReport, verify};

#[cfg(test)]
mod tests;
