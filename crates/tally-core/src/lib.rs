//! tally-core: Core library for checksum registries
//!
//! Scans directory trees, hashes every file with a SHA-2 digest, and writes
//! a plain-text registry next to each directory:
//!
//! ```text
//! a.txt 8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4
//! sub/b.txt b49f425a7e1f9cff3856329ada223f2f9d368f15a00cf48df16ca95986137fe8
//! ```
//!
//! Registries can be loaded back and used to verify a directory.

pub mod error;
pub mod hash;
pub mod register;
pub mod registry;
pub mod scanner;

// Re-export commonly used types
pub use error::{RegistryError, Result};
pub use hash::{Checksum, HashAlgorithm, compute_file_hash};
pub use register::{RegistrationOutcome, register, registry_path_for};
pub use registry::{
    DirectoryHasher, Registry, Sha2Hasher, VerifyReport, load_registry, load_registry_with,
    verify,
};
pub use scanner::{DiscoveredFile, FileScanner};
