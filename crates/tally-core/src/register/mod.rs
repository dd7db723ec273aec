//! Register module: Producing a registry file next to a directory
//!
//! Registering `path/to/data` hashes every file beneath it and writes the
//! result to `path/to/data-registry.txt`.

mod operation;

pub use operation::{REGISTRY_SUFFIX, RegistrationOutcome, register, registry_path_for};
