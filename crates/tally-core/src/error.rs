//! Error types shared by the registry modules

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, reading, or verifying a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{} can not be registered because it does not exist as a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} has no directory name to derive a registry file from", .path.display())]
    NoDirectoryName { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Path contains a line break and can not be listed in a registry: {path:?}")]
    LineBreakInPath { path: String },

    #[error("Invalid checksum '{value}': {reason}")]
    InvalidChecksum { value: String, reason: String },

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl RegistryError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
