//! Checksum values and file hashing

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use super::HashAlgorithm;
use crate::error::{RegistryError, Result};

/// A digest together with the algorithm that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum {
    algorithm: HashAlgorithm,
    hex: String,
}

impl Checksum {
    /// Build a checksum from a hex digest, validating its length and alphabet
    ///
    /// # Errors
    /// Returns `InvalidChecksum` if the digest is not lowercase-able hex of
    /// the length the algorithm produces.
    pub fn new(algorithm: HashAlgorithm, hex: impl Into<String>) -> Result<Self> {
        let hex = hex.into().to_ascii_lowercase();
        if hex.len() != algorithm.hex_len() {
            return Err(RegistryError::InvalidChecksum {
                reason: format!(
                    "expected {} hex digits for {algorithm}, got {}",
                    algorithm.hex_len(),
                    hex.len()
                ),
                value: hex,
            });
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RegistryError::InvalidChecksum {
                value: hex,
                reason: "digest is not hexadecimal".to_string(),
            });
        }
        Ok(Self { algorithm, hex })
    }

    /// Algorithm that produced the digest
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Lowercase hex digest without any algorithm prefix
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

/// SHA-256 is written bare; everything else carries an `alg:` prefix
impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.algorithm {
            HashAlgorithm::Sha256 => f.write_str(&self.hex),
            other => write!(f, "{other}:{}", self.hex),
        }
    }
}

impl Checksum {
    /// Parse `alg:hex`, or a bare digest attributed to `bare`
    ///
    /// # Errors
    /// Returns `UnknownAlgorithm` for an unrecognized prefix, or
    /// `InvalidChecksum` if the digest does not fit the algorithm.
    pub fn parse_with(s: &str, bare: HashAlgorithm) -> Result<Self> {
        match s.split_once(':') {
            Some((alg, hex)) => Self::new(alg.parse()?, hex),
            None => Self::new(bare, s),
        }
    }
}

/// Bare digests parse as SHA-256
impl FromStr for Checksum {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, HashAlgorithm::Sha256)
    }
}

impl Serialize for Checksum {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute the checksum of a file's contents
///
/// The file is streamed through the digest rather than read into memory.
///
/// # Errors
/// Returns an `Io` error if the file cannot be opened or read.
pub fn compute_file_hash(path: &Path, algorithm: HashAlgorithm) -> Result<Checksum> {
    let file = File::open(path).map_err(|e| RegistryError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let hex = match algorithm {
        HashAlgorithm::Sha224 => digest_reader::<Sha224>(&mut reader),
        HashAlgorithm::Sha256 => digest_reader::<Sha256>(&mut reader),
        HashAlgorithm::Sha384 => digest_reader::<Sha384>(&mut reader),
        HashAlgorithm::Sha512 => digest_reader::<Sha512>(&mut reader),
    }
    .map_err(|e| RegistryError::io(path, e))?;

    Ok(Checksum { algorithm, hex })
}

/// Compute the checksum of an in-memory buffer
#[must_use]
pub fn compute_bytes_hash(bytes: &[u8], algorithm: HashAlgorithm) -> Checksum {
    let hex = match algorithm {
        HashAlgorithm::Sha224 => to_hex(&Sha224::digest(bytes)),
        HashAlgorithm::Sha256 => to_hex(&Sha256::digest(bytes)),
        HashAlgorithm::Sha384 => to_hex(&Sha384::digest(bytes)),
        HashAlgorithm::Sha512 => to_hex(&Sha512::digest(bytes)),
    };
    Checksum { algorithm, hex }
}

fn digest_reader<D: Digest + Write>(reader: &mut impl Read) -> std::io::Result<String> {
    let mut hasher = D::new();
    std::io::copy(reader, &mut hasher)?;
    Ok(to_hex(&hasher.finalize()))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
