//! Hash module: Digest algorithms and file checksums

mod algorithm;
mod checksum;

pub use algorithm::HashAlgorithm;
pub use checksum::{Checksum, compute_bytes_hash, compute_file_hash};

#[cfg(test)]
mod tests;
