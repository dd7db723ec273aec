//! Command types shared between main and library

use std::path::PathBuf;

use clap::Args;
use tally_core::HashAlgorithm;

#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Directories to register [default: mcstas mcxtrace runtime/libc]
    pub directories: Vec<PathBuf>,

    /// Digest algorithm (sha224, sha256, sha384, sha512)
    #[arg(long, default_value_t = HashAlgorithm::Sha256)]
    pub algorithm: HashAlgorithm,

    /// Only register files directly inside each directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Keep registering the remaining directories after a failure
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Directory to verify
    pub directory: PathBuf,

    /// Registry file to verify against [default: <parent>/<name>-registry.txt]
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Algorithm of digests written without an `alg:` prefix
    #[arg(long, default_value_t = HashAlgorithm::Sha256)]
    pub algorithm: HashAlgorithm,

    /// Only check files directly inside the directory
    #[arg(long)]
    pub no_recursive: bool,
}
