//! Scanner module: File discovery
//!
//! Walks a directory tree and yields every file beneath it together with
//! its `/`-separated path relative to the scan root.

mod walker;

pub use walker::{DiscoveredFile, FileScanner};
pub(crate) use walker::check_listable;
