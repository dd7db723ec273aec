//! Machine-readable output

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
///
/// # Errors
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
