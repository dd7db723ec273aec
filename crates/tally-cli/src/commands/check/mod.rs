//! Check command: Verify a directory against its registry file

use anyhow::{Context, Result, bail};
use tally_core::{RegistryError, VerifyReport, load_registry_with, registry_path_for, verify};
use tracing::{debug, info, warn};

use super::types::CheckArgs;
use crate::output::print_json;

/// Run the check command
///
/// # Errors
/// Returns an error if the directory or registry cannot be read, or if the
/// directory no longer matches the registry.
pub fn run(args: &CheckArgs, json: bool) -> Result<()> {
    let directory = args.directory.as_path();
    if !directory.is_dir() {
        return Err(RegistryError::NotADirectory {
            path: directory.to_path_buf(),
        }
        .into());
    }

    let registry_path = match &args.registry {
        Some(path) => path.clone(),
        None => registry_path_for(directory)?,
    };
    info!(
        "Checking {} against {}",
        directory.display(),
        registry_path.display()
    );

    let registry = load_registry_with(&registry_path, args.algorithm)
        .with_context(|| format!("Failed to load registry {}", registry_path.display()))?;
    let report = verify(directory, &registry, !args.no_recursive)?;

    if json {
        print_json(&report)?;
    }
    log_report(&report);

    if !report.is_clean() {
        bail!(
            "{} does not match {}: {} mismatched, {} missing, {} unlisted",
            directory.display(),
            registry_path.display(),
            report.mismatched.len(),
            report.missing.len(),
            report.unlisted.len()
        );
    }
    Ok(())
}

fn log_report(report: &VerifyReport) {
    for path in &report.matched {
        debug!("  ok {}", path);
    }
    for mismatch in &report.mismatched {
        warn!(
            "  changed {} (expected {}, found {})",
            mismatch.path, mismatch.expected, mismatch.actual
        );
    }
    for path in &report.missing {
        warn!("  missing {}", path);
    }
    for path in &report.unlisted {
        warn!("  unlisted {}", path);
    }
    info!(
        "{} files match, {} changed, {} missing, {} unlisted",
        report.matched.len(),
        report.mismatched.len(),
        report.missing.len(),
        report.unlisted.len()
    );
}
