//! Register command: Write registry files for a list of directories
//!
//! Directories are processed one after another. Under the default
//! [`FailurePolicy::Abort`] the first failure stops the run; with
//! [`FailurePolicy::Continue`] every directory is attempted and the
//! command fails at the end if any of them did.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tally_core::{DirectoryHasher, RegistrationOutcome, Sha2Hasher, register};
use tracing::{info, warn};

use super::types::RegisterArgs;
use crate::output::print_json;

/// Directories registered when none are given
pub const DEFAULT_DIRECTORIES: [&str; 3] = ["mcstas", "mcxtrace", "runtime/libc"];

/// What to do when one directory fails to register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure
    #[default]
    Abort,
    /// Register the remaining directories, then report failure
    Continue,
}

/// Ordered list of directories to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPlan {
    pub directories: Vec<PathBuf>,
    pub failure_policy: FailurePolicy,
}

impl Default for RegistrationPlan {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORIES.iter().map(PathBuf::from).collect())
    }
}

impl RegistrationPlan {
    #[must_use]
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self {
            directories,
            failure_policy: FailurePolicy::Abort,
        }
    }

    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Build a plan from CLI arguments, falling back to the default directories
    #[must_use]
    pub fn from_args(args: &RegisterArgs) -> Self {
        let plan = if args.directories.is_empty() {
            Self::default()
        } else {
            Self::new(args.directories.clone())
        };
        plan.with_failure_policy(if args.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        })
    }
}

/// A directory that failed under [`FailurePolicy::Continue`]
#[derive(Debug, Clone, Serialize)]
pub struct FailedRegistration {
    pub directory: PathBuf,
    pub error: String,
}

/// Results of running a plan
#[derive(Debug, Default, Serialize)]
pub struct PlanReport {
    pub registered: Vec<RegistrationOutcome>,
    pub failed: Vec<FailedRegistration>,
}

/// Run the register command
///
/// # Errors
/// Returns an error if any directory fails to register.
pub fn run(args: &RegisterArgs, json: bool) -> Result<()> {
    let plan = RegistrationPlan::from_args(args);
    let hasher = Sha2Hasher::new()
        .with_algorithm(args.algorithm)
        .with_recursive(!args.no_recursive);

    let report = run_plan(&plan, &hasher)?;

    if json {
        print_json(&report)?;
    }
    log_summary(&report);

    if !report.failed.is_empty() {
        bail!(
            "{} of {} directories failed to register",
            report.failed.len(),
            plan.directories.len()
        );
    }
    Ok(())
}

/// Register every directory in `plan` in order
///
/// # Errors
/// Under [`FailurePolicy::Abort`], returns the first registration error.
/// Under [`FailurePolicy::Continue`], failures are collected in the report.
pub fn run_plan<H>(plan: &RegistrationPlan, hasher: &H) -> Result<PlanReport>
where
    H: DirectoryHasher + ?Sized,
{
    let mut report = PlanReport::default();

    for directory in &plan.directories {
        match register_one(directory, hasher) {
            Ok(outcome) => report.registered.push(outcome),
            Err(e) if plan.failure_policy == FailurePolicy::Continue => {
                warn!("{:#}", e);
                report.failed.push(FailedRegistration {
                    directory: directory.clone(),
                    error: format!("{e:#}"),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn register_one<H>(directory: &Path, hasher: &H) -> Result<RegistrationOutcome>
where
    H: DirectoryHasher + ?Sized,
{
    register(directory, hasher)
        .with_context(|| format!("Failed to register {}", directory.display()))
}

fn log_summary(report: &PlanReport) {
    let files: usize = report.registered.iter().map(|o| o.file_count).sum();
    info!(
        "✓ Registration completed: {} directories, {} files, {} failed",
        report.registered.len(),
        files,
        report.failed.len()
    );
}
