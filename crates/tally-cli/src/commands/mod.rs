//! CLI commands

pub mod check;
pub mod register;
pub mod types;

pub use types::{CheckArgs, RegisterArgs};
