//! tally-cli library
//!
//! This module exposes the internal functionality of tally-cli for testing purposes.

#[doc(hidden)]
pub mod commands;

pub mod logging;
pub mod output;

pub use commands::types::{CheckArgs, RegisterArgs};

#[cfg(test)]
mod tests;
