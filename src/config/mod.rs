//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, thresholds, endpoint paths)
//! - The library `Config` and the CLI option types that build it

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, Config, GlobalArgs, LogFormat, LogLevel};
