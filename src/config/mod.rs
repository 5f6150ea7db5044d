//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, defaults, rendering limits)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigError, FailOn, LogFormat, LogLevel};
