//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy.
///
/// The report is always printed; this only decides whether a failed fetch is
/// also visible in the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit with 0 (default)
    Never,
    /// Exit with a non-zero code when the page could not be fetched
    FetchError,
}

/// Tool configuration.
///
/// Parsed from the command line by the binary, or built with
/// `Config::default()` when the library is used directly.
///
/// # Examples
///
/// ```no_run
/// use social_tags::Config;
///
/// let config = Config {
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "social_tags",
    version,
    about = "Fetch a web page and report its social and SEO metadata tags"
)]
pub struct Config {
    /// Log level; when omitted, `RUST_LOG` decides (default: warn)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// When to exit with a non-zero status
    #[arg(long, value_enum, default_value = "never")]
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            log_format: LogFormat::Plain,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fail_on: FailOn::Never,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Checks values clap cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
