//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - The logger (plain or JSON, to stderr)
//! - The HTTP client (timeout and User-Agent)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::{filter_directives, init_logger_with};
