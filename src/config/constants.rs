//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the fetch timeout, prompt defaults, and rendering limits.

/// HTTP request timeout in seconds.
///
/// Covers the whole request (DNS, connect, TLS, body). A request that does not
/// complete in this window is reported as a fetch error.
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// URL offered by the prompt when the user just presses enter.
pub const DEFAULT_URL: &str = "https://example.com";

/// Scheme prepended to URLs typed without one.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Placeholder shown for a tag that is not present in the document.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("social_tags/", env!("CARGO_PKG_VERSION"));

/// Prefix of the message carried by the error-shaped report.
pub const FETCH_ERROR_PREFIX: &str = "Failed to fetch data";

// Rendering
/// Maximum width of the value column in characters; longer values fold onto
/// continuation lines.
pub const MAX_VALUE_COLUMN_WIDTH: usize = 72;

// Exit codes
/// Exit code when `--fail-on fetch-error` is set and the fetch failed.
pub const EXIT_CODE_FETCH_FAILED: i32 = 2;
