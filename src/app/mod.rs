//! Main application modules.
//!
//! This module provides the URL normalization and the interactive prompt used
//! by the driver.

pub mod prompt;
pub mod url;

// Re-export public API
pub use prompt::prompt_url;
pub use url::normalize_url;
