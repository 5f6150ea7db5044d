//! Error handling.
//!
//! This module provides:
//! - Error type definitions for startup and fetching
//! - Categorization of `reqwest` failures into [`FetchErrorKind`]
//!
//! A missing tag is never an error: the extractor records it as "N/A". The
//! only runtime failure is a [`FetchError`], which the driver turns into the
//! error-shaped report.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FetchError, FetchErrorKind, InitializationError};
