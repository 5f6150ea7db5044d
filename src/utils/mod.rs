//! Utility functions.
//!
//! This module provides CSS selector parsing helpers for the static selectors
//! used by the extractor.

mod selector;

pub use selector::parse_selector_unsafe;
