//! HTML metadata extraction.
//!
//! This module extracts the fixed set of social and SEO tags from an HTML
//! document:
//! - Page title
//! - Basic meta tags (description, keywords, canonical URL)
//! - Open Graph tags (`<meta property="og:*">`)
//! - Twitter Card tags (`<meta name="twitter:*">`)
//! - Miscellaneous tags (theme color, viewport, author, favicon)
//!
//! The tags are described declaratively in [`METADATA_RULES`] and applied by a
//! single extraction loop. Parsing is done by the `scraper` crate, which is
//! error-tolerant: malformed markup only yields fewer matches.

mod extract;
mod report;
mod rules;

// Re-export public API
pub use extract::{extract_from_document, extract_metadata, find_first};
pub use report::{FieldStatus, MetadataField, MetadataReport};
pub use rules::{FilterAttr, Lookup, MetadataRule, TagName, METADATA_RULES};
