//! social_tags library: fetch a page and report its social and SEO metadata.
//!
//! The lookup is a straight pipeline: normalize the URL, fetch the page once,
//! extract a fixed set of tags (title, description, Open Graph, Twitter Card,
//! favicon, ...) and render them as a table.
//!
//! # Example
//!
//! ```no_run
//! use social_tags::{initialization::init_client, lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(&Config::default())?;
//! let report = lookup(&client, "example.com").await;
//! println!("{:?}", report.get("OG Title"));
//! # Ok(())
//! # }
//! ```

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
pub mod render;
mod utils;

// Re-export public API
pub use app::{normalize_url, prompt_url};
pub use config::{Config, ConfigError, FailOn, LogFormat, LogLevel};
pub use error_handling::{FetchError, FetchErrorKind, InitializationError};
pub use fetch::fetch_html;
pub use parse::{
    extract_from_document, extract_metadata, find_first, FieldStatus, FilterAttr, Lookup,
    MetadataField, MetadataReport, MetadataRule, TagName, METADATA_RULES,
};
pub use run::{exit_code, lookup, run, PROMPT_QUESTION};

// Internal run module (contains the driver logic)
mod run {
    use std::io::{BufRead, Write};

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::prompt_url;
    use crate::config::{FailOn, DEFAULT_URL, EXIT_CODE_FETCH_FAILED};
    use crate::fetch::fetch_html;
    use crate::parse::{extract_metadata, MetadataReport};
    use crate::render::{render_report, render_welcome};

    /// Question shown by the interactive prompt.
    pub const PROMPT_QUESTION: &str = "Enter website URL (with or without https://)";

    /// Fetches `raw_url` and extracts its metadata.
    ///
    /// Never fails: a fetch error becomes the error-shaped report and the
    /// extractor is not run.
    pub async fn lookup(client: &reqwest::Client, raw_url: &str) -> MetadataReport {
        match fetch_html(client, raw_url).await {
            Ok(html) => {
                let report = extract_metadata(&html);
                info!(
                    "Extracted {} of {} tags from {}",
                    report.found_count(),
                    report.fields().len(),
                    raw_url
                );
                report
            }
            Err(e) => MetadataReport::from(e),
        }
    }

    /// Runs one interactive cycle: welcome panel, prompt, lookup, report.
    ///
    /// Returns the rendered report so the caller can derive an exit code.
    ///
    /// # Errors
    ///
    /// Only terminal I/O errors (reading the prompt, writing the tables) are
    /// returned; fetch failures are part of the report.
    pub async fn run<R: BufRead, W: Write>(
        client: &reqwest::Client,
        input: &mut R,
        out: &mut W,
    ) -> Result<MetadataReport> {
        render_welcome(out).context("Failed to print welcome panel")?;

        let raw_url = prompt_url(input, out, PROMPT_QUESTION, DEFAULT_URL)
            .context("Failed to read URL from prompt")?;

        let report = lookup(client, &raw_url).await;

        render_report(out, &report).context("Failed to print report")?;
        out.flush().context("Failed to flush output")?;

        Ok(report)
    }

    /// Maps the report to a process exit code under the given policy.
    pub fn exit_code(fail_on: FailOn, report: &MetadataReport) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::FetchError => {
                if report.is_error() {
                    EXIT_CODE_FETCH_FAILED
                } else {
                    0
                }
            }
        }
    }
}
