//! Console rendering of the welcome panel and the metadata report.
//!
//! Rendering is cosmetic only: rows are built from the report as-is, with
//! found values styled green and "N/A" or errors styled red. Colors follow
//! `colored`'s global control, so they disappear when stdout is not a
//! terminal or `NO_COLOR` is set.

mod table;

use std::io::{self, Write};

pub use table::{fold, CellStyle, Row, Table};

use crate::config::MAX_VALUE_COLUMN_WIDTH;
use crate::parse::{FieldStatus, MetadataReport};

pub const REPORT_TITLE: &str = "🔎 Social Tags Information";
pub const WELCOME_TITLE: &str = "🚀 Welcome to the Social Tag Tool 🚀";

/// Builds the results table for `report`.
///
/// The error shape becomes a single red "Error" row; otherwise there is one
/// row per field in rule order.
pub fn report_table(report: &MetadataReport) -> Table {
    let mut table = Table::new(REPORT_TITLE, "Tag", "Value", MAX_VALUE_COLUMN_WIDTH);

    match report {
        MetadataReport::Error(message) => {
            table.add_row("Error", message.as_str(), CellStyle::Failure);
        }
        MetadataReport::Tags(fields) => {
            for field in fields {
                let style = match field.status() {
                    FieldStatus::Found => CellStyle::Success,
                    FieldStatus::Missing => CellStyle::Failure,
                };
                table.add_row(field.label, field.display_value(), style);
            }
            table.set_caption(format!(
                "{} of {} tags found",
                report.found_count(),
                fields.len()
            ));
        }
    }

    table
}

/// Writes the results table for `report`.
pub fn render_report<W: Write>(out: &mut W, report: &MetadataReport) -> io::Result<()> {
    report_table(report).render(out)
}

/// Static welcome panel.
pub fn welcome_table() -> Table {
    let mut table = Table::new(WELCOME_TITLE, "Author", "Details", MAX_VALUE_COLUMN_WIDTH);
    table.add_row("Author", "G16", CellStyle::Plain);
    table.add_row("Tool", "Social Tags Scraper", CellStyle::Plain);
    table
}

/// Writes the welcome panel.
pub fn render_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    welcome_table().render(out)
}
