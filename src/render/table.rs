//! Two-column box table.
//!
//! Cells are padded on plain text and colored afterwards, so ANSI escapes
//! never count towards column widths. Widths are terminal columns as given by
//! `unicode-width`: CJK and most emoji take two, combining marks none. Tabs
//! are expanded and other control characters dropped before measuring.

use std::io::{self, Write};

use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tab stop used when expanding tabs in cell text.
const TAB_WIDTH: usize = 4;

/// Visual style of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Header and key column (bold yellow)
    Key,
    /// Neutral value (bold white)
    Plain,
    /// A value that was found (green)
    Success,
    /// A missing value or an error (red)
    Failure,
}

impl CellStyle {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            CellStyle::Key => text.yellow().bold(),
            CellStyle::Plain => text.white().bold(),
            CellStyle::Success => text.green(),
            CellStyle::Failure => text.red(),
        }
    }
}

/// One row: a key cell and a value cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub value: String,
    pub value_style: CellStyle,
}

/// A titled table with a header row and rounded borders.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    headers: (String, String),
    rows: Vec<Row>,
    caption: Option<String>,
    max_value_width: usize,
}

impl Table {
    pub fn new(
        title: impl Into<String>,
        key_header: impl Into<String>,
        value_header: impl Into<String>,
        max_value_width: usize,
    ) -> Self {
        Self {
            title: title.into(),
            headers: (key_header.into(), value_header.into()),
            rows: Vec::new(),
            caption: None,
            // A double-width character must fit on a line of its own
            max_value_width: max_value_width.max(2),
        }
    }

    pub fn add_row(&mut self, key: impl Into<String>, value: impl Into<String>, style: CellStyle) {
        self.rows.push(Row {
            key: key.into(),
            value: value.into(),
            value_style: style,
        });
    }

    /// Sets a dim line printed under the table.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = Some(caption.into());
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn key_width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| width(&row.key))
            .chain(std::iter::once(width(&self.headers.0)))
            .max()
            .unwrap_or(0)
    }

    fn value_width(&self) -> usize {
        let widest = self
            .rows
            .iter()
            .map(|row| {
                expand_tabs(&row.value)
                    .split('\n')
                    .map(width)
                    .max()
                    .unwrap_or(0)
            })
            .chain(std::iter::once(width(&self.headers.1)))
            .max()
            .unwrap_or(0);
        widest.min(self.max_value_width)
    }

    /// Writes the table.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let key_width = self.key_width();
        let value_width = self.value_width();
        // "│ " + key + " │ " + value + " │"
        let inner_width = key_width + value_width + 5;

        let title_width = width(&self.title);
        let left_pad = (inner_width + 2).saturating_sub(title_width) / 2;
        writeln!(
            out,
            "{}{}",
            " ".repeat(left_pad),
            self.title.as_str().cyan().bold().italic()
        )?;

        let border = |left: &str, mid: &str, right: &str| {
            format!(
                "{}{}{}{}{}",
                left,
                "─".repeat(key_width + 2),
                mid,
                "─".repeat(value_width + 2),
                right
            )
        };

        writeln!(out, "{}", border("╭", "┬", "╮").cyan().bold())?;
        self.write_line(
            out,
            &self.headers.0,
            CellStyle::Key,
            &self.headers.1,
            CellStyle::Plain,
            key_width,
            value_width,
        )?;
        writeln!(out, "{}", border("├", "┼", "┤").cyan().bold())?;

        for row in &self.rows {
            let folded = fold(&row.value, value_width);
            for (i, chunk) in folded.iter().enumerate() {
                let key = if i == 0 { row.key.as_str() } else { "" };
                self.write_line(
                    out,
                    key,
                    CellStyle::Key,
                    chunk,
                    row.value_style,
                    key_width,
                    value_width,
                )?;
            }
        }

        writeln!(out, "{}", border("╰", "┴", "╯").cyan().bold())?;

        if let Some(caption) = &self.caption {
            let pad = (inner_width + 2).saturating_sub(width(caption)) / 2;
            writeln!(out, "{}{}", " ".repeat(pad), caption.as_str().dimmed())?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn write_line<W: Write>(
        &self,
        out: &mut W,
        key: &str,
        key_style: CellStyle,
        value: &str,
        value_style: CellStyle,
        key_width: usize,
        value_width: usize,
    ) -> io::Result<()> {
        let bar = "│".cyan().bold();
        writeln!(
            out,
            "{bar} {} {bar} {} {bar}",
            key_style.paint(&pad(key, key_width)),
            value_style.paint(&pad(value, value_width)),
        )
    }
}

/// Display width of `text` in terminal columns.
fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn pad(text: &str, target: usize) -> String {
    format!("{text}{}", " ".repeat(target.saturating_sub(width(text))))
}

/// Replaces tabs with spaces up to the next tab stop and drops control
/// characters other than newline.
pub fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\n' => {
                expanded.push('\n');
                column = 0;
            }
            '\t' => {
                let spaces = TAB_WIDTH - column % TAB_WIDTH;
                expanded.push_str(&" ".repeat(spaces));
                column += spaces;
            }
            c if c.is_control() => {}
            c => {
                expanded.push(c);
                column += c.width().unwrap_or(0);
            }
        }
    }
    expanded
}

/// Wraps `text` into lines of at most `max` columns.
///
/// Breaks at spaces where possible; words wider than `max` (typically URLs or
/// CJK runs, which have no spaces) are split between characters. Embedded
/// newlines start a new line. Always returns at least one line.
pub fn fold(text: &str, max: usize) -> Vec<String> {
    let max = max.max(2);
    let text = expand_tabs(text);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in source_line.split(' ') {
            let word_width = width(word);
            let needed = if current_width == 0 {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= max {
                if current_width > 0 {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
            }

            let mut chunk = String::new();
            let mut chunk_width = 0;
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if chunk_width + ch_width > max && !chunk.is_empty() {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(ch);
                chunk_width += ch_width;
            }
            current = chunk;
            current_width = chunk_width;
        }

        lines.push(current);
    }

    lines
}
