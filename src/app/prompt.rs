//! Interactive URL prompt.

use std::io::{self, BufRead, Write};

use colored::*;

/// Asks for a URL and returns the answer, or `default` for an empty line.
///
/// The prompt shows the default in parentheses. End of input is treated like
/// an empty line so that piping nothing into the tool still runs one lookup.
pub fn prompt_url<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> io::Result<String> {
    write!(
        output,
        "{} {}: ",
        question.bold(),
        format!("({default})").cyan().bold()
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}
