//! Logger initialization.
//!
//! Log lines go to stderr so they never interleave with the tables on stdout.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

/// Level used when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Upper bounds for chatty dependencies when the level comes from the CLI.
const DEPENDENCY_CAPS: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Builds the `env_logger` filter string.
///
/// An explicit `level` wins over `rust_log`. Without one, a non-empty
/// `rust_log` is used verbatim, so `RUST_LOG=social_tags=debug` works as
/// usual. Otherwise the default level applies.
pub fn filter_directives(level: Option<LevelFilter>, rust_log: Option<&str>) -> String {
    let level = match (level, rust_log.map(str::trim)) {
        (Some(level), _) => level,
        (None, Some(spec)) if !spec.is_empty() => return spec.to_string(),
        (None, _) => DEFAULT_LEVEL,
    };

    let mut directives = level.to_string().to_lowercase();
    for (target, cap) in DEPENDENCY_CAPS {
        directives.push_str(&format!(",{}={}", target, level.min(*cap).to_string().to_lowercase()));
    }
    directives
}

/// Installs the global logger.
///
/// `level` is the `--log-level` flag, if given; otherwise `RUST_LOG` is read.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(
    level: Option<LevelFilter>,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let directives = filter_directives(level, rust_log.as_deref());

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&directives);
    builder.target(env_logger::Target::Stderr);
    match format {
        LogFormat::Json => builder.format(format_json),
        LogFormat::Plain => builder.format(format_plain),
    };

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn format_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().to_string(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{}", line)
}

fn format_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let level = record.level().to_string();
    let level = match record.level() {
        log::Level::Error => level.red(),
        log::Level::Warn => level.yellow(),
        log::Level::Info => level.green(),
        log::Level::Debug => level.blue(),
        log::Level::Trace => level.purple(),
    };
    writeln!(buf, "[{}] {}: {}", level, record.target().cyan(), record.args())
}
