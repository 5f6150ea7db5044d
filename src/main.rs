//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `social_tags` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Wiring stdin/stdout into the interactive run
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process;

use social_tags::initialization::{init_client, init_logger_with};
use social_tags::{exit_code, run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    init_logger_with(config.log_level.clone().map(Into::into), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = run(&client, &mut stdin.lock(), &mut stdout.lock()).await?;

    let code = exit_code(config.fail_on, &report);
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
