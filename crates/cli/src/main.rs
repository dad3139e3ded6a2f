//! Makercart CLI
//!
//! Opens the cart stored on this machine, applies one operation and prints the result.

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::CliConfig;

mod commands;
mod config;
mod logging;

/// Makercart CLI entry point
pub fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    if let Err(err) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match commands::run(&config, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            #[expect(clippy::print_stderr, reason = "command errors are reported to the user")]
            {
                eprintln!("Error: {err}");
            }

            ExitCode::FAILURE
        }
    }
}
