//! Palletscan CLI

use std::process;

use tracing::error;

use crate::config::Config;

mod cli;
mod config;
mod observability;

/// Palletscan CLI entry point
pub fn main() {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    if let Err(e) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{e}");
        }

        process::exit(1);
    }

    if let Err(error) = cli::run(config) {
        error!("{error}");

        process::exit(error.exit_code());
    }
}
