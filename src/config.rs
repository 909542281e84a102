//! CLI configuration module

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::cli::Command;

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Result output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Rendered tables.
    Table,

    /// JSON envelopes.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "PALLETSCAN_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

/// Pallet scanning add-on pricing
#[derive(Debug, Parser)]
#[command(name = "palletscan", about = "Pallet scanning add-on pricing", long_about = None)]
pub(crate) struct Config {
    /// YAML catalog to price against; the standard catalog is used when absent
    #[arg(short, long, env = "PALLETSCAN_CATALOG", global = true)]
    pub(crate) catalog: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(
        short,
        long,
        env = "PALLETSCAN_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true
    )]
    pub(crate) format: OutputFormat,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
