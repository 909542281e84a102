use std::io::{self, Write};

use clap::Subcommand;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use palletscan::{
    boundary::{BoundaryError, ErrorResponse},
    catalog::ServiceCatalog,
    fixtures::load_catalog,
    report::ReportError,
};

use crate::config::{Config, OutputFormat};

mod lookup;
mod quote;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Quote every eligible service for a shipment
    Quote(quote::QuoteArgs),

    /// Look up services by id or industry, with an optional ROI projection
    Lookup(lookup::LookupArgs),
}

/// Why a command failed.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    /// The engine rejected or failed the request.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    /// A terminal report could not be written.
    #[error("failed to write report: {0}")]
    Report(#[from] ReportError),

    /// The catalog or the JSON output could not be read or written.
    #[error("{0}")]
    Io(String),
}

impl CommandError {
    /// Process exit status: 2 when the caller's input was at fault, 1 otherwise.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CommandError::Boundary(error) if error.is_client_error() => 2,
            CommandError::Boundary(_) | CommandError::Report(_) | CommandError::Io(_) => 1,
        }
    }
}

pub(crate) fn run(config: Config) -> Result<(), CommandError> {
    let loaded;

    let catalog = match &config.catalog {
        Some(path) => {
            loaded = load_catalog(path).map_err(|error| {
                CommandError::Io(format!("failed to load catalog {}: {error}", path.display()))
            })?;

            &loaded
        }
        None => ServiceCatalog::standard(),
    };

    match config.command {
        Command::Quote(args) => quote::run(catalog, args, config.format),
        Command::Lookup(args) => lookup::run(catalog, args, config.format),
    }
}

/// Write a JSON envelope followed by a newline.
fn write_json(value: &impl Serialize) -> Result<(), CommandError> {
    let mut out = io::stdout().lock();

    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|error| CommandError::Io(format!("failed to write response: {error}")))?;

    writeln!(out).map_err(|error| CommandError::Io(format!("failed to write response: {error}")))
}

/// Report a boundary failure in the requested format and pass it on as the command's error.
fn fail(error: BoundaryError, format: OutputFormat) -> CommandError {
    if format == OutputFormat::Json
        && let Err(write_error) = write_json(&ErrorResponse::from(&error))
    {
        warn!(%write_error, "failed to write error response");
    }

    CommandError::Boundary(error)
}
