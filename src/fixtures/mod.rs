//! Fixtures
//!
//! Load service catalogs from YAML files, e.g. `fixtures/catalogs/standard.yml`.

use std::{fs, path::Path};

use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{CatalogError, ServiceCatalog},
    services::Service,
};

pub mod services;

pub use services::{CatalogFixture, parse_percentage, parse_price};

/// Default directory catalog fixture sets are read from.
pub const DEFAULT_FIXTURE_DIR: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch within a service
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The services parsed but do not form a valid catalog
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Parse and validate a catalog from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed, a price or percentage is malformed, or the
/// resulting catalog fails validation.
pub fn parse_catalog(yaml: &str) -> Result<ServiceCatalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let services = fixture
        .services
        .into_iter()
        .map(Service::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ServiceCatalog::new(services)?)
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_catalog`] fails.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ServiceCatalog, FixtureError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;

    info!(
        path = %path.display(),
        services = catalog.services().len(),
        "loaded service catalog"
    );

    Ok(catalog)
}

/// Load a named catalog set from `<base_path>/catalogs/<name>.yml`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_catalog`] fails.
pub fn catalog_from_set(base_path: impl AsRef<Path>, name: &str) -> Result<ServiceCatalog, FixtureError> {
    load_catalog(base_path.as_ref().join("catalogs").join(format!("{name}.yml")))
}
