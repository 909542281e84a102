use std::io;

use clap::Args;
use rust_decimal::Decimal;

use palletscan::{
    boundary::{self, BoundaryError, LookupQuery},
    catalog::ServiceCatalog,
    industries::services_for_industry,
    report,
    roi::calculate_roi,
};

use crate::{
    cli::{CommandError, fail},
    config::OutputFormat,
};

#[derive(Debug, Args)]
pub(crate) struct LookupArgs {
    /// Service id to look up
    #[arg(long)]
    pub(crate) id: Option<String>,

    /// Industry to match services against
    #[arg(short, long)]
    pub(crate) industry: Option<String>,

    /// Annual loads for an ROI projection
    #[arg(long, requires = "avg_pallets")]
    pub(crate) annual_loads: Option<u32>,

    /// Average pallets per load for an ROI projection
    #[arg(long, requires = "annual_loads", allow_negative_numbers = true)]
    pub(crate) avg_pallets: Option<Decimal>,
}

impl From<LookupArgs> for LookupQuery {
    fn from(args: LookupArgs) -> Self {
        LookupQuery {
            id: args.id,
            industry: args.industry,
            annual_loads: args.annual_loads,
            avg_pallet_count: args.avg_pallets,
        }
    }
}

pub(crate) fn run(
    catalog: &ServiceCatalog,
    args: LookupArgs,
    format: OutputFormat,
) -> Result<(), CommandError> {
    let query = LookupQuery::from(args);

    match format {
        OutputFormat::Json => {
            let response =
                boundary::lookup(catalog, &query).map_err(|error| fail(error, format))?;

            super::write_json(&response)
        }
        OutputFormat::Table => write_table(catalog, &query, io::stdout().lock()),
    }
}

fn write_table(
    catalog: &ServiceCatalog,
    query: &LookupQuery,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    if let Some(id) = query.id.as_deref() {
        let service = catalog
            .get(id)
            .ok_or_else(|| BoundaryError::ServiceNotFound(id.to_string()))?;

        report::write_services(&mut out, [service])?;

        if let (Some(annual_loads), Some(avg_pallet_count)) =
            (query.annual_loads, query.avg_pallet_count)
        {
            let projection =
                calculate_roi(service, annual_loads, avg_pallet_count).map_err(BoundaryError::from)?;

            report::write_roi(&mut out, service, &projection)?;
        }

        return Ok(());
    }

    match query.industry.as_deref() {
        Some(industry) => {
            report::write_services(&mut out, services_for_industry(catalog, industry))?;
        }
        None => {
            report::write_services(&mut out, catalog.iter())?;
        }
    }

    Ok(())
}
