use std::io;

use clap::Args;

use palletscan::{
    boundary::{self, BoundaryError, RawQuoteRequest},
    catalog::ServiceCatalog,
    industries::services_for_industry,
    quotes::calculate_quotes,
    recommendation::recommend,
    report,
    requests::{QuoteRequest, Requirements},
};

use crate::{
    cli::{CommandError, fail},
    config::OutputFormat,
};

#[derive(Debug, Args)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "independent requirement flags from the command line."
)]
pub(crate) struct QuoteArgs {
    /// Number of pallets in the shipment
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) pallets: i64,

    /// Shipment mode (LTL, FTL, Specialized)
    #[arg(short, long, default_value = "LTL")]
    pub(crate) mode: String,

    /// Industry of the shipper
    #[arg(short, long)]
    pub(crate) industry: Option<String>,

    /// Regulatory compliance reporting is required
    #[arg(long)]
    pub(crate) compliance_required: bool,

    /// Integration with the shipper's own systems is required
    #[arg(long)]
    pub(crate) custom_integration: bool,

    /// Live location tracking is wanted
    #[arg(long)]
    pub(crate) real_time_tracking: bool,

    /// Photo evidence of pallet condition is wanted
    #[arg(long)]
    pub(crate) photo_documentation: bool,

    /// Programmatic API access is wanted
    #[arg(long)]
    pub(crate) api_access: bool,

    /// A dedicated support contact is wanted
    #[arg(long)]
    pub(crate) dedicated_support: bool,
}

impl From<QuoteArgs> for RawQuoteRequest {
    fn from(args: QuoteArgs) -> Self {
        RawQuoteRequest {
            pallet_count: args.pallets.into(),
            service_type: args.mode,
            industry: args.industry,
            requirements: Requirements {
                compliance_required: args.compliance_required,
                custom_integration: args.custom_integration,
                real_time_tracking: args.real_time_tracking,
                photo_documentation: args.photo_documentation,
                api_access: args.api_access,
                dedicated_support: args.dedicated_support,
            },
        }
    }
}

pub(crate) fn run(
    catalog: &ServiceCatalog,
    args: QuoteArgs,
    format: OutputFormat,
) -> Result<(), CommandError> {
    let raw = RawQuoteRequest::from(args);

    match format {
        OutputFormat::Json => {
            let response =
                boundary::calculate_quotes(catalog, raw).map_err(|error| fail(error, format))?;

            super::write_json(&response)
        }
        OutputFormat::Table => write_table(catalog, raw, io::stdout().lock()),
    }
}

fn write_table(
    catalog: &ServiceCatalog,
    raw: RawQuoteRequest,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let request = QuoteRequest::try_from(raw)?;
    let quotes = calculate_quotes(catalog, &request).map_err(BoundaryError::from)?;
    let recommendation = recommend(catalog, request.requirements()).map_err(BoundaryError::from)?;

    report::write_quotes(&mut out, &quotes, recommendation)?;

    if let Some(industry) = request.industry() {
        report::write_services(&mut out, services_for_industry(catalog, industry))?;
    }

    Ok(())
}
