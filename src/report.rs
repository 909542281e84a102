//! Report
//!
//! Terminal rendering of quotes, catalog listings and ROI projections.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    quotes::QuoteResult,
    roi::{Metric, RoiProjection},
    services::Service,
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Write a table of quotes, cheapest first, followed by the recommended service.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if the output cannot be written.
pub fn write_quotes(
    mut out: impl io::Write,
    quotes: &[QuoteResult<'_>],
    recommendation: &Service,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "",
        "Service",
        "Tier",
        "Base Price",
        "Discount",
        "Final Price",
        "Savings",
    ]);

    for (idx, quote) in quotes.iter().enumerate() {
        let marker = if quote.service.id() == recommendation.id() {
            "*"
        } else {
            ""
        };

        builder.push_record([
            format!("#{:<2}{marker}", idx + 1),
            quote.service.name().to_string(),
            quote.service.tier().to_string(),
            format!("{}", quote.original_price),
            format!("{}%", quote.discount_applied),
            format!("{}", quote.final_price),
            savings_cell(quote),
        ]);
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..7), Alignment::right());
    table.modify(Columns::new(5..6), Color::FG_GREEN);

    writeln!(out, "\n{table}").map_err(|_err| ReportError::IO)?;

    if quotes.is_empty() {
        writeln!(out, " No eligible services.").map_err(|_err| ReportError::IO)?;
    }

    writeln!(
        out,
        " Recommended: \x1b[1m{}\x1b[0m ({})",
        recommendation.name(),
        recommendation.tier()
    )
    .map_err(|_err| ReportError::IO)?;

    for quote in quotes {
        if quote.service.id() != recommendation.id() {
            continue;
        }

        for proposition in &quote.value_propositions {
            writeln!(out, "   - {proposition}").map_err(|_err| ReportError::IO)?;
        }

        if let Some(benefits) = &quote.compliance_benefits {
            writeln!(out, " Compliance: {}", benefits.join(", ")).map_err(|_err| ReportError::IO)?;
        }
    }

    writeln!(out).map_err(|_err| ReportError::IO)
}

fn savings_cell(quote: &QuoteResult<'_>) -> String {
    if quote.savings.is_zero() {
        String::new()
    } else {
        format!("-{}", quote.savings)
    }
}

/// Write a listing of services with their discount ladders.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if the output cannot be written.
pub fn write_services<'a>(
    mut out: impl io::Write,
    services: impl IntoIterator<Item = &'a Service>,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Service", "Tier", "Price", "Volume Discounts", "Industries"]);

    for service in services {
        let ladder = service
            .volume_discounts()
            .iter()
            .map(|bracket| {
                let range = match bracket.max_pallets() {
                    Some(max) => format!("{}-{max}", bracket.min_pallets()),
                    None => format!("{}+", bracket.min_pallets()),
                };

                format!("{range}: {}%", bracket.discount_points())
            })
            .collect::<Vec<_>>()
            .join("\n");

        let industries = if service.industries().is_empty() {
            "any".to_string()
        } else {
            service.industries().to_strs().join("\n")
        };

        builder.push_record([
            service.id().to_string(),
            service.name().to_string(),
            service.tier().to_string(),
            format!("{}", service.base_price()),
            ladder,
            industries,
        ]);
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "\n{table}\n").map_err(|_err| ReportError::IO)
}

/// Write an ROI summary for a service.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if the output cannot be written.
pub fn write_roi(
    mut out: impl io::Write,
    service: &Service,
    projection: &RoiProjection,
) -> Result<(), ReportError> {
    let lines = [
        (" Annual cost:", format!("{}", projection.annual_cost)),
        (" Claims avoided:", format!("{}", projection.breakdown.claims)),
        (" Efficiency:", format!("{}", projection.breakdown.efficiency)),
        (" Retention:", format!("{}", projection.breakdown.retention)),
        (" Estimated savings:", format!("{}", projection.estimated_savings)),
        (" ROI:", metric_cell(projection.roi_percent, "%")),
        (" Payback:", metric_cell(projection.payback_months, " months")),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    writeln!(out, "\n \x1b[1m{}\x1b[0m ROI projection", service.name())
        .map_err(|_err| ReportError::IO)?;

    for (label, value) in &lines {
        writeln!(out, "{label:>label_width$}  {value:>value_width$}").map_err(|_err| ReportError::IO)?;
    }

    writeln!(out).map_err(|_err| ReportError::IO)
}

fn metric_cell(metric: Metric, unit: &str) -> String {
    match metric {
        Metric::Computed(value) => format!("{value}{unit}"),
        Metric::NotComputable => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use crate::{
        catalog::ServiceCatalog,
        quotes::calculate_quotes,
        requests::{QuoteRequest, Requirements, ShipmentMode},
        roi::calculate_roi,
        tiers::Tier,
    };

    use super::*;

    fn render(
        write: impl FnOnce(&mut Vec<u8>) -> Result<(), ReportError>,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn quote_table_lists_every_quote_and_marks_recommendation() -> TestResult {
        let catalog = ServiceCatalog::standard();
        let request = QuoteRequest::new(NonZeroU32::new(12).ok_or("zero")?, ShipmentMode::Ftl)
            .with_requirements(Requirements {
                real_time_tracking: true,
                ..Requirements::default()
            });

        let quotes = calculate_quotes(catalog, &request)?;
        let recommendation = catalog.by_tier(Tier::Premium)?;

        let output = render(|out| write_quotes(out, &quotes, recommendation))?;

        assert!(output.contains("Basic Pallet Scanning"));
        assert!(output.contains("Premium Pallet Tracking"));
        assert!(output.contains("Enterprise Visibility Suite"));
        assert!(output.contains("Recommended: \x1b[1mPremium Pallet Tracking"));
        assert!(output.contains("15%"));

        Ok(())
    }

    #[test]
    fn services_listing_shows_ladders() -> TestResult {
        let output = render(|out| write_services(out, ServiceCatalog::standard().iter()))?;

        assert!(output.contains("basic-scan"));
        assert!(output.contains("5-9: 10%"));
        assert!(output.contains("25+: 20%"));
        assert!(output.contains("pharmaceutical"));

        Ok(())
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_surface_as_io_errors() -> TestResult {
        let catalog = ServiceCatalog::standard();
        let service = catalog.by_tier(Tier::Premium)?;
        let projection = calculate_roi(service, 10, rust_decimal::Decimal::TEN)?;

        assert!(matches!(
            write_services(ClosedPipe, catalog.iter()),
            Err(ReportError::IO)
        ));
        assert!(matches!(
            write_quotes(ClosedPipe, &[], service),
            Err(ReportError::IO)
        ));
        assert!(matches!(
            write_roi(ClosedPipe, service, &projection),
            Err(ReportError::IO)
        ));

        Ok(())
    }

    #[test]
    fn roi_summary_marks_uncomputable_metrics() -> TestResult {
        let service = ServiceCatalog::standard().by_tier(Tier::Basic)?;
        let projection = calculate_roi(service, 0, rust_decimal::Decimal::TEN)?;

        let output = render(|out| write_roi(out, service, &projection))?;

        assert!(output.contains("ROI projection"));
        assert!(output.contains("n/a"));

        Ok(())
    }
}
