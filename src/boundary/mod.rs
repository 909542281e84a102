//! Boundary
//!
//! The request-facing surface of the engine: validates raw requests, calls the core calculators,
//! and shapes their results into serializable envelopes. Nothing here does I/O; transports are
//! free to wrap these functions.

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    catalog::{CatalogError, ServiceCatalog},
    industries::services_for_industry,
    quotes::{QuoteError, calculate_quotes as price_quotes},
    recommendation::recommend,
    requests::QuoteRequest,
    roi::{RoiError, calculate_roi},
};

pub mod requests;
pub mod responses;

pub use requests::{LookupQuery, RawQuoteRequest};
pub use responses::{
    BracketView, ErrorResponse, LookupResponse, QuoteResponse, QuoteView, RoiView, ServiceView,
};

/// Errors surfaced to callers of the boundary operations.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Pallet count was zero, negative or too large.
    #[error("invalid pallet count: {0}")]
    InvalidPalletCount(String),

    /// Shipment mode tag was not LTL, FTL or Specialized.
    #[error("invalid service type: {0}")]
    InvalidServiceType(String),

    /// No service has the requested id.
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    /// Pricing failed.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// The catalog could not resolve a tier.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// ROI projection failed.
    #[error(transparent)]
    Roi(#[from] RoiError),
}

impl BoundaryError {
    /// Whether the error was caused by the caller's input rather than the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BoundaryError::InvalidPalletCount(_)
                | BoundaryError::InvalidServiceType(_)
                | BoundaryError::ServiceNotFound(_)
                | BoundaryError::Roi(RoiError::NegativePalletCount(_))
        )
    }
}

/// Validate a raw request, then price, recommend and (when an industry is given) match it.
///
/// # Errors
///
/// Returns [`BoundaryError::InvalidPalletCount`] or [`BoundaryError::InvalidServiceType`] for bad
/// input, and wraps any pricing or catalog failure.
pub fn calculate_quotes(
    catalog: &ServiceCatalog,
    raw: RawQuoteRequest,
) -> Result<QuoteResponse, BoundaryError> {
    let request = QuoteRequest::try_from(raw).inspect_err(|error| {
        warn!(%error, "rejected quote request");
    })?;

    let quotes = price_quotes(catalog, &request)?;
    let recommendation = recommend(catalog, request.requirements())?;

    let industry_services = request.industry().map(|industry| {
        services_for_industry(catalog, industry)
            .into_iter()
            .map(ServiceView::from)
            .collect()
    });

    info!(
        pallet_count = request.pallet_count(),
        quotes = quotes.len(),
        recommendation = recommendation.id(),
        "quoted scanning services"
    );

    Ok(QuoteResponse {
        success: true,
        quotes: quotes.into_iter().map(QuoteView::from).collect(),
        recommendation: ServiceView::from(recommendation),
        industry_services,
    })
}

/// Look up a service by id, services by industry, or the whole catalog.
///
/// An id takes precedence over an industry. An ROI projection is attached to an id lookup only
/// when both `annual_loads` and `avg_pallet_count` are supplied.
///
/// # Errors
///
/// Returns [`BoundaryError::ServiceNotFound`] for unknown ids and wraps ROI failures.
pub fn lookup(
    catalog: &ServiceCatalog,
    query: &LookupQuery,
) -> Result<LookupResponse, BoundaryError> {
    if let Some(id) = query.id.as_deref() {
        let service = catalog
            .get(id)
            .ok_or_else(|| BoundaryError::ServiceNotFound(id.to_string()))?;

        let roi = match (query.annual_loads, query.avg_pallet_count) {
            (Some(annual_loads), Some(avg_pallet_count)) => {
                Some(RoiView::from(calculate_roi(service, annual_loads, avg_pallet_count)?))
            }
            _ => None,
        };

        return Ok(LookupResponse {
            success: true,
            service: Some(ServiceView::from(service)),
            roi,
            services: None,
        });
    }

    let services = match query.industry.as_deref() {
        Some(industry) => services_for_industry(catalog, industry)
            .into_iter()
            .map(ServiceView::from)
            .collect(),
        None => catalog.iter().map(ServiceView::from).collect(),
    };

    Ok(LookupResponse {
        success: true,
        service: None,
        roi: None,
        services: Some(services),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{requests::Requirements, roi::Metric, tiers::Tier};

    use super::*;

    fn raw(pallet_count: i64, service_type: &str) -> RawQuoteRequest {
        RawQuoteRequest {
            pallet_count: pallet_count.into(),
            service_type: service_type.to_string(),
            ..RawQuoteRequest::default()
        }
    }

    #[test]
    fn calculate_quotes_prices_and_recommends() -> TestResult {
        let response = calculate_quotes(ServiceCatalog::standard(), raw(7, "LTL"))?;

        assert!(response.success);
        assert_eq!(response.quotes.len(), 3);
        assert_eq!(response.recommendation.tier, Tier::Basic);
        assert!(response.industry_services.is_none());

        let basic = response.quotes.first().ok_or("missing quote")?;

        assert_eq!(basic.service.id, "basic-scan");
        assert_eq!(basic.discount_applied, Decimal::TEN);
        assert_eq!(basic.original_price, Decimal::new(35, 0));
        assert_eq!(basic.final_price, Decimal::new(3150, 2));
        assert_eq!(basic.savings, Decimal::new(350, 2));

        Ok(())
    }

    #[test]
    fn calculate_quotes_includes_industry_matches() -> TestResult {
        let request = RawQuoteRequest {
            industry: Some("Pharmaceutical".to_string()),
            requirements: Requirements {
                compliance_required: true,
                ..Requirements::default()
            },
            ..raw(30, "Specialized")
        };

        let response = calculate_quotes(ServiceCatalog::standard(), request)?;
        let matched = response.industry_services.ok_or("missing industry services")?;

        assert_eq!(response.quotes.len(), 2);
        assert!(response.quotes.iter().all(|quote| quote.service.tier != Tier::Basic));
        assert!(response.quotes.iter().all(|quote| quote.compliance_benefits.is_some()));
        assert_eq!(response.recommendation.tier, Tier::Premium);
        assert_eq!(matched.len(), 3);

        Ok(())
    }

    #[test]
    fn calculate_quotes_rejects_bad_input() {
        let catalog = ServiceCatalog::standard();

        let zero = calculate_quotes(catalog, raw(0, "LTL"));
        let mode = calculate_quotes(catalog, raw(5, "rail"));

        assert!(matches!(
            &zero,
            Err(error @ BoundaryError::InvalidPalletCount(count)) if count == "0" && error.is_client_error()
        ));
        assert!(matches!(
            &mode,
            Err(BoundaryError::InvalidServiceType(tag)) if tag == "rail"
        ));
    }

    #[test]
    fn lookup_by_id_with_roi() -> TestResult {
        let query = LookupQuery {
            id: Some("basic-scan".to_string()),
            annual_loads: Some(100),
            avg_pallet_count: Some(Decimal::TEN),
            ..LookupQuery::default()
        };

        let response = lookup(ServiceCatalog::standard(), &query)?;
        let roi = response.roi.ok_or("missing roi")?;

        assert_eq!(response.service.map(|service| service.id), Some("basic-scan".to_string()));
        assert!(response.services.is_none());
        assert_eq!(roi.annual_cost, Decimal::new(3500, 0));
        assert_eq!(roi.roi_percent, Metric::Computed(Decimal::ONE_HUNDRED));

        Ok(())
    }

    #[test]
    fn lookup_by_id_without_both_roi_inputs_skips_projection() -> TestResult {
        let query = LookupQuery {
            id: Some("premium-scan".to_string()),
            annual_loads: Some(100),
            ..LookupQuery::default()
        };

        let response = lookup(ServiceCatalog::standard(), &query)?;

        assert!(response.service.is_some());
        assert!(response.roi.is_none());

        Ok(())
    }

    #[test]
    fn lookup_prefers_id_over_industry() -> TestResult {
        let query = LookupQuery {
            id: Some("enterprise-scan".to_string()),
            industry: Some("retail".to_string()),
            ..LookupQuery::default()
        };

        let response = lookup(ServiceCatalog::standard(), &query)?;

        assert_eq!(
            response.service.map(|service| service.tier),
            Some(Tier::Enterprise)
        );
        assert!(response.services.is_none());

        Ok(())
    }

    #[test]
    fn lookup_by_industry_and_full_catalog() -> TestResult {
        let catalog = ServiceCatalog::standard();

        let retail = lookup(
            catalog,
            &LookupQuery {
                industry: Some("Retail".to_string()),
                ..LookupQuery::default()
            },
        )?;

        let all = lookup(catalog, &LookupQuery::default())?;

        let retail_ids: Vec<_> = retail
            .services
            .ok_or("missing services")?
            .into_iter()
            .map(|service| service.id)
            .collect();

        assert_eq!(retail_ids, ["basic-scan", "premium-scan"]);
        assert_eq!(all.services.map(|services| services.len()), Some(3));

        Ok(())
    }

    #[test]
    fn lookup_unknown_id_is_not_found() {
        let query = LookupQuery {
            id: Some("platinum-scan".to_string()),
            ..LookupQuery::default()
        };

        let result = lookup(ServiceCatalog::standard(), &query);

        assert!(matches!(
            &result,
            Err(BoundaryError::ServiceNotFound(id)) if id == "platinum-scan"
        ));
    }

    #[test]
    fn lookup_rejects_negative_pallet_average() {
        let query = LookupQuery {
            id: Some("basic-scan".to_string()),
            annual_loads: Some(10),
            avg_pallet_count: Some(Decimal::NEGATIVE_ONE),
            ..LookupQuery::default()
        };

        let result = lookup(ServiceCatalog::standard(), &query);

        assert!(matches!(
            &result,
            Err(error @ BoundaryError::Roi(_)) if error.is_client_error()
        ));
    }

    #[test]
    fn error_envelope_carries_message() {
        let response = ErrorResponse::from(&BoundaryError::InvalidPalletCount("-2".to_string()));

        assert!(!response.success);
        assert_eq!(response.error, "invalid pallet count: -2");
    }
}
