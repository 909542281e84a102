//! Boundary Responses
//!
//! JSON envelopes returned to callers. Amounts are serialized as numbers in major currency units.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::{
    boundary::BoundaryError,
    discounts::VolumeDiscountBracket,
    quotes::QuoteResult,
    roi::{Metric, RoiProjection},
    services::Service,
    tiers::Tier,
};

fn major_units(money: Money<'static, Currency>) -> Decimal {
    *money.amount()
}

/// Volume discount bracket as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketView {
    /// Inclusive minimum pallet count
    pub min_pallets: u32,

    /// Inclusive maximum pallet count, absent when unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pallets: Option<u32>,

    /// Discount in percentage points
    pub discount_percent: Decimal,

    /// Description
    pub description: String,
}

impl From<&VolumeDiscountBracket> for BracketView {
    fn from(bracket: &VolumeDiscountBracket) -> Self {
        BracketView {
            min_pallets: bracket.min_pallets(),
            max_pallets: bracket.max_pallets(),
            discount_percent: bracket.discount_points(),
            description: bracket.description().to_string(),
        }
    }
}

/// Service tier as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    /// Service id
    pub id: String,

    /// Display name
    pub name: String,

    /// Tier classification
    pub tier: Tier,

    /// Description
    pub description: String,

    /// Features
    pub features: Vec<String>,

    /// ISO currency code
    pub currency: &'static str,

    /// Flat base price
    pub base_price: Decimal,

    /// Declared per-pallet price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_pallet: Option<Decimal>,

    /// Declared pallet cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pallets: Option<u32>,

    /// Volume discount ladder
    pub volume_discounts: Vec<BracketView>,

    /// Industries, empty for unrestricted tiers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<String>,

    /// Compliance features
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compliance_features: Vec<String>,
}

impl From<&Service> for ServiceView {
    fn from(service: &Service) -> Self {
        ServiceView {
            id: service.id().to_string(),
            name: service.name().to_string(),
            tier: service.tier(),
            description: service.description().to_string(),
            features: service.features().to_vec(),
            currency: service.currency().iso_alpha_code,
            base_price: major_units(service.base_price()),
            price_per_pallet: service.price_per_pallet().map(major_units),
            max_pallets: service.max_pallets(),
            volume_discounts: service
                .volume_discounts()
                .iter()
                .map(BracketView::from)
                .collect(),
            industries: service.industries().to_strs(),
            compliance_features: service.compliance_features().to_vec(),
        }
    }
}

/// Priced quote as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    /// The priced service
    pub service: ServiceView,

    /// Price before discount
    pub original_price: Decimal,

    /// Applied discount in percentage points
    pub discount_applied: Decimal,

    /// Price after discount
    pub final_price: Decimal,

    /// Savings from the discount
    pub savings: Decimal,

    /// Merged features
    pub features: Vec<String>,

    /// Value propositions
    pub value_propositions: Vec<&'static str>,

    /// Compliance benefits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_benefits: Option<Vec<String>>,
}

impl From<QuoteResult<'_>> for QuoteView {
    fn from(quote: QuoteResult<'_>) -> Self {
        QuoteView {
            service: ServiceView::from(quote.service),
            original_price: major_units(quote.original_price),
            discount_applied: quote.discount_applied,
            final_price: major_units(quote.final_price),
            savings: major_units(quote.savings),
            features: quote.features,
            value_propositions: quote.value_propositions,
            compliance_benefits: quote.compliance_benefits,
        }
    }
}

/// ROI projection as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiView {
    /// Annual cost
    pub annual_cost: Decimal,

    /// Estimated annual savings
    pub estimated_savings: Decimal,

    /// Savings from avoided claims
    pub claim_savings: Decimal,

    /// Savings from handling efficiency
    pub efficiency_savings: Decimal,

    /// Customer retention value
    pub retention_savings: Decimal,

    /// ROI percentage
    pub roi_percent: Metric,

    /// Payback period in months
    pub payback_months: Metric,
}

impl From<RoiProjection> for RoiView {
    fn from(projection: RoiProjection) -> Self {
        RoiView {
            annual_cost: major_units(projection.annual_cost),
            estimated_savings: major_units(projection.estimated_savings),
            claim_savings: major_units(projection.breakdown.claims),
            efficiency_savings: major_units(projection.breakdown.efficiency),
            retention_savings: major_units(projection.breakdown.retention),
            roi_percent: projection.roi_percent,
            payback_months: projection.payback_months,
        }
    }
}

/// Calculate-quotes response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Always `true`; failures use [`ErrorResponse`]
    pub success: bool,

    /// Quotes, cheapest first
    pub quotes: Vec<QuoteView>,

    /// Recommended service
    pub recommendation: ServiceView,

    /// Services matching the requested industry, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_services: Option<Vec<ServiceView>>,
}

/// Lookup response. Exactly one of `service` or `services` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// Always `true`; failures use [`ErrorResponse`]
    pub success: bool,

    /// The looked-up service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceView>,

    /// ROI projection for the looked-up service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiView>,

    /// Industry matches or the full catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceView>>,
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Error message
    pub error: String,
}

impl From<&BoundaryError> for ErrorResponse {
    fn from(error: &BoundaryError) -> Self {
        ErrorResponse {
            success: false,
            error: error.to_string(),
        }
    }
}
