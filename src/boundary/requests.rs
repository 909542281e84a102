//! Boundary Requests
//!
//! Wire shapes for incoming requests and their validation into core types.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    boundary::BoundaryError,
    requests::{QuoteRequest, Requirements, ShipmentMode},
};

/// Calculate-quotes request as it arrives on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuoteRequest {
    /// Requested pallets; must be a positive integer. Kept as raw JSON so that fractions, strings
    /// and other non-integers are rejected as invalid pallet counts.
    pub pallet_count: Value,

    /// Shipment mode tag: `LTL`, `FTL` or `Specialized`.
    pub service_type: String,

    /// Optional industry tag.
    #[serde(default)]
    pub industry: Option<String>,

    /// Requirement flags; absent flags are false.
    #[serde(flatten)]
    pub requirements: Requirements,
}

impl TryFrom<RawQuoteRequest> for QuoteRequest {
    type Error = BoundaryError;

    fn try_from(raw: RawQuoteRequest) -> Result<Self, Self::Error> {
        let pallet_count = raw
            .pallet_count
            .as_u64()
            .and_then(|count| u32::try_from(count).ok())
            .and_then(NonZeroU32::new)
            .ok_or_else(|| BoundaryError::InvalidPalletCount(raw.pallet_count.to_string()))?;

        let mode = raw
            .service_type
            .parse::<ShipmentMode>()
            .map_err(|err| BoundaryError::InvalidServiceType(err.0))?;

        let request = QuoteRequest::new(pallet_count, mode).with_requirements(raw.requirements);

        Ok(match raw.industry {
            Some(industry) => request.with_industry(industry),
            None => request,
        })
    }
}

/// Lookup parameters. With no parameters the full catalog is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    /// Service id to look up.
    #[serde(default)]
    pub id: Option<String>,

    /// Industry tag to match.
    #[serde(default)]
    pub industry: Option<String>,

    /// Annual loads for an ROI projection; needs `avg_pallet_count` too.
    #[serde(default)]
    pub annual_loads: Option<u32>,

    /// Average pallets per load for an ROI projection; needs `annual_loads` too.
    #[serde(default)]
    pub avg_pallet_count: Option<Decimal>,
}
