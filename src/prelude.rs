//! Palletscan prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    boundary::{BoundaryError, LookupQuery, RawQuoteRequest},
    catalog::{CatalogError, ServiceCatalog},
    discounts::{AppliedDiscount, DiscountError, VolumeDiscountBracket, resolve_discount},
    fixtures::{FixtureError, load_catalog, parse_catalog},
    industries::{services_for_industry, tags::IndustryTags},
    quotes::{QuoteError, QuoteResult, calculate_quotes},
    recommendation::{recommend, recommended_tier},
    requests::{QuoteRequest, Requirements, ShipmentMode},
    roi::{Metric, RoiError, RoiProjection, calculate_roi},
    services::Service,
    tiers::Tier,
};
