//! Industries
//!
//! Filters the catalog down to the tiers marketed to an industry. The basic tier carries no
//! industry restriction and is always offered as the fallback.

use smallvec::SmallVec;
use tracing::debug;

use crate::{catalog::ServiceCatalog, services::Service, tiers::Tier};

pub mod tags;

/// Services offered to `industry`, in catalog order.
///
/// Includes every tier whose industry tags contain `industry`, plus the basic tier regardless of
/// its tags. Returns just the basic tier when no specialised tier matches.
pub fn services_for_industry<'a>(
    catalog: &'a ServiceCatalog,
    industry: &str,
) -> SmallVec<[&'a Service; 3]> {
    let services: SmallVec<[&Service; 3]> = catalog
        .iter()
        .filter(|service| service.tier() == Tier::Basic || service.industries().contains(industry))
        .collect();

    debug!(industry, matches = services.len(), "matched industry");

    services
}
