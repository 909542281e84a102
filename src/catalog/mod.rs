//! Service Catalog
//!
//! The catalog is built once, validated, and then only ever shared by reference. Every
//! calculator takes the catalog explicitly rather than reaching for a global.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{discounts::VolumeDiscountBracket, services::Service, tiers::Tier};

mod standard;

static STANDARD: LazyLock<ServiceCatalog> = LazyLock::new(|| ServiceCatalog {
    services: standard::services(),
});

/// Errors raised while validating a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two services share an identifier.
    #[error("duplicate service id: {0}")]
    DuplicateServiceId(String),

    /// No service is defined for a tier.
    #[error("no service defined for tier {0}")]
    MissingTier(Tier),

    /// More than one service is defined for a tier.
    #[error("more than one service defined for tier {0}")]
    DuplicateTier(Tier),

    /// A bracket covers no pallet counts (zero minimum or maximum below minimum).
    #[error("service {service}: bracket starting at {min} pallets covers no pallet counts")]
    EmptyBracket {
        /// Service id
        service: String,
        /// Bracket minimum
        min: u32,
    },

    /// A bracket starts at or before the end of the bracket declared before it.
    #[error("service {service}: bracket starting at {min} pallets overlaps or precedes the previous bracket")]
    BracketOutOfOrder {
        /// Service id
        service: String,
        /// Bracket minimum
        min: u32,
    },

    /// A bracket discount is negative or above 100%.
    #[error("service {service}: bracket starting at {min} pallets has a discount outside 0-100%")]
    DiscountOutOfRange {
        /// Service id
        service: String,
        /// Bracket minimum
        min: u32,
    },

    /// Services are priced in different currencies.
    #[error("currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// The immutable set of service tiers on offer.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    /// Validate and wrap a list of services.
    ///
    /// Discount resolution picks the last matching bracket, so every ladder must be ascending and
    /// non-overlapping.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if ids repeat, a tier is missing or duplicated, a discount ladder
    /// is out of order or out of range, or services disagree on currency.
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        validate(&services)?;

        Ok(Self { services })
    }

    /// The built-in basic, premium and enterprise tiers, constructed on first use.
    pub fn standard() -> &'static ServiceCatalog {
        &STANDARD
    }

    /// All services in catalog order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Iterate all services in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    /// Look up a service by id. Returns `None` for unknown ids.
    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id() == id)
    }

    /// The single service defined for `tier`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingTier`] or [`CatalogError::DuplicateTier`] when the catalog
    /// does not hold exactly one service for the tier.
    pub fn by_tier(&self, tier: Tier) -> Result<&Service, CatalogError> {
        let mut matching = self.services.iter().filter(|service| service.tier() == tier);

        let service = matching.next().ok_or(CatalogError::MissingTier(tier))?;

        if matching.next().is_some() {
            return Err(CatalogError::DuplicateTier(tier));
        }

        Ok(service)
    }
}

fn validate(services: &[Service]) -> Result<(), CatalogError> {
    let mut ids = FxHashSet::default();

    for service in services {
        if !ids.insert(service.id()) {
            return Err(CatalogError::DuplicateServiceId(service.id().to_string()));
        }

        validate_ladder(service.id(), service.volume_discounts())?;
    }

    for tier in Tier::ALL {
        match services.iter().filter(|service| service.tier() == tier).count() {
            0 => return Err(CatalogError::MissingTier(tier)),
            1 => {}
            _ => return Err(CatalogError::DuplicateTier(tier)),
        }
    }

    if let Some((first, rest)) = services.split_first() {
        for service in rest {
            if service.currency() != first.currency() {
                return Err(CatalogError::CurrencyMismatch(
                    first.currency().iso_alpha_code.to_string(),
                    service.currency().iso_alpha_code.to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// Check a ladder is ascending, non-overlapping, and only open-ended in its final bracket.
pub(crate) fn validate_ladder(
    service: &str,
    ladder: &[VolumeDiscountBracket],
) -> Result<(), CatalogError> {
    // `Some(None)` after an unbounded bracket; nothing may follow it.
    let mut previous_max: Option<Option<u32>> = None;

    for bracket in ladder {
        let min = bracket.min_pallets();

        if min == 0 || bracket.max_pallets().is_some_and(|max| max < min) {
            return Err(CatalogError::EmptyBracket {
                service: service.to_string(),
                min,
            });
        }

        let fraction = bracket.discount() * Decimal::ONE;

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(CatalogError::DiscountOutOfRange {
                service: service.to_string(),
                min,
            });
        }

        match previous_max {
            Some(None) => {
                return Err(CatalogError::BracketOutOfOrder {
                    service: service.to_string(),
                    min,
                });
            }
            Some(Some(max)) if min <= max => {
                return Err(CatalogError::BracketOutOfOrder {
                    service: service.to_string(),
                    min,
                });
            }
            _ => {}
        }

        previous_max = Some(bracket.max_pallets());
    }

    Ok(())
}
