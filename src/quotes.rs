//! Quotes
//!
//! Prices every eligible tier in a catalog for a [`QuoteRequest`] and ranks the results from
//! cheapest to most expensive.

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::ServiceCatalog,
    discounts::{DiscountError, apply_discount, resolve_discount},
    requests::{QuoteRequest, Requirements},
    services::Service,
    tiers::Tier,
};

/// Errors that can occur while pricing a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Discount arithmetic failed.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Money arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Propositions every tier carries.
const BASELINE_PROPOSITIONS: [&str; 4] = [
    "Reduce freight claims with scan-verified pallet counts",
    "Digital proof of delivery on every shipment",
    "Faster dispute resolution with timestamped scan records",
    "No hardware to buy; scanning is handled by the carrier",
];

/// Propositions for premium and enterprise tiers.
const PREMIUM_PROPOSITIONS: [&str; 3] = [
    "Live shipment visibility for your customers",
    "Photo evidence of pallet condition at every handoff",
    "Plug scan events into your own systems through the API",
];

/// Propositions for the enterprise tier.
const ENTERPRISE_PROPOSITIONS: [&str; 4] = [
    "Custom integration with your ERP and WMS",
    "Dedicated account manager and 24/7 priority support",
    "Sensor-grade condition monitoring for high-value freight",
    "Custom analytics on claims, dwell time and carrier performance",
];

/// Propositions added whenever compliance is required.
const COMPLIANCE_PROPOSITIONS: [&str; 3] = [
    "Audit-ready chain-of-custody records",
    "Regulatory documentation retained and exportable on demand",
    "Lower compliance risk with tamper-evident scan history",
];

/// One rule of the value proposition table.
struct PropositionRule {
    applies: fn(Tier, Requirements) -> bool,
    propositions: &'static [&'static str],
}

/// Applied in order; every matching rule appends its propositions.
const PROPOSITION_RULES: [PropositionRule; 4] = [
    PropositionRule {
        applies: |_, _| true,
        propositions: &BASELINE_PROPOSITIONS,
    },
    PropositionRule {
        applies: |tier, _| tier.is_premium_or_above(),
        propositions: &PREMIUM_PROPOSITIONS,
    },
    PropositionRule {
        applies: |tier, _| tier == Tier::Enterprise,
        propositions: &ENTERPRISE_PROPOSITIONS,
    },
    PropositionRule {
        applies: |_, requirements| requirements.compliance_required,
        propositions: &COMPLIANCE_PROPOSITIONS,
    },
];

/// A priced offer for one service tier.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteResult<'a> {
    /// The service being priced.
    pub service: &'a Service,

    /// Price before volume discounts (the service's base price).
    pub original_price: Money<'static, Currency>,

    /// Applied volume discount in percentage points.
    pub discount_applied: Decimal,

    /// Price after the volume discount.
    pub final_price: Money<'static, Currency>,

    /// `original_price - final_price`.
    pub savings: Money<'static, Currency>,

    /// Tier features, followed by compliance features when compliance is required.
    pub features: Vec<String>,

    /// Marketing value propositions, in rule order.
    pub value_propositions: Vec<&'static str>,

    /// The tier's compliance features, present only when compliance is required and the tier
    /// defines any.
    pub compliance_benefits: Option<Vec<String>>,
}

/// Price every eligible tier of `catalog` for `request`, cheapest first.
///
/// The basic tier is dropped when the request needs custom integration or compliance.
///
/// # Errors
///
/// Returns a [`QuoteError`] if discount or money arithmetic overflows.
pub fn calculate_quotes<'a>(
    catalog: &'a ServiceCatalog,
    request: &QuoteRequest,
) -> Result<Vec<QuoteResult<'a>>, QuoteError> {
    let requirements = request.requirements();

    let mut quotes = catalog
        .iter()
        .filter(|service| is_eligible(service.tier(), requirements))
        .map(|service| quote_service(service, request))
        .collect::<Result<Vec<_>, _>>()?;

    quotes.sort_by_key(|quote| quote.final_price.to_minor_units());

    debug!(
        pallet_count = request.pallet_count(),
        mode = %request.mode(),
        quotes = quotes.len(),
        "calculated quotes"
    );

    Ok(quotes)
}

/// Whether a tier can satisfy the mandatory requirements.
pub fn is_eligible(tier: Tier, requirements: Requirements) -> bool {
    let eligible = tier != Tier::Basic || !requirements.excludes_basic();

    if !eligible {
        debug!(%tier, "tier excluded by requirements");
    }

    eligible
}

/// Price a single service for a request, ignoring eligibility.
///
/// # Errors
///
/// Returns a [`QuoteError`] if discount or money arithmetic overflows.
pub fn quote_service<'a>(
    service: &'a Service,
    request: &QuoteRequest,
) -> Result<QuoteResult<'a>, QuoteError> {
    let requirements = request.requirements();
    let original_price = service.base_price();
    let discount = resolve_discount(service.volume_discounts(), request.pallet_count());

    let final_price = apply_discount(original_price, discount.percent())?;
    let savings = original_price.sub(final_price)?;

    let mut features = service.features().to_vec();

    if requirements.compliance_required {
        features.extend_from_slice(service.compliance_features());
    }

    let compliance_benefits = (requirements.compliance_required
        && !service.compliance_features().is_empty())
    .then(|| service.compliance_features().to_vec());

    Ok(QuoteResult {
        service,
        original_price,
        discount_applied: discount.points(),
        final_price,
        savings,
        features,
        value_propositions: value_propositions(service.tier(), requirements),
        compliance_benefits,
    })
}

/// Value propositions for a tier under the given requirements.
pub fn value_propositions(tier: Tier, requirements: Requirements) -> Vec<&'static str> {
    PROPOSITION_RULES
        .iter()
        .filter(|rule| (rule.applies)(tier, requirements))
        .flat_map(|rule| rule.propositions.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::requests::ShipmentMode;

    use super::*;

    fn request(pallets: u32, requirements: Requirements) -> TestResult<QuoteRequest> {
        let pallets = NonZeroU32::new(pallets).ok_or("zero pallets")?;

        Ok(QuoteRequest::new(pallets, ShipmentMode::Ltl).with_requirements(requirements))
    }

    #[test]
    fn baseline_propositions_only_for_basic() {
        let propositions = value_propositions(Tier::Basic, Requirements::default());

        assert_eq!(propositions, BASELINE_PROPOSITIONS);
    }

    #[test]
    fn enterprise_with_compliance_gets_every_proposition_in_order() {
        let requirements = Requirements {
            compliance_required: true,
            ..Requirements::default()
        };

        let propositions = value_propositions(Tier::Enterprise, requirements);

        let expected: Vec<&str> = BASELINE_PROPOSITIONS
            .iter()
            .chain(&PREMIUM_PROPOSITIONS)
            .chain(&ENTERPRISE_PROPOSITIONS)
            .chain(&COMPLIANCE_PROPOSITIONS)
            .copied()
            .collect();

        assert_eq!(propositions.len(), 14);
        assert_eq!(propositions, expected);
    }

    #[test]
    fn premium_gets_seven_propositions() {
        assert_eq!(
            value_propositions(Tier::Premium, Requirements::default()).len(),
            7
        );
    }

    #[test]
    fn basic_with_compliance_flag_still_gets_compliance_propositions() {
        let requirements = Requirements {
            compliance_required: true,
            ..Requirements::default()
        };

        assert_eq!(value_propositions(Tier::Basic, requirements).len(), 7);
    }

    #[test]
    fn quote_service_prices_basic_tier() -> TestResult {
        let catalog = ServiceCatalog::standard();
        let basic = catalog.by_tier(Tier::Basic)?;

        let quote = quote_service(basic, &request(7, Requirements::default())?)?;

        assert_eq!(quote.original_price, Money::from_minor(3500, USD));
        assert_eq!(quote.discount_applied, Decimal::from(10));
        assert_eq!(quote.final_price, Money::from_minor(3150, USD));
        assert_eq!(quote.savings, Money::from_minor(350, USD));
        assert_eq!(quote.features, basic.features());
        assert!(quote.compliance_benefits.is_none());

        Ok(())
    }

    #[test]
    fn compliance_merges_features_and_benefits() -> TestResult {
        let catalog = ServiceCatalog::standard();
        let premium = catalog.by_tier(Tier::Premium)?;

        let requirements = Requirements {
            compliance_required: true,
            ..Requirements::default()
        };

        let quote = quote_service(premium, &request(1, requirements)?)?;

        assert_eq!(
            quote.features.len(),
            premium.features().len() + premium.compliance_features().len()
        );
        assert_eq!(
            quote.features.last().map(String::as_str),
            premium.compliance_features().last().map(String::as_str)
        );
        assert_eq!(
            quote.compliance_benefits.as_deref(),
            Some(premium.compliance_features())
        );

        Ok(())
    }

    #[test]
    fn eligibility_excludes_basic_for_integration_or_compliance() {
        let integration = Requirements {
            custom_integration: true,
            ..Requirements::default()
        };

        assert!(!is_eligible(Tier::Basic, integration));
        assert!(is_eligible(Tier::Premium, integration));
        assert!(is_eligible(Tier::Enterprise, integration));
        assert!(is_eligible(Tier::Basic, Requirements::default()));
    }
}
