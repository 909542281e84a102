//! Service Fixtures

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    discounts::VolumeDiscountBracket, fixtures::FixtureError, industries::tags::IndustryTags,
    services::Service, tiers::Tier,
};

/// Wrapper for services in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Services in catalog order
    pub services: Vec<ServiceFixture>,
}

/// Service Fixture
#[derive(Debug, Deserialize)]
pub struct ServiceFixture {
    /// Service id
    pub id: String,

    /// Display name
    pub name: String,

    /// Tier classification
    pub tier: Tier,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Flat base price (e.g., "35.00 USD")
    pub price: String,

    /// Declared per-pallet price (e.g., "2.50 USD")
    #[serde(default)]
    pub price_per_pallet: Option<String>,

    /// Declared pallet cap
    #[serde(default)]
    pub max_pallets: Option<u32>,

    /// Features
    #[serde(default)]
    pub features: Vec<String>,

    /// Volume discount ladder
    #[serde(default)]
    pub volume_discounts: Vec<BracketFixture>,

    /// Industries the tier is marketed to
    #[serde(default)]
    pub industries: Vec<String>,

    /// Compliance features
    #[serde(default)]
    pub compliance_features: Vec<String>,
}

/// Volume discount bracket fixture
#[derive(Debug, Deserialize)]
pub struct BracketFixture {
    /// Inclusive minimum pallet count
    pub min: u32,

    /// Inclusive maximum pallet count
    #[serde(default)]
    pub max: Option<u32>,

    /// Discount (e.g., "10%" or "0.10")
    pub discount: String,

    /// Description
    #[serde(default)]
    pub description: String,
}

impl TryFrom<BracketFixture> for VolumeDiscountBracket {
    type Error = FixtureError;

    fn try_from(fixture: BracketFixture) -> Result<Self, Self::Error> {
        Ok(VolumeDiscountBracket::new(
            fixture.min,
            fixture.max,
            parse_percentage(&fixture.discount)?,
            fixture.description,
        ))
    }
}

impl TryFrom<ServiceFixture> for Service {
    type Error = FixtureError;

    fn try_from(fixture: ServiceFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let ladder = fixture
            .volume_discounts
            .into_iter()
            .map(VolumeDiscountBracket::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = Service::builder(
            fixture.id,
            fixture.name,
            fixture.tier,
            Money::from_minor(minor_units, currency),
        )
        .description(fixture.description)
        .features(fixture.features)
        .volume_discounts(ladder)
        .industries(IndustryTags::new(fixture.industries))
        .compliance_features(fixture.compliance_features);

        if let Some(per_pallet) = fixture.price_per_pallet {
            let (per_pallet_minor, per_pallet_currency) = parse_price(&per_pallet)?;

            if per_pallet_currency != currency {
                return Err(FixtureError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    per_pallet_currency.iso_alpha_code.to_string(),
                ));
            }

            builder = builder.per_pallet(
                Money::from_minor(per_pallet_minor, per_pallet_currency),
                fixture.max_pallets,
            );
        } else if let Some(max_pallets) = fixture.max_pallets {
            builder = builder.max_pallets(max_pallets);
        }

        Ok(builder.build())
    }
}

/// Parse price string (e.g., "35.00 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Parse percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or falls outside 0% to 100%.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let invalid = || FixtureError::InvalidPercentage(s.to_string());
    let trimmed = s.trim();

    let fraction = if let Some(percent_str) = trimmed.strip_suffix('%') {
        percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| invalid())?
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(invalid)?
    } else {
        trimmed.parse::<Decimal>().map_err(|_err| invalid())?
    };

    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(invalid());
    }

    Ok(Percentage::from(fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("35.00USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00 USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_gbp_and_eur() -> Result<(), FixtureError> {
        let (gbp_minor, gbp) = parse_price("35 GBP")?;
        let (eur_minor, eur) = parse_price("2.50 EUR")?;

        assert_eq!(gbp_minor, 3500);
        assert_eq!(gbp, GBP);
        assert_eq!(eur_minor, 250);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_both_formats() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("15%")?, Percentage::from(0.15));
        assert_eq!(parse_percentage("0.15")?, Percentage::from(0.15));
        assert_eq!(parse_percentage("  20 % ")?, Percentage::from(0.2));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_invalid_format() {
        let result = parse_percentage("ten percent");

        assert!(matches!(result, Err(FixtureError::InvalidPercentage(_))));
    }

    #[test]
    fn parse_percentage_rejects_non_finite_and_out_of_range_values() {
        for input in ["inf", "NaN%", "7e28", "7e28%", "150%", "1.5", "-5%", "-0.1"] {
            let result = parse_percentage(input);

            assert!(
                matches!(&result, Err(FixtureError::InvalidPercentage(rejected)) if rejected == input),
                "accepted {input}"
            );
        }
    }

    #[test]
    fn parse_percentage_accepts_bounds() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("0%")?, Percentage::from(0.0));
        assert_eq!(parse_percentage("100%")?, Percentage::from(1.0));
        assert_eq!(parse_percentage("1")?, Percentage::from(1.0));

        Ok(())
    }

    #[test]
    fn per_pallet_price_must_share_currency() {
        let fixture = ServiceFixture {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            tier: Tier::Basic,
            description: String::new(),
            price: "35.00 USD".to_string(),
            price_per_pallet: Some("2.50 GBP".to_string()),
            max_pallets: None,
            features: Vec::new(),
            volume_discounts: Vec::new(),
            industries: Vec::new(),
            compliance_features: Vec::new(),
        };

        assert!(matches!(
            Service::try_from(fixture),
            Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "USD" && found == "GBP"
        ));
    }
}
