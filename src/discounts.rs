//! Volume Discounts
//!
//! Each service carries a ladder of pallet-count brackets, each mapped to a flat percentage
//! reduction of the service price. A ladder is authored in ascending, non-overlapping order
//! (see [`crate::catalog::ServiceCatalog::new`]), which makes the last matching bracket the
//! deepest one that applies.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;
use tracing::debug;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A pallet-count range mapped to a flat percentage price reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeDiscountBracket {
    min_pallets: u32,
    max_pallets: Option<u32>,
    discount: Percentage,
    description: String,
}

impl VolumeDiscountBracket {
    /// Create a bracket covering `min_pallets..=max_pallets` (unbounded when `max_pallets` is `None`).
    pub fn new(
        min_pallets: u32,
        max_pallets: Option<u32>,
        discount: Percentage,
        description: impl Into<String>,
    ) -> Self {
        Self {
            min_pallets,
            max_pallets,
            discount,
            description: description.into(),
        }
    }

    /// Inclusive minimum pallet count.
    pub fn min_pallets(&self) -> u32 {
        self.min_pallets
    }

    /// Inclusive maximum pallet count, `None` when unbounded.
    pub fn max_pallets(&self) -> Option<u32> {
        self.max_pallets
    }

    /// Discount as a fraction (0.10 is 10% off).
    pub fn discount(&self) -> Percentage {
        self.discount
    }

    /// Discount in percentage points (10 is 10% off).
    pub fn discount_points(&self) -> Decimal {
        percent_points(self.discount)
    }

    /// Human-readable description, e.g. "5-9 pallets: 10% off".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `pallet_count` falls inside this bracket.
    pub fn matches(&self, pallet_count: u32) -> bool {
        pallet_count >= self.min_pallets && self.max_pallets.is_none_or(|max| pallet_count <= max)
    }
}

/// The outcome of resolving a discount ladder for a pallet count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedDiscount<'a> {
    bracket: Option<&'a VolumeDiscountBracket>,
}

impl<'a> AppliedDiscount<'a> {
    /// No bracket matched; the price is not reduced.
    pub const fn none() -> Self {
        Self { bracket: None }
    }

    /// The winning bracket, if any.
    pub fn bracket(self) -> Option<&'a VolumeDiscountBracket> {
        self.bracket
    }

    /// Discount as a fraction, zero when no bracket matched.
    pub fn percent(self) -> Percentage {
        self.bracket
            .map_or_else(|| Percentage::from(0.0), VolumeDiscountBracket::discount)
    }

    /// Discount in percentage points, zero when no bracket matched.
    pub fn points(self) -> Decimal {
        self.bracket
            .map_or(Decimal::ZERO, VolumeDiscountBracket::discount_points)
    }
}

/// Resolve the bracket of `ladder` that applies to `pallet_count`.
///
/// The last matching bracket in declared order wins. This only selects the deepest discount when
/// the ladder is ascending and non-overlapping, which catalog construction guarantees.
pub fn resolve_discount(
    ladder: &[VolumeDiscountBracket],
    pallet_count: u32,
) -> AppliedDiscount<'_> {
    let bracket = ladder
        .iter()
        .rev()
        .find(|bracket| bracket.matches(pallet_count));

    debug!(
        pallet_count,
        bracket = bracket.map(VolumeDiscountBracket::description),
        "resolved volume discount"
    );

    AppliedDiscount { bracket }
}

/// Apply a percentage reduction to `price`, rounding to the currency's minor unit.
///
/// # Errors
///
/// Returns a [`DiscountError`] if the percentage calculation overflows.
pub fn apply_discount(
    price: Money<'static, Currency>,
    percent: Percentage,
) -> Result<Money<'static, Currency>, DiscountError> {
    let original_minor = price.to_minor_units();

    let discounted_minor = original_minor
        .checked_sub(percent_of_minor(&percent, original_minor)?)
        .ok_or(DiscountError::PercentConversion)?;

    Ok(Money::from_minor(discounted_minor, price.currency()))
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns an error if the percentage calculation overflows or cannot be safely represented
/// (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage does not expose the inner Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

/// Convert a fractional percentage (0.15) into percentage points (15), to four decimal places.
///
/// Saturates at [`Decimal::MAX`] for fractions too large to scale.
pub fn percent_points(percent: Percentage) -> Decimal {
    (percent * Decimal::ONE)
        .checked_mul(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::MAX)
        .round_dp(4)
        .normalize()
}
