//! Return on Investment
//!
//! Projects the annual cost of a tier against the savings scanning is expected to produce:
//! fewer freight claims, faster handling and better customer retention.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::services::Service;

/// Share of pallets expected to avoid a freight claim once scanned (2%).
const CLAIM_REDUCTION_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Average cost of a freight claim, in major currency units.
const AVERAGE_CLAIM_COST: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Handling efficiency gained per load, in major currency units.
const EFFICIENCY_SAVINGS_PER_LOAD: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Customer retention value per load, in major currency units.
const RETENTION_VALUE_PER_LOAD: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Decimal places ROI and payback figures are rounded to.
const METRIC_DP: u32 = 2;

/// Errors that can occur while projecting ROI.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoiError {
    /// The average pallet count was negative.
    #[error("average pallet count must not be negative, got {0}")]
    NegativePalletCount(Decimal),

    /// The projection does not fit in a decimal.
    #[error("ROI projection overflowed")]
    Overflow,
}

/// A derived figure that may not be computable for degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Metric {
    /// The figure was computed.
    Computed(Decimal),

    /// The figure would require dividing by zero.
    NotComputable,
}

impl Metric {
    /// The computed value, if any.
    pub fn value(self) -> Option<Decimal> {
        match self {
            Metric::Computed(value) => Some(value),
            Metric::NotComputable => None,
        }
    }
}

/// Estimated annual savings split by source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsBreakdown {
    /// Avoided freight claims.
    pub claims: Money<'static, Currency>,

    /// Handling efficiency.
    pub efficiency: Money<'static, Currency>,

    /// Customer retention.
    pub retention: Money<'static, Currency>,
}

/// Annual cost and savings projection for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiProjection {
    /// Base price multiplied by annual loads.
    pub annual_cost: Money<'static, Currency>,

    /// Sum of the savings breakdown.
    pub estimated_savings: Money<'static, Currency>,

    /// Savings by source.
    pub breakdown: SavingsBreakdown,

    /// `(savings - cost) / cost * 100`; not computable when the annual cost is zero.
    pub roi_percent: Metric,

    /// `cost / savings * 12`, never negative; not computable when savings are zero.
    pub payback_months: Metric,
}

/// Project ROI for `service` over `annual_loads` loads averaging `avg_pallet_count` pallets.
///
/// # Errors
///
/// Returns [`RoiError::NegativePalletCount`] for a negative average and [`RoiError::Overflow`]
/// when the projection does not fit in a decimal.
pub fn calculate_roi(
    service: &Service,
    annual_loads: u32,
    avg_pallet_count: Decimal,
) -> Result<RoiProjection, RoiError> {
    if avg_pallet_count.is_sign_negative() && !avg_pallet_count.is_zero() {
        return Err(RoiError::NegativePalletCount(avg_pallet_count));
    }

    let currency = service.currency();
    let loads = Decimal::from(annual_loads);

    let annual_cost = service
        .base_price()
        .amount()
        .checked_mul(loads)
        .ok_or(RoiError::Overflow)?;

    let claims = loads
        .checked_mul(avg_pallet_count)
        .and_then(|pallets| pallets.checked_mul(CLAIM_REDUCTION_RATE))
        .and_then(|avoided| avoided.checked_mul(AVERAGE_CLAIM_COST))
        .ok_or(RoiError::Overflow)?;

    let efficiency = loads
        .checked_mul(EFFICIENCY_SAVINGS_PER_LOAD)
        .ok_or(RoiError::Overflow)?;

    let retention = loads
        .checked_mul(RETENTION_VALUE_PER_LOAD)
        .ok_or(RoiError::Overflow)?;

    let estimated_savings = claims
        .checked_add(efficiency)
        .and_then(|sum| sum.checked_add(retention))
        .ok_or(RoiError::Overflow)?;

    let roi_percent = roi_percent(annual_cost, estimated_savings)?;
    let payback_months = payback_months(annual_cost, estimated_savings)?;

    debug!(
        service = service.id(),
        annual_loads,
        %avg_pallet_count,
        ?roi_percent,
        ?payback_months,
        "projected roi"
    );

    Ok(RoiProjection {
        annual_cost: Money::from_decimal(annual_cost, currency),
        estimated_savings: Money::from_decimal(estimated_savings, currency),
        breakdown: SavingsBreakdown {
            claims: Money::from_decimal(claims, currency),
            efficiency: Money::from_decimal(efficiency, currency),
            retention: Money::from_decimal(retention, currency),
        },
        roi_percent,
        payback_months,
    })
}

fn roi_percent(annual_cost: Decimal, estimated_savings: Decimal) -> Result<Metric, RoiError> {
    if annual_cost.is_zero() {
        return Ok(Metric::NotComputable);
    }

    let percent = estimated_savings
        .checked_sub(annual_cost)
        .and_then(|net| net.checked_div(annual_cost))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(RoiError::Overflow)?;

    Ok(Metric::Computed(percent.round_dp(METRIC_DP)))
}

fn payback_months(annual_cost: Decimal, estimated_savings: Decimal) -> Result<Metric, RoiError> {
    if estimated_savings.is_zero() {
        return Ok(Metric::NotComputable);
    }

    let months = annual_cost
        .checked_div(estimated_savings)
        .and_then(|ratio| ratio.checked_mul(MONTHS_PER_YEAR))
        .ok_or(RoiError::Overflow)?;

    Ok(Metric::Computed(
        months.max(Decimal::ZERO).round_dp(METRIC_DP),
    ))
}
