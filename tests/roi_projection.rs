//! ROI projections for the standard tiers

use palletscan::prelude::*;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

/// A busy basic subscriber pays for itself twice over.
#[test]
fn basic_tier_doubles_its_cost() -> TestResult {
    let basic = ServiceCatalog::standard().by_tier(Tier::Basic)?;
    let projection = calculate_roi(basic, 100, Decimal::TEN)?;

    assert_eq!(projection.annual_cost, Money::from_minor(350_000, USD));
    assert_eq!(projection.breakdown.claims, Money::from_minor(300_000, USD));
    assert_eq!(projection.breakdown.efficiency, Money::from_minor(250_000, USD));
    assert_eq!(projection.breakdown.retention, Money::from_minor(150_000, USD));
    assert_eq!(projection.estimated_savings, Money::from_minor(700_000, USD));
    assert_eq!(projection.roi_percent, Metric::Computed(Decimal::ONE_HUNDRED));
    assert_eq!(projection.payback_months, Metric::Computed(Decimal::new(6, 0)));

    Ok(())
}

/// Higher tiers cost more per load, so the same shipper sees a lower return.
#[test]
fn roi_falls_as_tier_price_rises() -> TestResult {
    let catalog = ServiceCatalog::standard();

    let roi = |tier: Tier| -> TestResult<Decimal> {
        let projection = calculate_roi(catalog.by_tier(tier)?, 250, Decimal::new(12, 0))?;

        Ok(projection.roi_percent.value().ok_or("roi not computable")?)
    };

    let basic = roi(Tier::Basic)?;
    let premium = roi(Tier::Premium)?;
    let enterprise = roi(Tier::Enterprise)?;

    assert!(basic > premium, "basic {basic} <= premium {premium}");
    assert!(premium > enterprise, "premium {premium} <= enterprise {enterprise}");

    Ok(())
}

/// No loads means no cost and no savings, so neither ratio exists.
#[test]
fn zero_loads_are_not_computable() -> TestResult {
    let premium = ServiceCatalog::standard().by_tier(Tier::Premium)?;
    let projection = calculate_roi(premium, 0, Decimal::new(8, 0))?;

    assert!(projection.annual_cost.is_zero());
    assert!(projection.estimated_savings.is_zero());
    assert_eq!(projection.roi_percent, Metric::NotComputable);
    assert_eq!(projection.payback_months, Metric::NotComputable);

    Ok(())
}

/// The JSON form states whether each metric was computed.
#[test]
fn projection_metrics_serialize_with_status() -> TestResult {
    let basic = ServiceCatalog::standard().by_tier(Tier::Basic)?;
    let projection = calculate_roi(basic, 0, Decimal::ONE)?;

    let roi = serde_json::to_value(projection.roi_percent)?;

    assert_eq!(roi, serde_json::json!({ "status": "notComputable" }));

    Ok(())
}
