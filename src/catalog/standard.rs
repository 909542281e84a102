//! Standard Catalog
//!
//! The three tiers sold with every freight shipment.

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::USD};

use crate::{
    discounts::VolumeDiscountBracket, industries::tags::IndustryTags, services::Service,
    tiers::Tier,
};

/// Build the standard services in catalog order.
pub(super) fn services() -> Vec<Service> {
    vec![basic(), premium(), enterprise()]
}

fn basic() -> Service {
    Service::builder(
        "basic-scan",
        "Basic Pallet Scanning",
        Tier::Basic,
        Money::from_minor(3_500, USD),
    )
    .description("Barcode scanning at pickup and delivery with digital proof of delivery.")
    .features([
        "Pallet barcode scan at pickup",
        "Pallet barcode scan at delivery",
        "Digital proof of delivery",
        "Email delivery notifications",
        "30-day scan history",
    ])
    .per_pallet(Money::from_minor(250, USD), Some(26))
    .volume_discounts(vec![
        VolumeDiscountBracket::new(5, Some(9), Percentage::from(0.10), "5-9 pallets: 10% off"),
        VolumeDiscountBracket::new(10, Some(24), Percentage::from(0.15), "10-24 pallets: 15% off"),
        VolumeDiscountBracket::new(25, None, Percentage::from(0.20), "25+ pallets: 20% off"),
    ])
    .build()
}

fn premium() -> Service {
    Service::builder(
        "premium-scan",
        "Premium Pallet Tracking",
        Tier::Premium,
        Money::from_minor(7_500, USD),
    )
    .description("Checkpoint scanning with live location, condition photos and API access.")
    .features([
        "Scans at every handling checkpoint",
        "Real-time location tracking",
        "Photo documentation of pallet condition",
        "REST API and webhook access",
        "Exception alerts by SMS and email",
        "12-month scan history",
    ])
    .per_pallet(Money::from_minor(400, USD), None)
    .volume_discounts(vec![
        VolumeDiscountBracket::new(5, Some(9), Percentage::from(0.12), "5-9 pallets: 12% off"),
        VolumeDiscountBracket::new(10, Some(24), Percentage::from(0.18), "10-24 pallets: 18% off"),
        VolumeDiscountBracket::new(25, None, Percentage::from(0.25), "25+ pallets: 25% off"),
    ])
    .industries(IndustryTags::from_strs(&[
        "food_beverage",
        "pharmaceutical",
        "electronics",
        "retail",
    ]))
    .compliance_features([
        "FSMA temperature log retention",
        "Chain-of-custody audit trail",
        "Tamper-evidence photo capture",
    ])
    .build()
}

fn enterprise() -> Service {
    Service::builder(
        "enterprise-scan",
        "Enterprise Visibility Suite",
        Tier::Enterprise,
        Money::from_minor(15_000, USD),
    )
    .description(
        "Full chain-of-custody visibility with custom integrations and a dedicated support team.",
    )
    .features([
        "Continuous IoT sensor tracking",
        "Temperature and shock monitoring",
        "Custom ERP and WMS integration",
        "Dedicated account manager",
        "24/7 priority support",
        "Unlimited scan history",
        "Custom analytics dashboards",
    ])
    .volume_discounts(vec![
        VolumeDiscountBracket::new(5, Some(9), Percentage::from(0.15), "5-9 pallets: 15% off"),
        VolumeDiscountBracket::new(10, Some(24), Percentage::from(0.22), "10-24 pallets: 22% off"),
        VolumeDiscountBracket::new(25, None, Percentage::from(0.30), "25+ pallets: 30% off"),
    ])
    .industries(IndustryTags::from_strs(&[
        "pharmaceutical",
        "healthcare",
        "aerospace",
        "automotive",
        "defense",
        "government",
    ]))
    .compliance_features([
        "21 CFR Part 11 electronic records",
        "GDP pharmaceutical distribution validation",
        "ITAR export-control custody logs",
        "SOC 2 Type II audit reporting",
    ])
    .build()
}
