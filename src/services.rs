//! Services
//!
//! A [`Service`] is one priced tier of the pallet scanning add-on. Fields are private and only
//! exposed through shared accessors, so a service handed out by a catalog cannot be changed in
//! place.

use rusty_money::{Money, iso::Currency};

use crate::{discounts::VolumeDiscountBracket, industries::tags::IndustryTags, tiers::Tier};

/// A pallet scanning service tier definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    id: String,
    name: String,
    tier: Tier,
    description: String,
    features: Vec<String>,
    base_price: Money<'static, Currency>,
    price_per_pallet: Option<Money<'static, Currency>>,
    max_pallets: Option<u32>,
    volume_discounts: Vec<VolumeDiscountBracket>,
    industries: IndustryTags,
    compliance_features: Vec<String>,
}

impl Service {
    /// Start building a service with its identity and flat base price.
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: Tier,
        base_price: Money<'static, Currency>,
    ) -> ServiceBuilder {
        ServiceBuilder {
            service: Service {
                id: id.into(),
                name: name.into(),
                tier,
                description: String::new(),
                features: Vec::new(),
                base_price,
                price_per_pallet: None,
                max_pallets: None,
                volume_discounts: Vec::new(),
                industries: IndustryTags::empty(),
                compliance_features: Vec::new(),
            },
        }
    }

    /// Stable identifier, e.g. `"basic-scan"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tier classification.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Marketing description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Features included with the tier, in display order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Flat price charged per shipment, before volume discounts.
    pub fn base_price(&self) -> Money<'static, Currency> {
        self.base_price
    }

    /// Declared per-pallet price.
    ///
    /// Quotes are flat-rate today; this is carried for catalogs that price per pallet but is not
    /// read by any calculation.
    pub fn price_per_pallet(&self) -> Option<Money<'static, Currency>> {
        self.price_per_pallet
    }

    /// Declared pallet cap. Carried alongside [`Service::price_per_pallet`], also unused by pricing.
    pub fn max_pallets(&self) -> Option<u32> {
        self.max_pallets
    }

    /// Volume discount ladder, ascending by minimum pallet count.
    pub fn volume_discounts(&self) -> &[VolumeDiscountBracket] {
        &self.volume_discounts
    }

    /// Industries the tier is marketed to. Empty for unrestricted tiers.
    pub fn industries(&self) -> &IndustryTags {
        &self.industries
    }

    /// Compliance features unlocked when a request requires compliance.
    pub fn compliance_features(&self) -> &[String] {
        &self.compliance_features
    }

    /// Currency the service is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.base_price.currency()
    }
}

/// Builder for [`Service`].
#[derive(Debug)]
pub struct ServiceBuilder {
    service: Service,
}

impl ServiceBuilder {
    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.service.description = description.into();
        self
    }

    /// Set the feature list.
    #[must_use]
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Declare a per-pallet price and optional pallet cap.
    #[must_use]
    pub fn per_pallet(mut self, price: Money<'static, Currency>, max_pallets: Option<u32>) -> Self {
        self.service.price_per_pallet = Some(price);
        self.service.max_pallets = max_pallets;
        self
    }

    /// Set the pallet cap without a per-pallet price.
    #[must_use]
    pub fn max_pallets(mut self, max_pallets: u32) -> Self {
        self.service.max_pallets = Some(max_pallets);
        self
    }

    /// Set the volume discount ladder.
    #[must_use]
    pub fn volume_discounts(mut self, ladder: Vec<VolumeDiscountBracket>) -> Self {
        self.service.volume_discounts = ladder;
        self
    }

    /// Set the industries the tier is marketed to.
    #[must_use]
    pub fn industries(mut self, industries: IndustryTags) -> Self {
        self.service.industries = industries;
        self
    }

    /// Set the compliance features.
    #[must_use]
    pub fn compliance_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service.compliance_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Finish building.
    pub fn build(self) -> Service {
        self.service
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let service = Service::builder("pilot", "Pilot", Tier::Premium, Money::from_minor(4200, USD))
            .description("Pilot tier")
            .features(["Scan at pickup"])
            .per_pallet(Money::from_minor(300, USD), Some(12))
            .volume_discounts(vec![VolumeDiscountBracket::new(
                5,
                None,
                Percentage::from(0.05),
                "5+ pallets",
            )])
            .industries(IndustryTags::from_strs(&["retail"]))
            .compliance_features(["Audit trail"])
            .build();

        assert_eq!(service.id(), "pilot");
        assert_eq!(service.name(), "Pilot");
        assert_eq!(service.tier(), Tier::Premium);
        assert_eq!(service.description(), "Pilot tier");
        assert_eq!(service.features(), ["Scan at pickup"]);
        assert_eq!(service.base_price(), Money::from_minor(4200, USD));
        assert_eq!(service.price_per_pallet(), Some(Money::from_minor(300, USD)));
        assert_eq!(service.max_pallets(), Some(12));
        assert_eq!(service.volume_discounts().len(), 1);
        assert!(service.industries().contains("retail"));
        assert_eq!(service.compliance_features(), ["Audit trail"]);
        assert_eq!(service.currency(), USD);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let service =
            Service::builder("bare", "Bare", Tier::Basic, Money::from_minor(100, USD)).build();

        assert!(service.features().is_empty());
        assert!(service.price_per_pallet().is_none());
        assert!(service.max_pallets().is_none());
        assert!(service.volume_discounts().is_empty());
        assert!(service.industries().is_empty());
        assert!(service.compliance_features().is_empty());
    }
}
