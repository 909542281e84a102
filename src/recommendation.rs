//! Recommendation
//!
//! Picks a single best-fit tier from the requirement flags with a fixed-priority decision table.

use tracing::debug;

use crate::{
    catalog::{CatalogError, ServiceCatalog},
    requests::Requirements,
    services::Service,
    tiers::Tier,
};

/// One row of the decision table.
struct RecommendationRule {
    applies: fn(Requirements) -> bool,
    tier: Tier,
}

/// Evaluated top to bottom; the first matching row wins.
const RECOMMENDATION_RULES: [RecommendationRule; 2] = [
    RecommendationRule {
        applies: |requirements| requirements.custom_integration || requirements.dedicated_support,
        tier: Tier::Enterprise,
    },
    RecommendationRule {
        applies: |requirements| {
            requirements.compliance_required
                || requirements.real_time_tracking
                || requirements.api_access
        },
        tier: Tier::Premium,
    },
];

/// Tier recommended when no rule matches.
const FALLBACK_TIER: Tier = Tier::Basic;

/// The tier recommended for `requirements`.
pub fn recommended_tier(requirements: Requirements) -> Tier {
    let tier = RECOMMENDATION_RULES
        .iter()
        .find(|rule| (rule.applies)(requirements))
        .map_or(FALLBACK_TIER, |rule| rule.tier);

    debug!(%tier, "recommended tier");

    tier
}

/// The catalog service recommended for `requirements`.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the catalog does not hold exactly one service for the
/// recommended tier.
pub fn recommend(
    catalog: &ServiceCatalog,
    requirements: Requirements,
) -> Result<&Service, CatalogError> {
    catalog.by_tier(recommended_tier(requirements))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn no_flags_recommends_basic() {
        assert_eq!(recommended_tier(Requirements::default()), Tier::Basic);
    }

    #[test]
    fn photo_documentation_alone_stays_basic() {
        let requirements = Requirements {
            photo_documentation: true,
            ..Requirements::default()
        };

        assert_eq!(recommended_tier(requirements), Tier::Basic);
    }

    #[test]
    fn premium_flags_recommend_premium() {
        for requirements in [
            Requirements {
                compliance_required: true,
                ..Requirements::default()
            },
            Requirements {
                real_time_tracking: true,
                ..Requirements::default()
            },
            Requirements {
                api_access: true,
                ..Requirements::default()
            },
        ] {
            assert_eq!(
                recommended_tier(requirements),
                Tier::Premium,
                "{requirements:?}"
            );
        }
    }

    #[test]
    fn enterprise_rule_takes_priority() {
        let requirements = Requirements {
            compliance_required: true,
            real_time_tracking: true,
            api_access: true,
            dedicated_support: true,
            ..Requirements::default()
        };

        assert_eq!(recommended_tier(requirements), Tier::Enterprise);
    }

    #[test]
    fn recommend_resolves_catalog_service() -> TestResult {
        let requirements = Requirements {
            custom_integration: true,
            ..Requirements::default()
        };

        let service = recommend(ServiceCatalog::standard(), requirements)?;

        assert_eq!(service.tier(), Tier::Enterprise);

        Ok(())
    }
}
