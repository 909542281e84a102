//! Service Tiers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string does not name a known tier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown service tier: {0}")]
pub struct UnknownTier(pub String);

/// Service level classification.
///
/// Ordered from least to most capable, so `Tier::Basic < Tier::Enterprise`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry level scanning, no industry restriction.
    Basic,

    /// Adds real-time tracking, API access and compliance tooling.
    Premium,

    /// Adds custom integration and dedicated support.
    Enterprise,
}

impl Tier {
    /// Every tier, in ascending order.
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Premium, Tier::Enterprise];

    /// Lower-case tier label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Premium => "premium",
            Tier::Enterprise => "enterprise",
        }
    }

    /// Whether this tier is premium or above.
    pub const fn is_premium_or_above(self) -> bool {
        matches!(self, Tier::Premium | Tier::Enterprise)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Tier::Basic),
            "premium" => Ok(Tier::Premium),
            "enterprise" => Ok(Tier::Enterprise),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}
