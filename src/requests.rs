//! Quote Requests

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::industries::tags::normalize_industry;

/// Returned when a shipment mode tag is not one of LTL, FTL or Specialized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown shipment mode: {0}")]
pub struct UnknownShipmentMode(pub String);

/// How the freight the scanning service is attached to is shipped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentMode {
    /// Less than truckload.
    #[serde(rename = "LTL")]
    Ltl,

    /// Full truckload.
    #[serde(rename = "FTL")]
    Ftl,

    /// Specialized freight (flatbed, temperature controlled, oversized).
    Specialized,
}

impl ShipmentMode {
    /// Wire tag for the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            ShipmentMode::Ltl => "LTL",
            ShipmentMode::Ftl => "FTL",
            ShipmentMode::Specialized => "Specialized",
        }
    }
}

impl fmt::Display for ShipmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentMode {
    type Err = UnknownShipmentMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LTL" => Ok(ShipmentMode::Ltl),
            "FTL" => Ok(ShipmentMode::Ftl),
            "Specialized" => Ok(ShipmentMode::Specialized),
            other => Err(UnknownShipmentMode(other.to_string())),
        }
    }
}

/// Customer requirement flags.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "independent requirement flags from the request."
)]
pub struct Requirements {
    /// Regulatory compliance tooling is mandatory.
    pub compliance_required: bool,

    /// Integration with the customer's own systems is mandatory.
    pub custom_integration: bool,

    /// Live location tracking is wanted.
    pub real_time_tracking: bool,

    /// Photo documentation of pallet condition is wanted.
    pub photo_documentation: bool,

    /// Programmatic API access is wanted.
    pub api_access: bool,

    /// A dedicated support contact is wanted.
    pub dedicated_support: bool,
}

impl Requirements {
    /// Whether the request rules out the basic tier.
    pub const fn excludes_basic(self) -> bool {
        self.custom_integration || self.compliance_required
    }
}

/// A validated request for scanning service quotes.
///
/// The pallet count is non-zero by construction; the boundary layer rejects anything else before
/// a request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pallet_count: NonZeroU32,
    mode: ShipmentMode,
    industry: Option<String>,
    requirements: Requirements,
}

impl QuoteRequest {
    /// Create a request with no industry and no requirement flags set.
    pub fn new(pallet_count: NonZeroU32, mode: ShipmentMode) -> Self {
        Self {
            pallet_count,
            mode,
            industry: None,
            requirements: Requirements::default(),
        }
    }

    /// Set the industry tag. Blank tags are treated as absent.
    #[must_use]
    pub fn with_industry(mut self, industry: impl AsRef<str>) -> Self {
        let industry = normalize_industry(industry.as_ref());

        self.industry = (!industry.is_empty()).then_some(industry);
        self
    }

    /// Set the requirement flags.
    #[must_use]
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Requested pallet count.
    pub fn pallet_count(&self) -> u32 {
        self.pallet_count.get()
    }

    /// Shipment mode. Recorded on the request; pricing is the same for every mode.
    pub fn mode(&self) -> ShipmentMode {
        self.mode
    }

    /// Normalised industry tag, if one was supplied.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Requirement flags.
    pub fn requirements(&self) -> Requirements {
        self.requirements
    }
}
