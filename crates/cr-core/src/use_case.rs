//! Vehicle / traveller profile enum.
//!
//! Each profile maps to a row of multipliers in [`WeightRules`](crate::WeightRules);
//! the Weight Resolver in `cr-routing` applies them.  New profiles are added
//! here and given a rule row there.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Who is travelling.  Changes how congestion, alerts, and node kinds affect
/// edge costs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum UseCase {
    /// Plain routing, no profile multipliers.
    #[default]
    None,
    /// Emergency vehicle: congested and alerted roads get cheaper.
    Ambulance,
    /// Heavy vehicle: congested roads and residential destinations cost more.
    #[cfg_attr(feature = "serde", serde(rename = "Delivery Truck"))]
    DeliveryTruck,
    /// Bicycle: long roads cost more, roads touching a park cost less.
    Cyclist,
}

impl UseCase {
    pub const ALL: [UseCase; 4] = [
        UseCase::None,
        UseCase::Ambulance,
        UseCase::DeliveryTruck,
        UseCase::Cyclist,
    ];

    /// Human-readable label, matching the dashboard's selector.
    pub fn as_str(self) -> &'static str {
        match self {
            UseCase::None          => "None",
            UseCase::Ambulance     => "Ambulance",
            UseCase::DeliveryTruck => "Delivery Truck",
            UseCase::Cyclist       => "Cyclist",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = CoreError;

    /// Accepts the display labels case-insensitively, plus `""` for `None`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let label = s.trim();
        if label.is_empty() {
            return Ok(UseCase::None);
        }
        UseCase::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::UnknownUseCase(s.to_owned()))
    }
}
