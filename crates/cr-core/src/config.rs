//! Routing configuration: the alert threshold and the use-case rule table.

//!
//! Defaults reproduce the city dashboard's behaviour.  Applications that
//! calibrate against real data load their own values (with the `serde`
//! feature) and hand them to `RoadNetworkBuilder::with_config`.

use crate::{CoreError, CoreResult};

/// Multipliers applied by the Weight Resolver for each [`UseCase`](crate::UseCase).
///
/// | Use case       | Condition                         | Default |
/// |----------------|-----------------------------------|---------|
/// | Ambulance      | edge in a congestion zone         | ×0.5    |
/// | Ambulance      | edge carries a traffic alert      | ×0.7    |
/// | Delivery Truck | edge in a congestion zone         | ×2.0    |
/// | Delivery Truck | destination node is residential   | ×1.3    |
/// | Cyclist        | base weight > 10                  | ×1.5    |
/// | Cyclist        | either endpoint is a recreation node | ×0.8 |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightRules {
    pub ambulance_congestion:     f64,
    pub ambulance_alert:          f64,
    pub truck_congestion:         f64,
    pub truck_residential:        f64,
    /// Base weight (minutes) above which a road counts as long for cyclists.
    pub cyclist_long_edge_minutes: f64,
    pub cyclist_long_edge:        f64,
    pub cyclist_recreation:       f64,
}

impl WeightRules {
    /// Every multiplier and the long-edge threshold must be finite and `>= 0`.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("ambulance_congestion",      self.ambulance_congestion),
            ("ambulance_alert",           self.ambulance_alert),
            ("truck_congestion",          self.truck_congestion),
            ("truck_residential",         self.truck_residential),
            ("cyclist_long_edge_minutes", self.cyclist_long_edge_minutes),
            ("cyclist_long_edge",         self.cyclist_long_edge),
            ("cyclist_recreation",        self.cyclist_recreation),
        ];
        fields.into_iter().try_for_each(|(field, value)| check(field, value))
    }
}

impl Default for WeightRules {
    fn default() -> Self {
        Self {
            ambulance_congestion:      0.5,
            ambulance_alert:           0.7,
            truck_congestion:          2.0,
            truck_residential:         1.3,
            cyclist_long_edge_minutes: 10.0,
            cyclist_long_edge:         1.5,
            cyclist_recreation:        0.8,
        }
    }
}

/// Top-level routing configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// A user report promotes its edge to a traffic alert when
    /// `base + delay > base * alert_threshold_factor`.  Default: 1.5.
    pub alert_threshold_factor: f64,

    pub rules: WeightRules,
}

impl RoutingConfig {
    /// `true` if a report of `delay` minutes on a road of `base` minutes
    /// crosses the alert threshold.
    #[inline]
    pub fn crosses_alert_threshold(&self, base: f64, delay: f64) -> bool {
        base + delay > base * self.alert_threshold_factor
    }

    /// Reject values that would let the resolver produce NaN or infinite
    /// weights.  Called by `RoadNetworkBuilder::with_config`.
    pub fn validate(&self) -> CoreResult<()> {
        check("alert_threshold_factor", self.alert_threshold_factor)?;
        self.rules.validate()
    }
}

fn check(field: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig { field, value })
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            alert_threshold_factor: 1.5,
            rules: WeightRules::default(),
        }
    }
}
