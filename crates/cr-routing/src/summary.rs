//! Turn-by-turn route summary for display.
//!
//! Segment times are full effective weights, so they add up to the route's
//! distance.

use std::fmt;

use cr_core::{TimeOfDay, UseCase};
use cr_network::RoadNetwork;

use crate::query::Route;
use crate::resolver::{QueryParams, arc_cost};
use crate::RoutingResult;

/// One road of a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from:    String,
    pub to:      String,
    /// Full effective weight of the road, use-case multipliers included.
    /// The dashboard's text summary applied only the time table and the
    /// report; with multipliers the segments add up to the route distance.
    pub minutes: f64,
    /// The road carries a traffic alert in this direction.
    pub alert:   bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// First and last node names; `None` for an unreachable route.
    pub endpoints:     Option<(String, String)>,
    pub segments:      Vec<Segment>,
    pub total_minutes: f64,
    pub use_case:      UseCase,
    pub time_of_day:   Option<TimeOfDay>,
}

impl RouteSummary {
    /// Summarise `route` under the parameters it was queried with.
    ///
    /// Fails with `NoSuchEdge` if two consecutive names are not a road.
    pub fn new(network: &RoadNetwork, route: &Route, params: &QueryParams) -> RoutingResult<Self> {
        let mut segments = Vec::with_capacity(route.path.len().saturating_sub(1));
        let mut total = 0.0;
        for pair in route.path.windows(2) {
            let arc = network.arc_between(&pair[0], &pair[1])?;
            let minutes = arc_cost(network, arc, params);
            total += minutes;
            segments.push(Segment {
                from: pair[0].clone(),
                to: pair[1].clone(),
                minutes,
                alert: network.is_alerted(arc),
            });
        }
        let endpoints = route.path.first().cloned().zip(route.path.last().cloned());
        Ok(Self {
            endpoints,
            segments,
            total_minutes: total,
            use_case: params.use_case,
            time_of_day: params.time_of_day,
        })
    }

    pub fn alerts(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.alert)
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((start, end)) = &self.endpoints else {
            return f.write_str("No path found");
        };

        writeln!(f, "Route from {start} to {end}:")?;
        writeln!(f)?;
        for s in &self.segments {
            writeln!(f, "{} → {}: {:.1} minutes", s.from, s.to, s.minutes)?;
        }
        write!(f, "\nTotal Travel Time: {:.1} minutes", self.total_minutes)?;

        if self.use_case != UseCase::None {
            write!(f, "\nUse Case: {}", self.use_case)?;
        }
        if let Some(t) = self.time_of_day {
            write!(f, "\nTime of Day: {}", capitalize(t.as_str()))?;
        }

        let alerts: Vec<String> = self.alerts().map(|s| format!("{}-{}", s.from, s.to)).collect();
        if !alerts.is_empty() {
            write!(f, "\n\nTraffic Alerts on: {}", alerts.join(", "))?;
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
