//! Weight Resolver: the effective cost of traversing one arc.
//!
//! # Resolution order
//!
//! ```text
//! w = base
//! if time given and the edge has a table:  w = table[time]      (replace)
//! w *= use-case multipliers                                      (see WeightRules)
//! w += reported delay                                            (last)
//! ```
//!
//! [`effective_weight`] is a pure function of an [`ArcState`] snapshot, so
//! the rule table can be tested without building a network or running a
//! search.  [`arc_cost`] is the thin adapter the searches call.

use tracing::warn;

use cr_core::{ArcId, NodeId, TimeOfDay, TimeWeights, UseCase, WeightRules};
use cr_network::{NodeKind, RoadNetwork};

// ── Query parameters ──────────────────────────────────────────────────────────

/// Per-query cost parameters shared by every arc lookup in a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryParams {
    pub time_of_day: Option<TimeOfDay>,
    pub use_case:    UseCase,
}

impl QueryParams {
    pub fn new(time_of_day: Option<TimeOfDay>, use_case: UseCase) -> Self {
        Self { time_of_day, use_case }
    }

    pub fn at(mut self, time: TimeOfDay) -> Self {
        self.time_of_day = Some(time);
        self
    }

    pub fn for_use_case(mut self, use_case: UseCase) -> Self {
        self.use_case = use_case;
        self
    }
}

// ── Arc snapshot ──────────────────────────────────────────────────────────────

/// Everything the resolver needs to know about one arc.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcState {
    pub base:         f64,
    pub time_weights: Option<TimeWeights>,
    pub congested:    bool,
    pub alerted:      bool,
    pub report:       Option<f64>,
    pub from_kind:    NodeKind,
    pub to_kind:      NodeKind,
}

impl ArcState {
    /// A bare arc with no overlays between two general nodes.
    pub fn plain(base: f64) -> Self {
        Self {
            base,
            time_weights: None,
            congested:    false,
            alerted:      false,
            report:       None,
            from_kind:    NodeKind::General,
            to_kind:      NodeKind::General,
        }
    }

    /// Snapshot `arc` from the network's topology and overlays.
    pub fn of(network: &RoadNetwork, arc: ArcId) -> Self {
        Self {
            base:         network.base_weight(arc),
            time_weights: network.time_weights(arc).copied(),
            congested:    network.is_congested(arc),
            alerted:      network.is_alerted(arc),
            report:       network.report(arc),
            from_kind:    network.node_kind(network.arc_from(arc)),
            to_kind:      network.node_kind(network.arc_to(arc)),
        }
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Effective traversal cost of an arc, in minutes.  Never negative or NaN.
pub fn effective_weight(arc: &ArcState, params: &QueryParams, rules: &WeightRules) -> f64 {
    let mut w = arc.base;

    if let (Some(time), Some(table)) = (params.time_of_day, arc.time_weights.as_ref()) {
        w = table.get(time);
    }

    w *= use_case_multiplier(arc, params.use_case, rules);

    if let Some(delay) = arc.report {
        w += delay;
    }

    // Also catches NaN, which a validated config cannot produce.
    if !(w >= 0.0) {
        warn!(weight = w, "negative or NaN effective weight clamped to zero");
        w = 0.0;
    }
    w
}

/// Product of the multipliers `use_case` applies to `arc`.
///
/// Cyclists are judged on the base weight even when a time table replaced it.
pub fn use_case_multiplier(arc: &ArcState, use_case: UseCase, rules: &WeightRules) -> f64 {
    let mut m = 1.0;
    match use_case {
        UseCase::Ambulance => {
            if arc.congested {
                m *= rules.ambulance_congestion;
            }
            if arc.alerted {
                m *= rules.ambulance_alert;
            }
        }
        UseCase::DeliveryTruck => {
            if arc.congested {
                m *= rules.truck_congestion;
            }
            if arc.to_kind == NodeKind::Residential {
                m *= rules.truck_residential;
            }
        }
        UseCase::Cyclist => {
            if arc.base > rules.cyclist_long_edge_minutes {
                m *= rules.cyclist_long_edge;
            }
            if arc.from_kind == NodeKind::Recreation || arc.to_kind == NodeKind::Recreation {
                m *= rules.cyclist_recreation;
            }
        }
        _ => {}
    }
    m
}

/// Effective cost of `arc` in `network` under `params`.
#[inline]
pub fn arc_cost(network: &RoadNetwork, arc: ArcId, params: &QueryParams) -> f64 {
    effective_weight(&ArcState::of(network, arc), params, &network.config().rules)
}

/// Sum of effective costs along `nodes`, edge by edge.
///
/// Returns `None` if two consecutive nodes are not adjacent.  A single-node
/// path costs zero.
pub fn path_cost(network: &RoadNetwork, nodes: &[NodeId], params: &QueryParams) -> Option<f64> {
    let mut total = 0.0;
    for pair in nodes.windows(2) {
        let arc = network.find_arc(pair[0], pair[1])?;
        total += arc_cost(network, arc, params);
    }
    Some(total)
}
