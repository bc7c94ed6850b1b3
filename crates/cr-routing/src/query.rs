//! Name-level query entry points used by the dashboard.
//!
//! `k` absent or `1` runs a single Dijkstra search and wraps the result in a
//! one-element list; an unreachable target then comes back as one route with
//! infinite distance and an empty path.  `k >= 2` runs Yen's enumerator,
//! which returns an empty list for an unreachable target.

use tracing::debug;

use cr_network::RoadNetwork;

use crate::resolver::QueryParams;
use crate::router::{DijkstraRouter, Exclusions, PathResult, Router};
use crate::yen::k_shortest_paths;
use crate::{RoutingError, RoutingResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A route as the dashboard displays it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Total effective travel time in minutes; infinite if unreachable.
    pub distance: f64,
    /// Node names from start to end; empty if unreachable.
    pub path: Vec<String>,
}

impl Route {
    fn from_result(network: &RoadNetwork, result: PathResult) -> Self {
        Self { distance: result.distance, path: network.names_of(&result.nodes) }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

// ── Single query ──────────────────────────────────────────────────────────────

/// Routes from `start` to `end`, cheapest first.
///
/// # Errors
///
/// - [`RoutingError::InvalidK`] if `k == Some(0)`.
/// - [`RoutingError::Network`] wrapping `NodeNotFound` for an unknown name.
pub fn query(
    network: &RoadNetwork,
    start: &str,
    end: &str,
    params: &QueryParams,
    k: Option<usize>,
) -> RoutingResult<Vec<Route>> {
    let k = k.unwrap_or(1);
    if k == 0 {
        return Err(RoutingError::InvalidK);
    }
    let from = network.require_node(start)?;
    let to   = network.require_node(end)?;

    let results = if k == 1 {
        vec![DijkstraRouter.shortest_path(network, from, to, params, &Exclusions::none())]
    } else {
        k_shortest_paths(&DijkstraRouter, network, from, to, k, params)
    };

    debug!(
        start,
        end,
        k,
        time_of_day = ?params.time_of_day,
        use_case = %params.use_case,
        found = results.iter().filter(|r| r.is_reachable()).count(),
        "route query"
    );

    Ok(results.into_iter().map(|r| Route::from_result(network, r)).collect())
}

// ── Batch queries ─────────────────────────────────────────────────────────────

/// One entry of a [`query_many`] batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    pub start:  String,
    pub end:    String,
    pub params: QueryParams,
    pub k:      Option<usize>,
}

/// Run independent queries against one network; results keep request order.
///
/// With the `parallel` feature the requests run on Rayon's pool.  Queries
/// only read the network, so no coordination is needed between them.
pub fn query_many(network: &RoadNetwork, requests: &[RouteRequest]) -> Vec<RoutingResult<Vec<Route>>> {
    let run = |r: &RouteRequest| query(network, &r.start, &r.end, &r.params, r.k);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests.par_iter().map(run).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(run).collect()
    }
}
