//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The k-shortest-paths enumerator calls single searches through the
//! [`Router`] trait, so an application can swap in A* or a contraction
//! hierarchy without touching [`crate::yen`].
//!
//! # Exclusions
//!
//! Constrained searches receive an explicit [`Exclusions`] set instead of a
//! temporarily edited graph.  The network is only ever borrowed immutably,
//! so there is nothing to restore when a search returns.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use cr_core::{ArcId, EdgeId, NodeId};
use cr_network::RoadNetwork;

use crate::resolver::{QueryParams, arc_cost};

// ── PathResult ────────────────────────────────────────────────────────────────

/// The result of one search: total effective cost and the node sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Minutes; `f64::INFINITY` when the target is unreachable.
    pub distance: f64,
    /// Source first, target last; empty when unreachable.
    pub nodes: Vec<NodeId>,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self { distance: f64::INFINITY, nodes: Vec::new() }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }
}

// ── Exclusions ────────────────────────────────────────────────────────────────

/// Edges and nodes a search must not use.
///
/// Banning an edge bans both of its arcs.  A banned node is never entered,
/// but a search may still *start* from one.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    edges: FxHashSet<EdgeId>,
    nodes: FxHashSet<NodeId>,
}

impl Exclusions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ban_edge(&mut self, edge: EdgeId) {
        self.edges.insert(edge);
    }

    pub fn ban_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    #[inline]
    pub fn blocks(&self, network: &RoadNetwork, arc: ArcId) -> bool {
        self.edges.contains(&arc.edge()) || self.nodes.contains(&network.arc_to(arc))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-pair shortest-path search.
///
/// Implementations must be `Send + Sync` so batch queries can share them
/// across Rayon workers.
pub trait Router: Send + Sync {
    /// Cheapest path from `from` to `to` that avoids `excluded`.
    ///
    /// `from == to` yields distance 0 and the one-node path `[from]`.
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        params: &QueryParams,
        excluded: &Exclusions,
    ) -> PathResult;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR road graph using the Weight Resolver's
/// effective costs.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        params: &QueryParams,
        excluded: &Exclusions,
    ) -> PathResult {
        dijkstra(network, from, to, params, excluded)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier entry.  Ordered so `BinaryHeap` pops the lowest cost first, and
/// the lowest `NodeId` among equal costs.
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(
    network: &RoadNetwork,
    from: NodeId,
    to: NodeId,
    params: &QueryParams,
    excluded: &Exclusions,
) -> PathResult {
    if from == to {
        return PathResult { distance: 0.0, nodes: vec![from] };
    }

    let n = network.node_count();
    let mut dist     = vec![f64::INFINITY; n];
    // prev_arc[v] = arc that reached v; ArcId::INVALID for unreached nodes.
    let mut prev_arc = vec![ArcId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node: from });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        if node == to {
            return reconstruct(network, &prev_arc, to, cost);
        }

        for arc in network.out_arcs(node) {
            if excluded.blocks(network, arc) {
                continue;
            }
            let next = network.arc_to(arc);
            let new_cost = cost + arc_cost(network, arc, params);

            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev_arc[next.index()] = arc;
                heap.push(State { cost: new_cost, node: next });
            }
        }
    }

    PathResult::unreachable()
}

fn reconstruct(network: &RoadNetwork, prev_arc: &[ArcId], to: NodeId, distance: f64) -> PathResult {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let arc = prev_arc[cur.index()];
        if arc == ArcId::INVALID {
            break;
        }
        cur = network.arc_from(arc);
        nodes.push(cur);
    }
    nodes.reverse();
    PathResult { distance, nodes }
}
