//! Yen's k-shortest loopless paths.
//!
//! # Algorithm
//!
//! ```text
//! A = [shortest(source, target)]          accepted paths, ascending cost
//! B = {}                                  candidate pool
//! while |A| < k:
//!   P = last(A)
//!   for each spur index j in P (all but the target):
//!     root  = P[..=j]
//!     ban the edge P'[j] → P'[j+1] of every accepted P' with P'[..=j] == root
//!     ban every root node before P[j]
//!     spur  = shortest(P[j], target) under those bans
//!     cand  = root[..j] ++ spur, cost recomputed edge by edge
//!     add cand to B unless already seen
//!   move the cheapest path in B to A, or stop if B is empty
//! ```
//!
//! Banning the root's interior nodes keeps every candidate loopless.  Bans
//! are handed to the [`Router`] as an [`Exclusions`] value, so the network is
//! never modified.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use tracing::debug;

use cr_core::NodeId;
use cr_network::RoadNetwork;

use crate::resolver::{QueryParams, path_cost};
use crate::router::{Exclusions, PathResult, Router};

/// Pool entry; `BinaryHeap` pops the cheapest, then the lexicographically
/// smallest node sequence.
#[derive(PartialEq)]
struct Candidate(PathResult);

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .distance
            .total_cmp(&self.0.distance)
            .then_with(|| other.0.nodes.cmp(&self.0.nodes))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Up to `k` distinct loopless paths from `from` to `to`, cheapest first.
///
/// Returns fewer than `k` when the graph has fewer simple paths, and an
/// empty list when `to` is unreachable or `k == 0`.
pub fn k_shortest_paths<R: Router + ?Sized>(
    router: &R,
    network: &RoadNetwork,
    from: NodeId,
    to: NodeId,
    k: usize,
    params: &QueryParams,
) -> Vec<PathResult> {
    if k == 0 {
        return Vec::new();
    }

    let first = router.shortest_path(network, from, to, params, &Exclusions::none());
    if !first.is_reachable() {
        return Vec::new();
    }

    let mut seen: FxHashSet<Vec<NodeId>> = FxHashSet::default();
    seen.insert(first.nodes.clone());
    let mut accepted = vec![first];
    let mut pool: BinaryHeap<Candidate> = BinaryHeap::new();

    while accepted.len() < k {
        let last = accepted[accepted.len() - 1].nodes.clone();

        for j in 0..last.len() - 1 {
            let spur = last[j];
            let root = &last[..=j];

            let mut excluded = Exclusions::none();
            for p in &accepted {
                if p.nodes.len() > j + 1 && p.nodes[..=j] == *root {
                    if let Some(arc) = network.find_arc(p.nodes[j], p.nodes[j + 1]) {
                        excluded.ban_edge(arc.edge());
                    }
                }
            }
            for &n in &root[..j] {
                excluded.ban_node(n);
            }

            let spur_path = router.shortest_path(network, spur, to, params, &excluded);
            if !spur_path.is_reachable() {
                continue;
            }

            let mut nodes = root[..j].to_vec();
            nodes.extend(spur_path.nodes);
            if seen.contains(&nodes) {
                continue;
            }
            let Some(distance) = path_cost(network, &nodes, params) else {
                continue;
            };
            seen.insert(nodes.clone());
            pool.push(Candidate(PathResult { distance, nodes }));
        }

        match pool.pop() {
            Some(Candidate(best)) => {
                debug!(rank = accepted.len() + 1, distance = best.distance, "alternative accepted");
                accepted.push(best);
            }
            None => break,
        }
    }

    accepted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    accepted.truncate(k);
    accepted
}
