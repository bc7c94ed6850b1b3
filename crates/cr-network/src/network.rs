//! Road network representation and builder.
//!
//! # Data layout
//!
//! Each undirected road is one `EdgeId` with two directed arcs (see
//! [`cr_core::ArcId`]).  Outgoing arcs are stored in **Compressed Sparse Row**
//! form: the arcs leaving `NodeId n` occupy
//!
//! ```text
//! out_arcs[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! so Dijkstra's inner loop is a contiguous scan.  Per-edge data (endpoints,
//! base weight, time table) is indexed by `EdgeId`; per-arc overlay data
//! (reports, congestion, alerts) is indexed by `ArcId`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId` among
//! nodes that were given a coordinate.  The dashboard uses it to turn a map
//! click into an intersection.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;
use tracing::debug;

use cr_core::{ArcId, EdgeId, GeoPoint, NodeId, RoutingConfig, TimeOfDay, TimeWeights};

use crate::{NetworkError, NetworkResult};

// ── Node kind ─────────────────────────────────────────────────────────────────

/// Land-use class of an intersection, read by the use-case rules.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    #[default]
    General,
    /// Delivery trucks pay a surcharge on roads arriving here.
    Residential,
    /// Park or recreation ground; cyclists get a discount on adjacent roads.
    Recreation,
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space; good enough for picking
    /// the closest intersection within a city.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph in CSR form plus the traffic overlays.
///
/// Construct with [`RoadNetworkBuilder`].  Overlay mutators live in
/// [`crate::overlays`].
pub struct RoadNetwork {
    pub(crate) config: RoutingConfig,

    // ── Node data ─────────────────────────────────────────────────────────
    pub(crate) node_names: Vec<String>,
    pub(crate) node_index: FxHashMap<String, NodeId>,
    pub(crate) node_pos:   Vec<Option<GeoPoint>>,
    pub(crate) node_kind:  Vec<NodeKind>,

    // ── CSR arc adjacency ─────────────────────────────────────────────────
    /// Length = `node_count + 1`.
    pub(crate) node_out_start: Vec<u32>,
    pub(crate) out_arcs:       Vec<ArcId>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Endpoints in the orientation the edge was added in.
    pub(crate) edge_ends:    Vec<(NodeId, NodeId)>,
    /// Base travel time in minutes.
    pub(crate) edge_weight:  Vec<f64>,
    pub(crate) time_weights: Vec<Option<TimeWeights>>,

    // ── Overlays (indexed by ArcId) ───────────────────────────────────────
    pub(crate) reports:    Vec<Option<f64>>,
    pub(crate) congestion: Vec<bool>,
    pub(crate) alerts:     Vec<bool>,

    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_names.is_empty()
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_index.get(name).copied()
    }

    /// Like [`node_id`](Self::node_id) but fails with `NodeNotFound`.
    pub fn require_node(&self, name: &str) -> NetworkResult<NodeId> {
        self.node_id(name)
            .ok_or_else(|| NetworkError::NodeNotFound(name.to_owned()))
    }

    #[inline]
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_names[node.index()]
    }

    pub fn node_pos(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos[node.index()]
    }

    #[inline]
    pub fn node_kind(&self, node: NodeId) -> NodeKind {
        self.node_kind[node.index()]
    }

    /// All node names in `NodeId` order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.node_names.iter().map(String::as_str)
    }

    /// Map a node sequence to names.
    pub fn names_of(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes.iter().map(|&n| self.node_name(n).to_owned()).collect()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Arcs leaving `node`.  Contiguous index range, no allocation.
    #[inline]
    pub fn out_arcs(&self, node: NodeId) -> impl Iterator<Item = ArcId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        self.out_arcs[start..end].iter().copied()
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Neighbouring nodes of `node`.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_arcs(node).map(|a| self.arc_to(a))
    }

    #[inline]
    pub fn arc_from(&self, arc: ArcId) -> NodeId {
        let (a, b) = self.edge_ends[arc.edge().index()];
        if arc.is_forward() { a } else { b }
    }

    #[inline]
    pub fn arc_to(&self, arc: ArcId) -> NodeId {
        let (a, b) = self.edge_ends[arc.edge().index()];
        if arc.is_forward() { b } else { a }
    }

    /// Endpoints of `edge` in the orientation it was added in.
    pub fn edge_ends(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.edge_ends[edge.index()]
    }

    /// The arc from `from` to `to`, if the two are adjacent.  O(degree).
    pub fn find_arc(&self, from: NodeId, to: NodeId) -> Option<ArcId> {
        self.out_arcs(from).find(|&a| self.arc_to(a) == to)
    }

    /// Resolve a named pair to its arc, or `NoSuchEdge`.
    pub fn arc_between(&self, from: &str, to: &str) -> NetworkResult<ArcId> {
        self.node_id(from)
            .zip(self.node_id(to))
            .and_then(|(u, v)| self.find_arc(u, v))
            .ok_or_else(|| NetworkError::no_such_edge(from, to))
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.arc_between(from, to).is_ok()
    }

    // ── Per-arc cost inputs ───────────────────────────────────────────────

    /// Base travel time (minutes) of the edge under `arc`.
    #[inline]
    pub fn base_weight(&self, arc: ArcId) -> f64 {
        self.edge_weight[arc.edge().index()]
    }

    #[inline]
    pub fn time_weights(&self, arc: ArcId) -> Option<&TimeWeights> {
        self.time_weights[arc.edge().index()].as_ref()
    }

    #[inline]
    pub fn report(&self, arc: ArcId) -> Option<f64> {
        self.reports[arc.index()]
    }

    #[inline]
    pub fn is_congested(&self, arc: ArcId) -> bool {
        self.congestion[arc.index()]
    }

    #[inline]
    pub fn is_alerted(&self, arc: ArcId) -> bool {
        self.alerts[arc.index()]
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The nearest node that has a coordinate, or `None` if none do.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Mean position of every node with a coordinate; the map's initial view.
    pub fn center(&self) -> Option<GeoPoint> {
        GeoPoint::centroid(self.node_pos.iter().flatten().copied())
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Nodes are created on first mention, either explicitly through
/// [`add_node`](Self::add_node) or implicitly by [`add_edge`](Self::add_edge).
///
/// # Example
///
/// ```
/// use cr_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_edge("Downtown", "Market Square", 5.0).unwrap();
/// b.add_edge("Market Square", "Shopping Mall", 6.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 3);
/// assert_eq!(net.edge_count(), 2);
/// ```
pub struct RoadNetworkBuilder {
    config:     RoutingConfig,
    nodes:      Vec<RawNode>,
    node_index: FxHashMap<String, NodeId>,
    edges:      Vec<RawEdge>,
    /// Unordered node pair (smaller id first) → position in `edges`.
    edge_index: FxHashMap<(NodeId, NodeId), EdgeId>,
}

struct RawNode {
    name: String,
    pos:  Option<GeoPoint>,
    kind: NodeKind,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: f64,
    time:   Option<TimeWeights>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            config:     RoutingConfig::default(),
            nodes:      Vec::new(),
            node_index: FxHashMap::default(),
            edges:      Vec::new(),
            edge_index: FxHashMap::default(),
        }
    }

    /// Start a builder whose network uses `config`.
    ///
    /// Fails with [`NetworkError::Config`] if a multiplier, the long-edge
    /// threshold or the alert factor is negative or not finite.
    pub fn with_config(config: RoutingConfig) -> NetworkResult<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut b = Self::new();
        b.reserve(nodes, edges);
        b
    }

    /// Reserve room for `nodes` more nodes and `edges` more edges.
    pub fn reserve(&mut self, nodes: usize, edges: usize) -> &mut Self {
        self.nodes.reserve(nodes);
        self.node_index.reserve(nodes);
        self.edges.reserve(edges);
        self.edge_index.reserve(edges);
        self
    }

    /// Add `name` (or fetch it if already present) and return its `NodeId`.
    ///
    /// A `Some` position overwrites any earlier one.
    pub fn add_node(&mut self, name: &str, pos: Option<GeoPoint>) -> NodeId {
        let id = self.intern(name);
        if pos.is_some() {
            self.nodes[id.index()].pos = pos;
        }
        id
    }

    /// Tag `name` with a land-use kind, adding the node if needed.
    pub fn set_node_kind(&mut self, name: &str, kind: NodeKind) -> NodeId {
        let id = self.intern(name);
        self.nodes[id.index()].kind = kind;
        id
    }

    /// Add an undirected road of `weight` minutes between `u` and `v`.
    ///
    /// Adding a pair that already exists replaces its base weight (the graph
    /// stays simple).  Fails with `InvalidEdge` for a negative or non-finite
    /// weight and for `u == v`.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> NetworkResult<EdgeId> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(NetworkError::invalid_edge(
                u,
                v,
                format!("weight {weight} is negative or not finite"),
            ));
        }
        if u == v {
            return Err(NetworkError::invalid_edge(u, v, "self loops are not allowed"));
        }

        let a = self.intern(u);
        let b = self.intern(v);
        if let Some(&edge) = self.edge_index.get(&pair_key(a, b)) {
            debug!(u, v, weight, "replacing base weight of existing road");
            self.edges[edge.index()].weight = weight;
            return Ok(edge);
        }

        let edge = EdgeId(self.edges.len() as u32);
        self.edges.push(RawEdge { from: a, to: b, weight, time: None });
        self.edge_index.insert(pair_key(a, b), edge);
        Ok(edge)
    }

    /// Attach a time-of-day table to the road between `u` and `v`.
    ///
    /// `table` must name each [`TimeOfDay`] exactly once with a finite,
    /// non-negative weight; a complete [`TimeWeights`] can be passed as
    /// `tw.iter()`.  Both traversal directions share the table.
    pub fn set_time_weights<I>(&mut self, u: &str, v: &str, table: I) -> NetworkResult<()>
    where
        I: IntoIterator<Item = (TimeOfDay, f64)>,
    {
        let edge = self
            .nodes_of(u, v)
            .and_then(|(a, b)| self.edge_index.get(&pair_key(a, b)).copied())
            .ok_or_else(|| NetworkError::no_such_edge(u, v))?;
        let weights = TimeWeights::from_pairs(table)
            .map_err(|e| NetworkError::invalid_edge(u, v, e.to_string()))?;
        self.edges[edge.index()].time = Some(weights);
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`] with empty overlays.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.edges.len();

        // Every edge contributes one arc to each endpoint's row.
        let mut arcs: Vec<(NodeId, ArcId)> = Vec::with_capacity(edge_count * 2);
        for (i, e) in self.edges.iter().enumerate() {
            let edge = EdgeId(i as u32);
            arcs.push((e.from, edge.forward()));
            arcs.push((e.to, edge.backward()));
        }
        arcs.sort_unstable_by_key(|&(from, arc)| (from, arc));

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &arcs {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count * 2);
        let out_arcs = arcs.into_iter().map(|(_, arc)| arc).collect();

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| {
                n.pos.map(|p| NodeEntry { point: [p.lat, p.lon], id: NodeId(i as u32) })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let mut node_names = Vec::with_capacity(node_count);
        let mut node_pos   = Vec::with_capacity(node_count);
        let mut node_kind  = Vec::with_capacity(node_count);
        for n in self.nodes {
            node_names.push(n.name);
            node_pos.push(n.pos);
            node_kind.push(n.kind);
        }

        let mut edge_ends    = Vec::with_capacity(edge_count);
        let mut edge_weight  = Vec::with_capacity(edge_count);
        let mut time_weights = Vec::with_capacity(edge_count);
        for e in self.edges {
            edge_ends.push((e.from, e.to));
            edge_weight.push(e.weight);
            time_weights.push(e.time);
        }

        debug!(nodes = node_count, edges = edge_count, "road network built");

        RoadNetwork {
            config: self.config,
            node_names,
            node_index: self.node_index,
            node_pos,
            node_kind,
            node_out_start,
            out_arcs,
            edge_ends,
            edge_weight,
            time_weights,
            reports:    vec![None; edge_count * 2],
            congestion: vec![false; edge_count * 2],
            alerts:     vec![false; edge_count * 2],
            spatial_idx,
        }
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(RawNode { name: name.to_owned(), pos: None, kind: NodeKind::General });
        self.node_index.insert(name.to_owned(), id);
        id
    }

    fn nodes_of(&self, u: &str, v: &str) -> Option<(NodeId, NodeId)> {
        self.node_index.get(u).copied().zip(self.node_index.get(v).copied())
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
