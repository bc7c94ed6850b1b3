//! `cr-routing` — route queries over a [`cr_network::RoadNetwork`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`resolver`] | `QueryParams`, `ArcState`, `effective_weight`, `path_cost`  |
//! | [`router`]   | `Router` trait, `PathResult`, `Exclusions`, `DijkstraRouter` |
//! | [`yen`]      | `k_shortest_paths` (Yen's algorithm)                        |
//! | [`query`]    | `query`, `query_many`, `Route`, `RouteRequest`              |
//! | [`summary`]  | `RouteSummary`, `Segment`                                   |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                          |
//!
//! # Cost units
//!
//! All costs are travel minutes as `f64`.  An unreachable target is reported
//! as distance `f64::INFINITY` with an empty node list, not as an error.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `query_many` fans requests out over Rayon.               |
//! | `serde`    | Derives `Serialize`/`Deserialize` on result types.       |

pub mod error;
pub mod query;
pub mod resolver;
pub mod router;
pub mod summary;
pub mod yen;


pub use error::{RoutingError, RoutingResult};
pub use query::{Route, RouteRequest, query, query_many};
pub use resolver::{ArcState, QueryParams, arc_cost, effective_weight, path_cost, use_case_multiplier};
pub use router::{DijkstraRouter, Exclusions, PathResult, Router};
pub use summary::{RouteSummary, Segment};
pub use yen::k_shortest_paths;
