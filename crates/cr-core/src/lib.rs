//! `cr-core` — foundational types for the `cityroute` routing engine.
//!
//! This crate is a dependency of every other `cr-*` crate.  It has no `cr-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`, `ArcId`                           |
//! | [`geo`]         | `GeoPoint`, haversine distance, centroid              |
//! | [`time`]        | `TimeOfDay`, `TimeWeights`                            |
//! | [`use_case`]    | `UseCase` enum                                        |
//! | [`config`]      | `RoutingConfig`, `WeightRules`                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;
pub mod use_case;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RoutingConfig, WeightRules};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{ArcId, EdgeId, NodeId};
pub use time::{TimeOfDay, TimeWeights};
pub use use_case::UseCase;
