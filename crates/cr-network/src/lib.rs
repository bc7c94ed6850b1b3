//! `cr-network` — the Graph Store: road topology plus traffic overlays.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`, `NodeKind` |
//! | [`overlays`] | congestion zones, user reports, traffic alerts               |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                           |
//!
//! Topology and time-of-day tables are fixed once [`RoadNetworkBuilder::build`]
//! runs.  The traffic overlays stay mutable for the lifetime of the network;
//! every mutator validates against the topology before touching state.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod network;
pub mod overlays;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::{NodeKind, RoadNetwork, RoadNetworkBuilder};
