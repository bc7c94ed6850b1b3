//! Routing error type.
//!
//! "No path" is deliberately absent: an unreachable target is an ordinary
//! result (`PathResult::is_reachable() == false`) that callers branch on.

use thiserror::Error;

use cr_network::NetworkError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
    #[error("k must be at least 1")]
    InvalidK,

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
