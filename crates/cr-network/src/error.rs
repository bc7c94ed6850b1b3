//! Graph-store error type.

use thiserror::Error;

use cr_core::CoreError;

/// Errors produced by `cr-network` mutators.
///
/// Node names are carried as owned strings so errors can outlive the network
/// borrow that produced them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetworkError {
    #[error("invalid edge {from} - {to}: {reason}")]
    InvalidEdge {
        from:   String,
        to:     String,
        reason: String,
    },

    #[error("no road between {from} and {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("invalid delay {delay} on {from} - {to}: must be finite and non-negative")]
    InvalidDelay {
        from:  String,
        to:    String,
        delay: f64,
    },

    #[error("node {0:?} not found in network")]
    NodeNotFound(String),

    #[error("invalid routing config: {0}")]
    Config(#[from] CoreError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

impl NetworkError {
    pub(crate) fn invalid_edge(from: &str, to: &str, reason: impl Into<String>) -> Self {
        NetworkError::InvalidEdge {
            from:   from.to_owned(),
            to:     to.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn no_such_edge(from: &str, to: &str) -> Self {
        NetworkError::NoSuchEdge { from: from.to_owned(), to: to.to_owned() }
    }
}
