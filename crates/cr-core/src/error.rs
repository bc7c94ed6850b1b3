//! Core error type.
//!
//! `cr-network` wraps `CoreError` as its `#[from]` `Config` variant.

use thiserror::Error;

use crate::TimeOfDay;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("unknown time of day {0:?} (expected morning, afternoon, evening or night)")]
    UnknownTimeOfDay(String),

    #[error("unknown use case {0:?}")]
    UnknownUseCase(String),

    #[error("time table has no weight for {0}")]
    MissingTimeSlot(TimeOfDay),

    #[error("time table lists {0} more than once")]
    DuplicateTimeSlot(TimeOfDay),

    #[error("weight {0} is negative or not finite")]
    InvalidWeight(f64),

    #[error("config field {field} = {value} must be finite and non-negative")]
    InvalidConfig { field: &'static str, value: f64 },
}

/// Shorthand result type for `cr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
