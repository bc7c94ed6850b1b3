//! Time-of-day model.
//!
//! # Design
//!
//! A query may name one of four coarse periods of the day.  Edges that have a
//! [`TimeWeights`] table resolve to the table entry for that period *instead
//! of* their base weight; edges without a table keep the base weight.
//!
//! The table is a fixed array indexed by [`TimeOfDay::index`], so a complete
//! table is guaranteed by construction and lookups cannot miss.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Coarse period of the day used to pick a time-dependent edge weight.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Every period, in table order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Position of this period in a [`TimeWeights`] table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase label, as shown in the dashboard's time selector.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning   => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening   => "evening",
            TimeOfDay::Night     => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> CoreResult<Self> {
        let label = s.trim();
        TimeOfDay::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::UnknownTimeOfDay(s.to_owned()))
    }
}

// ── TimeWeights ───────────────────────────────────────────────────────────────

/// Replacement edge weights, one per [`TimeOfDay`].
///
/// Every entry is finite and non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWeights([f64; 4]);

impl TimeWeights {
    /// Build a table from explicit per-period weights.
    pub fn new(morning: f64, afternoon: f64, evening: f64, night: f64) -> CoreResult<Self> {
        let weights = [morning, afternoon, evening, night];
        for w in weights {
            check_weight(w)?;
        }
        Ok(Self(weights))
    }

    /// Build a table by evaluating `f` once per period.
    ///
    /// The sample city derives its tables as `base * factor(period)`.
    pub fn from_fn(mut f: impl FnMut(TimeOfDay) -> f64) -> CoreResult<Self> {
        let mut weights = [0.0; 4];
        for t in TimeOfDay::ALL {
            let w = f(t);
            check_weight(w)?;
            weights[t.index()] = w;
        }
        Ok(Self(weights))
    }

    /// Build a table from `(period, weight)` pairs.
    ///
    /// The pairs must name every period exactly once.
    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (TimeOfDay, f64)>,
    {
        let mut slots: [Option<f64>; 4] = [None; 4];
        for (t, w) in pairs {
            check_weight(w)?;
            let slot = &mut slots[t.index()];
            if slot.is_some() {
                return Err(CoreError::DuplicateTimeSlot(t));
            }
            *slot = Some(w);
        }

        let mut weights = [0.0; 4];
        for t in TimeOfDay::ALL {
            weights[t.index()] = slots[t.index()].ok_or(CoreError::MissingTimeSlot(t))?;
        }
        Ok(Self(weights))
    }

    #[inline]
    pub fn get(&self, time: TimeOfDay) -> f64 {
        self.0[time.index()]
    }

    /// `(period, weight)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeOfDay, f64)> + '_ {
        TimeOfDay::ALL.into_iter().map(|t| (t, self.0[t.index()]))
    }
}

fn check_weight(w: f64) -> CoreResult<()> {
    if w.is_finite() && w >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidWeight(w))
    }
}
