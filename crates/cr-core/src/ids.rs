//! Strongly typed, zero-cost identifier wrappers.
//!
//! Node names are interned into dense `NodeId`s by the network builder so the
//! search loops can index plain `Vec`s.  Every undirected `EdgeId` owns two
//! directed `ArcId`s: `2e` runs in the orientation the edge was added in,
//! `2e + 1` runs the other way.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an intersection in the road network.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an undirected road segment.
    pub struct EdgeId(u32);
}

typed_id! {
    /// One traversal direction of an undirected road segment.
    pub struct ArcId(u32);
}

impl EdgeId {
    /// The arc running in the orientation the edge was added in.
    #[inline]
    pub fn forward(self) -> ArcId {
        ArcId(self.0 * 2)
    }

    /// The arc running against the orientation the edge was added in.
    #[inline]
    pub fn backward(self) -> ArcId {
        ArcId(self.0 * 2 + 1)
    }
}

impl ArcId {
    /// The undirected edge this arc belongs to.
    #[inline]
    pub fn edge(self) -> EdgeId {
        EdgeId(self.0 / 2)
    }

    /// The same edge traversed the other way.
    #[inline]
    pub fn reverse(self) -> ArcId {
        ArcId(self.0 ^ 1)
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self.0 & 1 == 0
    }
}
