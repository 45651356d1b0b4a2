//! Strongly typed, zero-cost identifier wrappers.
//!
//! Track-circuit sensors report a `u16` zone number, so every identifier here
//! wraps a `u16`.  All IDs are `Copy + Ord + Hash`; circuit IDs are totally
//! ordered along a direction of travel and comparisons between them encode
//! physical ordering on the track.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// A discrete track-circuit (occupancy sensor zone).
    pub struct CircuitId(u16);
}

typed_id! {
    /// Position of a station in a direction's station ordering.
    pub struct StationIndex(u16);
}

typed_id! {
    /// Index of a line registered with a monitor.
    pub struct LineId(u16);
}

typed_id! {
    /// Position of a train record in a line's per-direction slot list.
    pub struct SlotIndex(u16);
}

impl CircuitId {
    /// The circuit `n` zones before `self`, clamped at circuit 0.
    ///
    /// Every tolerance margin is applied through this so that lines whose
    /// stations sit on low-numbered circuits never wrap around.
    #[inline]
    pub fn saturating_sub(self, n: u16) -> CircuitId {
        CircuitId(self.0.saturating_sub(n))
    }
}

impl StationIndex {
    /// The station before `self`, or `None` for station 0.
    #[inline]
    pub fn prev(self) -> Option<StationIndex> {
        self.0.checked_sub(1).map(StationIndex)
    }
}
