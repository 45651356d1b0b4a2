//! Traversal direction along a line.

/// One of the two traversal senses of a line.  Each direction has its own
/// station ordering, slot list and terminus state.
///
/// `Forward` is the line's *primary* direction (index 0).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Both directions, primary first.
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Reverse];

    /// `0` for `Forward`, `1` for `Reverse`; indexes per-direction arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => 1,
        }
    }

    /// Short label used by the CSV line format (`fwd` / `rev`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "fwd",
            Direction::Reverse => "rev",
        }
    }
}

impl From<bool> for Direction {
    /// Firmware convention: `false` is the primary direction.
    fn from(reverse: bool) -> Self {
        if reverse { Direction::Reverse } else { Direction::Forward }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
