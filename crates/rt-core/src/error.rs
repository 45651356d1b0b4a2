//! Controller error type.
//!
//! Every failure here is structural: a line whose geometry cannot support a
//! terminus decision, or a malformed line description.  "No decision this
//! tick" is never an error.

use thiserror::Error;

use crate::{Direction, SlotIndex};

/// The error type shared by all `rt-*` crates.
#[derive(Debug, Error)]
pub enum RtError {
    #[error("line needs at least 2 stations in direction {dir}, found {found}")]
    TooFewStations { dir: Direction, found: usize },

    #[error("station count for direction {dir} is {got}, expected {expected}")]
    StationCountMismatch {
        dir:      Direction,
        expected: usize,
        got:      usize,
    },

    #[error("terminus circuits for direction {0} are not configured")]
    MissingTerminus(Direction),

    #[error("{slot} is out of range for direction {dir} ({len} slots)")]
    SlotOutOfRange {
        dir:  Direction,
        slot: SlotIndex,
        len:  usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rt-*` crates.
pub type RtResult<T> = Result<T, RtError>;
