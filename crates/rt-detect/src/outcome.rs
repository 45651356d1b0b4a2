//! Result of one detector invocation.

/// What a single [`EndOfLineDetector::detect`](crate::EndOfLineDetector::detect)
/// call decided.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    /// Terminus not relevant this tick, or a train is still en route.
    NotYetArrived,
    /// A train was already dwelling; its counter advanced (and may have
    /// wrapped, evicting the terminal slot).
    CycleAdvanced,
    /// A train reached the terminus this tick; its dwell has begun.
    ArrivalConfirmed,
}

impl Outcome {
    #[inline]
    pub fn is_arrival(self) -> bool {
        matches!(self, Outcome::ArrivalConfirmed)
    }
}
