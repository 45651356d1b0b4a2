//! The line-topology provider interface.
//!
//! # Pluggability
//!
//! The end-of-line detector in `rt-detect` talks to a line only through
//! [`LineTopology`], so a firmware port can back it with whatever storage the
//! controller already has.  [`TrainLine`](crate::TrainLine) is the in-crate
//! implementation.

use rt_core::{CircuitId, Direction, RtResult, SlotIndex, StationIndex};

use crate::TrainSlot;

/// Read and write access to one line's geometry and terminus state.
///
/// Lookups that can miss return `Option` instead of reading past the end of
/// a table; the caller decides whether a miss is a structural error.
pub trait LineTopology {
    /// Number of train slots tracked in `dir`.
    fn len(&self, dir: Direction) -> usize;

    /// `true` when no train is tracked in `dir`.
    fn is_empty(&self, dir: Direction) -> bool {
        self.len(dir) == 0
    }

    /// Station the train in `slot` is heading for (or standing at).
    fn at(&self, slot: SlotIndex, dir: Direction) -> Option<StationIndex>;

    /// Physical station count, shared by both directions.
    fn total_num_stations(&self) -> usize;

    /// Number of stations listed for `dir`.  Equal to
    /// [`total_num_stations`](Self::total_num_stations) on a well-formed line.
    fn station_count(&self, dir: Direction) -> usize;

    /// Circuit marking the position of `station` in `dir`.
    fn station_circuit(&self, station: StationIndex, dir: Direction) -> Option<CircuitId>;

    /// Dwell counter for `dir`: 0 when no train is dwelling at the terminus.
    fn cycles_at_end(&self, dir: Direction) -> u8;

    /// Last circuit of the terminus approach zone in `dir`.
    fn last_cid(&self, dir: Direction) -> Option<CircuitId>;

    /// Circuit on the opposite-direction track at the same physical terminus.
    fn opp_cid(&self, dir: Direction) -> Option<CircuitId>;

    /// Advance the dwell counter for `dir` by one, wrapping at the line's
    /// dwell cap.  Returns the new value; `0` means the counter wrapped.
    fn increment_cycles_at_end(&mut self, dir: Direction) -> u8;

    /// Evict the terminal (leading) slot of `dir`.
    fn remove(&mut self, dir: Direction) -> Option<TrainSlot>;

    /// Record that the train in `slot` has arrived at its station.
    fn arrived(&mut self, slot: SlotIndex, dir: Direction) -> RtResult<()>;

    /// Index of the leading slot in `dir`, if any train is tracked.
    fn leading_slot(&self, dir: Direction) -> Option<SlotIndex> {
        self.len(dir)
            .checked_sub(1)
            .and_then(|i| SlotIndex::try_from(i).ok())
    }
}
