//! The concrete [`TrainLine`] provider.

use std::collections::VecDeque;

use rt_core::{CircuitId, Direction, RtError, RtResult, SlotIndex, StationIndex};
use tracing::debug;

use crate::LineTopology;

/// One station in a direction's ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub name: String,
    /// Circuit marking the station's position; increases along the
    /// direction of travel.
    pub circuit: CircuitId,
}

/// One tracked train on a direction of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainSlot {
    /// Station the train is heading for, or standing at once `arrived`.
    pub station: StationIndex,
    pub arrived: bool,
}

impl TrainSlot {
    /// A freshly dispatched train heading for the first station.
    #[inline]
    pub fn dispatched() -> Self {
        Self { station: StationIndex(0), arrived: false }
    }
}

/// A line with per-direction station tables, terminus circuits, train slots
/// and dwell counters.
///
/// Create via [`TrainLineBuilder`](crate::TrainLineBuilder); the builder
/// guarantees at least two stations in each direction and equal station
/// counts.  Terminus circuits may be left unconfigured; the detector rejects
/// such a line before making any decision.
#[derive(Debug, Clone)]
pub struct TrainLine {
    pub(crate) stations:      [Vec<Station>; 2],
    pub(crate) last_cid:      [Option<CircuitId>; 2],
    pub(crate) opp_cid:       [Option<CircuitId>; 2],
    pub(crate) slots:         [VecDeque<TrainSlot>; 2],
    pub(crate) cycles_at_end: [u8; 2],
    pub(crate) dwell_cycles:  u8,
}

impl TrainLine {
    /// The dwell cap: the counter wraps to 0 after reaching `dwell_cycles - 1`.
    #[inline]
    pub fn dwell_cycles(&self) -> u8 {
        self.dwell_cycles
    }

    /// Station `idx` in `dir`'s ordering.
    pub fn station(&self, idx: StationIndex, dir: Direction) -> Option<&Station> {
        self.stations[dir.index()].get(idx.index())
    }

    /// All stations of `dir`, first to terminus.
    pub fn stations(&self, dir: Direction) -> &[Station] {
        &self.stations[dir.index()]
    }

    /// Tracked trains in `dir`, newest first.
    pub fn slots(&self, dir: Direction) -> impl Iterator<Item = &TrainSlot> + '_ {
        self.slots[dir.index()].iter()
    }

    /// Start tracking a new train in `dir`, heading for station 0.
    ///
    /// The new train becomes slot 0; every existing slot index shifts up by
    /// one, so the leading train stays at `len - 1`.
    pub fn dispatch(&mut self, dir: Direction) -> SlotIndex {
        self.slots[dir.index()].push_front(TrainSlot::dispatched());
        debug!(%dir, slots = self.slots[dir.index()].len(), "train dispatched");
        SlotIndex(0)
    }

    /// Move the train in `slot` on to its next station.
    ///
    /// Clamped at the terminus; clears the `arrived` flag.  Returns the new
    /// target station.
    pub fn advance(&mut self, slot: SlotIndex, dir: Direction) -> RtResult<StationIndex> {
        let last    = StationIndex(self.total_num_stations().saturating_sub(1) as u16);
        let entry   = self.slot_mut(slot, dir)?;
        entry.station = StationIndex(entry.station.0.saturating_add(1)).min(last);
        entry.arrived = false;
        Ok(entry.station)
    }

    fn slot_mut(&mut self, slot: SlotIndex, dir: Direction) -> RtResult<&mut TrainSlot> {
        let slots = &mut self.slots[dir.index()];
        let len   = slots.len();
        slots
            .get_mut(slot.index())
            .ok_or(RtError::SlotOutOfRange { dir, slot, len })
    }
}

impl LineTopology for TrainLine {
    #[inline]
    fn len(&self, dir: Direction) -> usize {
        self.slots[dir.index()].len()
    }

    #[inline]
    fn at(&self, slot: SlotIndex, dir: Direction) -> Option<StationIndex> {
        self.slots[dir.index()].get(slot.index()).map(|s| s.station)
    }

    #[inline]
    fn total_num_stations(&self) -> usize {
        self.stations[Direction::Forward.index()].len()
    }

    #[inline]
    fn station_count(&self, dir: Direction) -> usize {
        self.stations[dir.index()].len()
    }

    #[inline]
    fn station_circuit(&self, station: StationIndex, dir: Direction) -> Option<CircuitId> {
        self.station(station, dir).map(|s| s.circuit)
    }

    #[inline]
    fn cycles_at_end(&self, dir: Direction) -> u8 {
        self.cycles_at_end[dir.index()]
    }

    #[inline]
    fn last_cid(&self, dir: Direction) -> Option<CircuitId> {
        self.last_cid[dir.index()]
    }

    #[inline]
    fn opp_cid(&self, dir: Direction) -> Option<CircuitId> {
        self.opp_cid[dir.index()]
    }

    fn increment_cycles_at_end(&mut self, dir: Direction) -> u8 {
        let counter = &mut self.cycles_at_end[dir.index()];
        // Widen so a cap of 255 does not overflow before the modulo.
        *counter = ((u16::from(*counter) + 1) % u16::from(self.dwell_cycles)) as u8;
        *counter
    }

    fn remove(&mut self, dir: Direction) -> Option<TrainSlot> {
        let evicted = self.slots[dir.index()].pop_back();
        if let Some(slot) = evicted {
            debug!(%dir, station = %slot.station, "terminal slot removed");
        }
        evicted
    }

    fn arrived(&mut self, slot: SlotIndex, dir: Direction) -> RtResult<()> {
        self.slot_mut(slot, dir)?.arrived = true;
        Ok(())
    }
}
