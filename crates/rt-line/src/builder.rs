//! Fluent builder for constructing a [`TrainLine`].

use std::collections::VecDeque;

use rt_core::{CircuitId, Direction, RtError, RtResult, StationIndex};

use crate::{Station, TrainLine};

/// Builder for [`TrainLine`].
///
/// ```rust,ignore
/// let mut b = TrainLineBuilder::new();
/// for (name, cid) in [("Harbor", 10), ("Market", 40), ("Summit", 96)] {
///     b.add_station(Direction::Forward, name, CircuitId(cid));
/// }
/// b.terminus(Direction::Forward, CircuitId(100), CircuitId(250));
/// // ... same for Direction::Reverse ...
/// let line = b.build()?;
/// ```
pub struct TrainLineBuilder {
    stations:     [Vec<Station>; 2],
    last_cid:     [Option<CircuitId>; 2],
    opp_cid:      [Option<CircuitId>; 2],
    dwell_cycles: u8,
}

impl TrainLineBuilder {
    /// Dwell cap used when [`dwell_cycles`](Self::dwell_cycles) is not called.
    pub const DEFAULT_DWELL_CYCLES: u8 = 10;

    pub fn new() -> Self {
        Self {
            stations:     [Vec::new(), Vec::new()],
            last_cid:     [None, None],
            opp_cid:      [None, None],
            dwell_cycles: Self::DEFAULT_DWELL_CYCLES,
        }
    }

    /// Append a station to `dir`'s ordering and return its index.
    pub fn add_station(
        &mut self,
        dir:     Direction,
        name:    impl Into<String>,
        circuit: CircuitId,
    ) -> StationIndex {
        let list = &mut self.stations[dir.index()];
        let id   = StationIndex(list.len() as u16);
        list.push(Station { name: name.into(), circuit });
        id
    }

    pub fn set_last_cid(&mut self, dir: Direction, cid: CircuitId) -> &mut Self {
        self.last_cid[dir.index()] = Some(cid);
        self
    }

    pub fn set_opp_cid(&mut self, dir: Direction, cid: CircuitId) -> &mut Self {
        self.opp_cid[dir.index()] = Some(cid);
        self
    }

    /// Convenience: set both terminus circuits for `dir`.
    pub fn terminus(&mut self, dir: Direction, last: CircuitId, opp: CircuitId) -> &mut Self {
        self.set_last_cid(dir, last).set_opp_cid(dir, opp)
    }

    /// Number of dwell cycles a train spends at the terminus (counting the
    /// arrival tick) before its slot is evicted.  Must be at least 2.
    pub fn dwell_cycles(&mut self, cycles: u8) -> &mut Self {
        self.dwell_cycles = cycles;
        self
    }

    pub fn station_count(&self, dir: Direction) -> usize {
        self.stations[dir.index()].len()
    }

    /// Validate and produce a [`TrainLine`] with no trains tracked.
    ///
    /// # Errors
    ///
    /// - [`RtError::TooFewStations`] if either direction has fewer than 2.
    /// - [`RtError::StationCountMismatch`] if the directions disagree.
    /// - [`RtError::Config`] if the dwell cap is below 2 (the arrival
    ///   transition itself would wrap the counter).
    pub fn build(self) -> RtResult<TrainLine> {
        for dir in Direction::ALL {
            let found = self.stations[dir.index()].len();
            if found < 2 {
                return Err(RtError::TooFewStations { dir, found });
            }
        }

        let expected = self.stations[Direction::Forward.index()].len();
        let got      = self.stations[Direction::Reverse.index()].len();
        if got != expected {
            return Err(RtError::StationCountMismatch { dir: Direction::Reverse, expected, got });
        }
        if expected > usize::from(u16::MAX) {
            return Err(RtError::Config(format!("{expected} stations exceed the u16 station index")));
        }

        if self.dwell_cycles < 2 {
            return Err(RtError::Config(format!(
                "dwell_cycles must be at least 2, got {}",
                self.dwell_cycles
            )));
        }

        Ok(TrainLine {
            stations:      self.stations,
            last_cid:      self.last_cid,
            opp_cid:       self.opp_cid,
            slots:         [VecDeque::new(), VecDeque::new()],
            cycles_at_end: [0, 0],
            dwell_cycles:  self.dwell_cycles,
        })
    }
}

impl Default for TrainLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
