//! The end-of-line arrival detector.

use rt_core::{CircuitId, DetectorConfig, Direction, DirectionPolicy, RtError, RtResult, StationIndex};
use rt_line::LineTopology;
use tracing::{debug, info, warn};

use crate::Outcome;

/// Circuit thresholds resolved from the line once per call.
struct Terminus {
    /// Index of the last station (`total_num_stations - 1`).
    last_station: StationIndex,
    /// Lowest circuit at which a train counts as a terminus candidate.
    approach_from: CircuitId,
    /// Candidates below this are still travelling towards the terminus.
    en_route_below: CircuitId,
    /// Arrival window `[window_from, last]`.
    window_from: CircuitId,
    last: CircuitId,
    /// Opposite-track alias of the terminus.
    opp: CircuitId,
}

impl Terminus {
    #[inline]
    fn accepts(&self, pos: CircuitId) -> bool {
        (self.window_from..=self.last).contains(&pos) || pos == self.opp
    }
}

/// Decides, once per control-loop tick, whether a train has reached the end
/// of a line, and drives the dwell-and-evict cycle once it has.
///
/// The detector holds only configuration; all mutable state lives on the
/// line passed to [`detect`](Self::detect), so one detector can serve any
/// number of lines.
#[derive(Clone, Debug, Default)]
pub struct EndOfLineDetector {
    pub config: DetectorConfig,
}

impl EndOfLineDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// The direction whose terminus circuits and slot list the arrival
    /// transition uses when scanning `direction`.
    #[inline]
    pub fn terminus_direction(&self, direction: Direction) -> Direction {
        match self.config.policy {
            DirectionPolicy::PrimaryOnly => Direction::Forward,
            DirectionPolicy::Symmetric   => direction,
        }
    }

    /// Run one tick of end-of-line detection for `direction` of `line`.
    ///
    /// `positions` is the current occupancy snapshot, one circuit per active
    /// train.  It is only read.  The call is O(`positions.len()`) and keeps
    /// no state between ticks beyond what it writes to `line`.
    ///
    /// # Errors
    ///
    /// Structural problems with the line are reported before any decision
    /// logic runs and before `line` is touched:
    ///
    /// - [`RtError::TooFewStations`]: fewer than 2 stations.
    /// - [`RtError::StationCountMismatch`]: `direction` lists a different
    ///   number of stations than the line's physical count.
    /// - [`RtError::MissingTerminus`]: last/opposite circuits not configured.
    ///
    /// A match while the terminus direction tracks no train is not an
    /// error: nothing can be marked arrived, so the call logs a warning and
    /// returns [`Outcome::NotYetArrived`].
    pub fn detect<L: LineTopology + ?Sized>(
        &self,
        line:      &mut L,
        positions: &[CircuitId],
        direction: Direction,
    ) -> RtResult<Outcome> {
        let terminus_dir = self.terminus_direction(direction);
        let terminus     = self.resolve(line, direction, terminus_dir).inspect_err(|e| {
            warn!(%direction, error = %e, "line cannot support end-of-line detection");
        })?;

        // ── Guard ─────────────────────────────────────────────────────────
        let cycles   = line.cycles_at_end(direction);
        let expected = line
            .leading_slot(direction)
            .and_then(|slot| line.at(slot, direction))
            == Some(terminus.last_station);
        if !expected && cycles == 0 {
            return Ok(Outcome::NotYetArrived);
        }

        // ── Dwell ─────────────────────────────────────────────────────────
        if cycles > 0 {
            let next = line.increment_cycles_at_end(direction);
            if next == 0 {
                line.remove(direction);
                info!(%direction, "dwell complete, terminal train evicted");
            } else {
                debug!(%direction, cycles = next, "dwelling at terminus");
            }
            return Ok(Outcome::CycleAdvanced);
        }

        // ── Candidate scan ────────────────────────────────────────────────
        let mut candidates: Vec<CircuitId> = Vec::with_capacity(positions.len());
        for &pos in positions {
            if pos < terminus.approach_from {
                continue;
            }
            if pos < terminus.en_route_below {
                debug!(%direction, %pos, "train en route to terminus, deferring");
                return Ok(Outcome::NotYetArrived);
            }
            candidates.push(pos);
        }

        // ── Confirm ───────────────────────────────────────────────────────
        let Some(&pos) = candidates.iter().find(|&&pos| terminus.accepts(pos)) else {
            return Ok(Outcome::NotYetArrived);
        };

        // Only reachable under `PrimaryOnly` when scanning the other direction.
        if line.cycles_at_end(terminus_dir) != 0 {
            debug!(%direction, %terminus_dir, "terminus already dwelling, arrival not re-recorded");
            return Ok(Outcome::NotYetArrived);
        }

        let Some(slot) = line.leading_slot(terminus_dir) else {
            warn!(%direction, %terminus_dir, %pos, "terminus matched but no train tracked there");
            return Ok(Outcome::NotYetArrived);
        };
        line.arrived(slot, terminus_dir)?;
        line.increment_cycles_at_end(terminus_dir);
        info!(%direction, %terminus_dir, %pos, %slot, "last station reached");
        Ok(Outcome::ArrivalConfirmed)
    }

    /// Validate the line and resolve every threshold the decision needs.
    fn resolve<L: LineTopology + ?Sized>(
        &self,
        line:         &L,
        direction:    Direction,
        terminus_dir: Direction,
    ) -> RtResult<Terminus> {
        let total = line.total_num_stations();
        if total < 2 {
            return Err(RtError::TooFewStations { dir: direction, found: total });
        }
        let got = line.station_count(direction);
        if got != total {
            return Err(RtError::StationCountMismatch { dir: direction, expected: total, got });
        }

        let last_station = StationIndex::try_from(total - 1)
            .map_err(|_| RtError::Config(format!("{total} stations exceed the u16 station index")))?;
        let approach = last_station
            .prev()
            .and_then(|second_to_last| line.station_circuit(second_to_last, direction))
            .ok_or(RtError::TooFewStations { dir: direction, found: got })?;

        let last = line.last_cid(terminus_dir).ok_or(RtError::MissingTerminus(terminus_dir))?;
        let opp  = line.opp_cid(terminus_dir).ok_or(RtError::MissingTerminus(terminus_dir))?;

        Ok(Terminus {
            last_station,
            approach_from:  approach.saturating_sub(self.config.approach_margin),
            en_route_below: last.saturating_sub(self.config.approach_margin),
            window_from:    last.saturating_sub(self.config.arrival_window),
            last,
            opp,
        })
    }
}
