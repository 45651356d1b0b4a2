//! The `LineMonitor` and its per-tick pass.

use rt_core::{CircuitId, Direction, LineId, RtError, RtResult, Tick};
use rt_line::{LineTopology, TrainLine};

use crate::{EndOfLineDetector, MonitorObserver, Outcome};

/// Owns every line on the layout and runs end-of-line detection for each
/// line and direction once per control-loop tick.
///
/// The monitor is the single owner of its lines' mutable state, so a tick
/// needs no locking.  A scheduler that shares lines across threads must hold
/// one lock per line for the whole of a [`tick`](Self::tick) pass over it.
pub struct LineMonitor {
    pub detector: EndOfLineDetector,
    lines:        Vec<TrainLine>,
    tick:         Tick,
}

impl LineMonitor {
    pub fn new(detector: EndOfLineDetector) -> Self {
        Self { detector, lines: Vec::new(), tick: Tick::ZERO }
    }

    /// Register a line and return its ID (sequential from 0).
    pub fn add_line(&mut self, line: TrainLine) -> RtResult<LineId> {
        let id = LineId::try_from(self.lines.len())
            .map_err(|_| RtError::Config("too many lines for a u16 LineId".into()))?;
        self.lines.push(line);
        Ok(id)
    }

    pub fn line(&self, id: LineId) -> Option<&TrainLine> {
        self.lines.get(id.index())
    }

    /// Mutable access for the control loop (dispatching and advancing trains).
    pub fn line_mut(&mut self, id: LineId) -> Option<&mut TrainLine> {
        self.lines.get_mut(id.index())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The tick the next call to [`tick`](Self::tick) will process.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Check every line in both directions against `positions`.
    ///
    /// Returns the outcomes in line order, forward before reverse.  A
    /// structural error on any line aborts the pass; lines already checked
    /// this tick keep their updates.
    pub fn tick<O: MonitorObserver>(
        &mut self,
        positions: &[CircuitId],
        observer:  &mut O,
    ) -> RtResult<Vec<(LineId, Direction, Outcome)>> {
        let now = self.tick;
        let mut outcomes = Vec::with_capacity(self.lines.len() * 2);

        for (i, line) in self.lines.iter_mut().enumerate() {
            let id = LineId(i as u16);
            for dir in Direction::ALL {
                let outcome = self.detector.detect(line, positions, dir)?;
                match outcome {
                    Outcome::ArrivalConfirmed => observer.on_arrival(now, id, dir),
                    Outcome::CycleAdvanced => match line.cycles_at_end(dir) {
                        0      => observer.on_eviction(now, id, dir),
                        cycles => observer.on_cycle(now, id, dir, cycles),
                    },
                    Outcome::NotYetArrived => {}
                }
                outcomes.push((id, dir, outcome));
            }
        }

        observer.on_tick_end(now);
        self.tick = now.next();
        Ok(outcomes)
    }
}
