//! Monitor observer trait for reacting to terminus events.

use rt_core::{Direction, LineId, Tick};

/// Callbacks invoked by [`LineMonitor::tick`][crate::LineMonitor::tick].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — turnaround trigger
///
/// ```rust,ignore
/// struct Turnaround { pending: Vec<(LineId, Direction)> }
///
/// impl MonitorObserver for Turnaround {
///     fn on_eviction(&mut self, _tick: Tick, line: LineId, dir: Direction) {
///         self.pending.push((line, dir));
///     }
/// }
/// ```
pub trait MonitorObserver {
    /// A train reached the terminus of `line` while scanning `dir`.
    fn on_arrival(&mut self, _tick: Tick, _line: LineId, _dir: Direction) {}

    /// A dwelling train's counter advanced to `cycles` (non-zero).
    fn on_cycle(&mut self, _tick: Tick, _line: LineId, _dir: Direction, _cycles: u8) {}

    /// A dwell ran out and the terminal slot of `dir` was evicted.
    fn on_eviction(&mut self, _tick: Tick, _line: LineId, _dir: Direction) {}

    /// Called once every line and direction has been checked.
    fn on_tick_end(&mut self, _tick: Tick) {}
}

/// A [`MonitorObserver`] that does nothing.
pub struct NoopObserver;

impl MonitorObserver for NoopObserver {}
