//! `rt-detect` — decides when a train has reached the end of its line.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`outcome`]  | `Outcome` — the three per-call results                           |
//! | [`detector`] | `EndOfLineDetector` — the decision predicate and dwell machine   |
//! | [`monitor`]  | `LineMonitor` — runs the detector over every line each tick      |
//! | [`observer`] | `MonitorObserver` callbacks, `NoopObserver`                      |
//!
//! # Per-tick decision
//!
//! ```text
//! detect(line, positions, dir):
//!   ① Geometry  — reject lines that cannot support a terminus decision.
//!   ② Guard     — skip unless the leading train is bound for the terminus
//!                 or a train is already dwelling there.
//!   ③ Dwell     — if dwelling: bump the counter; on wrap evict the slot.
//!   ④ Scan      — collect candidates near the terminus; any candidate still
//!                 short of the terminus defers the whole decision.
//!   ⑤ Confirm   — first candidate inside the arrival window (or on the
//!                 opposite-track alias) marks the arrival and starts the dwell.
//! ```
//!
//! Sensors report anonymous occupancy only, so `positions` is just a slice of
//! circuit IDs; which physical train sits where is not this crate's concern.

pub mod detector;
pub mod monitor;
pub mod observer;
pub mod outcome;


pub use detector::EndOfLineDetector;
pub use monitor::LineMonitor;
pub use observer::{MonitorObserver, NoopObserver};
pub use outcome::Outcome;
