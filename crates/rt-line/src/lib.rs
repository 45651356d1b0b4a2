//! `rt-line` — line geometry and per-direction train bookkeeping.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`topology`] | `LineTopology` — the query/mutation surface the detector uses  |
//! | [`line`]     | `TrainLine`, `Station`, `TrainSlot` — the concrete provider     |
//! | [`builder`]  | `TrainLineBuilder` — validated construction                     |
//! | [`loader`]   | `load_line_csv` / `load_line_reader`                            |
//!
//! # Slot model
//!
//! Each direction keeps a list of *slots*, one per train currently tracked on
//! that direction, ordered newest first: slot `len - 1` is always the train
//! furthest along the line.  A slot records the station the train is heading
//! for (or sitting at) and whether it has arrived there.  A slot is removed
//! only by [`LineTopology::remove`], which the detector issues when a dwell
//! at the terminus runs out.

pub mod builder;
pub mod line;
pub mod loader;
pub mod topology;


pub use builder::TrainLineBuilder;
pub use line::{Station, TrainLine, TrainSlot};
pub use loader::{load_line_csv, load_line_reader};
pub use topology::LineTopology;
