//! `rt-core` — foundational types for the `railterm` line controller.
//!
//! This crate is a dependency of every other `rt-*` crate.  It has no `rt-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CircuitId`, `StationIndex`, `SlotIndex`, `LineId`    |
//! | [`direction`]   | `Direction` (forward / reverse traversal)             |
//! | [`time`]        | `Tick` control-loop counter                           |
//! | [`config`]      | `DetectorConfig`, `DirectionPolicy`                   |
//! | [`error`]       | `RtError`, `RtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DetectorConfig, DirectionPolicy};
pub use direction::Direction;
pub use error::{RtError, RtResult};
pub use ids::{CircuitId, LineId, SlotIndex, StationIndex};
pub use time::Tick;
