//! End-of-line detector configuration.
//!
//! The sensor-to-station tolerances are physical properties of the layout
//! (how far before a station's first circuit a train is already "at" it), so
//! they are carried as data rather than literals.

/// Which direction the terminus comparison and arrival bookkeeping run
/// against.
///
/// Reverse traversal is not modelled by the controller yet, so the default
/// keeps its established behavior of resolving every terminus against the
/// primary direction.  `Symmetric` treats each direction as its own line end
/// and is the setting to use once reverse running is in service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionPolicy {
    /// The candidate scan uses the requested direction, but the terminus
    /// window (`last`/`opp` circuits) and the arrival transition always use
    /// the primary direction.  Reverse traversal is not modelled.
    #[default]
    PrimaryOnly,
    /// Every terminus lookup and mutation uses the requested direction.
    Symmetric,
}

/// Tunables for the end-of-line detector in `rt-detect`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig {
    /// Lead-in, in circuits, before the second-to-last station at which a
    /// train becomes a terminus candidate.  Also the distance before the
    /// last circuit below which a candidate counts as still en route.
    /// Default: 2.
    pub approach_margin: u16,

    /// Width, in circuits, of the arrival window ending at the terminus'
    /// last circuit (`[last - arrival_window, last]`).  Default: 3.
    pub arrival_window: u16,

    /// Direction handling for the terminus comparison.
    pub policy: DirectionPolicy,
}

impl DetectorConfig {
    pub const DEFAULT_APPROACH_MARGIN: u16 = 2;
    pub const DEFAULT_ARRIVAL_WINDOW: u16 = 3;
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            approach_margin: Self::DEFAULT_APPROACH_MARGIN,
            arrival_window:  Self::DEFAULT_ARRIVAL_WINDOW,
            policy:          DirectionPolicy::PrimaryOnly,
        }
    }
}
