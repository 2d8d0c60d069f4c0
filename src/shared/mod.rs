//! Geteilte Einstellungen für alle Layer.

pub mod options;

pub use options::PlacementSettings;
pub use options::{DEFAULT_SPACING, MAX_PLACEMENT_POINTS, MIN_SPACING};
