//! Gemeinsame Bausteine der Pfadformen.
//!
//! Aufgeteilt in:
//! - `geometry`:  Richtungen, Yaw, Winkel-Raster
//! - `lifecycle`: PathState, ShapeCarryOver
//! - `spacing`:   SpacingPlanner (Distanzen, Pivots, Kreis-Plan)
//! - `rotation`:  RotationPlanner
//! - `jitter`:    RandomJitter (längen-geseedet)
//! - `emit`:      SampleContext (Terrain-Höhe, Ergebnisliste)

mod emit;
pub mod geometry;
mod jitter;
mod lifecycle;
mod rotation;
mod spacing;

pub use emit::SampleContext;
pub use jitter::{seed_for_length, RandomJitter};
pub use lifecycle::{PathState, ShapeCarryOver};
pub use rotation::RotationPlanner;
pub use spacing::{CirclePlan, GridAxis, SpacingPlanner};
