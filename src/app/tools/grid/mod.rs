//! Raster: Basisachse Start → Knickpunkt, Seitenachse Knickpunkt → Cursor.
//!
//! Punkte liegen auf dem Gitter `lerp(start, elbow, b) + lerp(elbow, end, s) − elbow`.
//! Zellen außerhalb des Parallelogramms werden übersprungen, nicht geklemmt.

mod geometry;
mod lifecycle;
mod state;

pub use geometry::lattice_point;
pub(crate) use geometry::sample_grid;
pub use state::GridShape;
