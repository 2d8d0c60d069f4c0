//! Kreis: Mittelpunkt per Klick, Radius = Abstand zum Cursor.
//!
//! Die Abtastung nutzt die exakte Kreisgleichung. Vier 90°-Bézier-Bögen
//! existieren nur für das Overlay.

mod geometry;
mod lifecycle;
mod state;

pub(crate) use geometry::sample_circle;
pub use geometry::{circle_arcs, point_on_circle};
pub use state::CircleShape;
