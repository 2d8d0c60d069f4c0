//! Knick-Kurve: eine kubische Bézier-Kurve, deren Tangenten am Start und am
//! Ende auf den Knickpunkt zeigen.
//!
//! Klick-Folge: Start → Knickpunkt → Ende. Verkettete Kurven übernehmen die
//! Austrittstangente des Vorgängers, ein gehaltener Modifier rastet den
//! Winkel Knick → Ende auf ein Winkel-Raster.

mod geometry;
mod lifecycle;
mod state;

pub(crate) use geometry::sample_curve;
pub use geometry::{constrain_elbow, constrain_end, fit_curve};
pub use state::ElbowCurve;
