//! Gerade Strecke: Startpunkt → Endpunkt (bzw. Cursor), ohne Kurven-Fit.

mod geometry;
mod lifecycle;
mod state;

pub(crate) use geometry::sample_line;
pub use state::StraightLine;

#[cfg(test)]
mod tests;
