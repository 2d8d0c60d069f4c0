//! State-Definition und Konstruktoren des Rasters.

use super::super::common::ShapeCarryOver;
use glam::Vec3;

/// Parallelogramm-Raster aus zwei unabhängigen Achsen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridShape {
    pub(crate) start: Option<Vec3>,
    pub(crate) elbow: Option<Vec3>,
    pub(crate) end: Option<Vec3>,
}

impl GridShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_carry_over(carry: ShapeCarryOver) -> Self {
        Self {
            start: carry.start,
            elbow: None,
            end: None,
        }
    }

    pub fn start(&self) -> Option<Vec3> {
        self.start
    }

    pub fn elbow(&self) -> Option<Vec3> {
        self.elbow
    }
}
