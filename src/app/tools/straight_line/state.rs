//! State-Definition und Konstruktoren der geraden Strecke.

use super::super::common::ShapeCarryOver;
use glam::Vec3;

/// Gerade Strecke
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StraightLine {
    pub(crate) start: Option<Vec3>,
    pub(crate) end: Option<Vec3>,
}

impl StraightLine {
    /// Leere Strecke ohne Kontrollpunkte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strecke, die am Endpunkt des Vorgängers beginnt.
    pub fn with_carry_over(carry: ShapeCarryOver) -> Self {
        Self {
            start: carry.start,
            end: None,
        }
    }

    pub fn start(&self) -> Option<Vec3> {
        self.start
    }

    pub fn end(&self) -> Option<Vec3> {
        self.end
    }
}
