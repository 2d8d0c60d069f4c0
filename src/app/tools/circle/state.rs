//! State-Definition und Konstruktoren des Kreises.

use super::super::common::ShapeCarryOver;
use glam::Vec3;

/// Vollkreis um einen festen Mittelpunkt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleShape {
    pub(crate) center: Option<Vec3>,
    /// Punkt auf dem Umfang (gesetzt beim platzierenden Klick)
    pub(crate) rim: Option<Vec3>,
}

impl CircleShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt den Startpunkt des Vorgängers als Mittelpunkt.
    pub fn with_carry_over(carry: ShapeCarryOver) -> Self {
        Self {
            center: carry.start,
            rim: None,
        }
    }

    pub fn center(&self) -> Option<Vec3> {
        self.center
    }
}
