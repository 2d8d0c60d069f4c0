//! State-Definition und Konstruktoren der Knick-Kurve.

use super::super::common::ShapeCarryOver;
use glam::Vec3;

/// Kubische Kurve über einen Knickpunkt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElbowCurve {
    pub(crate) start: Option<Vec3>,
    pub(crate) elbow: Option<Vec3>,
    pub(crate) end: Option<Vec3>,
    /// Austrittstangente des vorigen Segments (nur bei Verkettung)
    pub(crate) previous_exit: Option<Vec3>,
}

impl ElbowCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kurve, die Startpunkt und Austrittstangente des Vorgängers übernimmt.
    pub fn with_carry_over(carry: ShapeCarryOver) -> Self {
        Self {
            start: carry.start,
            elbow: None,
            end: None,
            previous_exit: carry.exit_tangent,
        }
    }

    pub fn start(&self) -> Option<Vec3> {
        self.start
    }

    pub fn elbow(&self) -> Option<Vec3> {
        self.elbow
    }

    pub fn previous_exit(&self) -> Option<Vec3> {
        self.previous_exit
    }
}
