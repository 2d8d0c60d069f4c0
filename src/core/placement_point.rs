//! Ausgabe-Einheit der Engine: Weltposition plus Yaw-Rotation.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Ein Platzierungspunkt (Position inkl. Terrain-Höhe, Rotation nur um +Y).
///
/// Wird bei jeder Neuberechnung frisch erzeugt und gehört ausschließlich dem Aufrufer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPoint {
    /// Weltposition (Y = gesampelte Terrain-Höhe)
    pub position: Vec3,
    /// Welt-Rotation (reine Drehung um die Hochachse)
    pub rotation: Quat,
    /// Seed für die Erscheinungsvariante des Objekts
    pub appearance_seed: u32,
}

impl PlacementPoint {
    /// Erstellt einen Punkt aus Position und Yaw (Radiant, 0 = Blick nach +Z).
    pub fn new(position: Vec3, yaw: f32, appearance_seed: u32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw),
            appearance_seed,
        }
    }

    /// Blickrichtung des Objekts (lokales +Z in Weltkoordinaten).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Yaw-Winkel in Radiant, normiert auf (-π, π].
    pub fn yaw(&self) -> f32 {
        let forward = self.forward();
        forward.x.atan2(forward.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_yaw_round_trip() {
        let p = PlacementPoint::new(Vec3::ZERO, FRAC_PI_2, 0);
        assert_relative_eq!(p.yaw(), FRAC_PI_2, epsilon = 1e-5);
        // Yaw π/2 blickt nach +X
        assert_relative_eq!(p.forward().x, 1.0, epsilon = 1e-5);
    }
}
