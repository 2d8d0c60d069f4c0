//! Rotations-Planung: Pfadrichtung + Policy → Yaw pro Punkt.

use super::geometry::bearing;
use crate::core::{RotationMode, SpacingMode};
use crate::shared::options::PlacementSettings;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Leitet die Objekt-Rotation aus Policy und lokaler Pfadrichtung ab.
#[derive(Debug, Clone)]
pub struct RotationPlanner {
    mode: RotationMode,
    /// Benutzer-Rotation in Radiant
    offset: f32,
    /// Zaun/W2W erzwingen Ausrichtung an der Paar-Mitte
    aligned: bool,
    /// W2W: quer zur Laufrichtung
    perpendicular: bool,
    rng: StdRng,
}

impl RotationPlanner {
    /// `rotation_seed` stammt vom Preview-Timer und ändert sich nur periodisch.
    pub fn new(settings: &PlacementSettings, spacing_mode: SpacingMode, rotation_seed: u64) -> Self {
        Self {
            mode: settings.rotation_mode,
            offset: settings.rotation_deg.to_radians(),
            aligned: spacing_mode.is_aligned(),
            perpendicular: spacing_mode == SpacingMode::W2WMode,
            rng: StdRng::seed_from_u64(rotation_seed),
        }
    }

    /// True wenn die Rotation unabhängig vom `RotationMode` der Paar-Mitte folgt.
    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    /// Yaw für einen Punkt mit lokaler Pfadrichtung `direction`.
    ///
    /// `None` wenn die Policy eine Richtung braucht, die entartet ist.
    pub fn yaw(&mut self, direction: Vec3) -> Option<f32> {
        if self.aligned {
            return self.aligned_yaw(direction);
        }
        match self.mode {
            RotationMode::Absolute => Some(self.offset),
            RotationMode::Relative => bearing(direction).map(|b| b + self.offset),
            RotationMode::Random => Some(self.rng.gen_range(0.0..TAU)),
        }
    }

    /// Ausrichtungs-Yaw (Zaun: entlang, W2W: quer zur Richtung).
    pub fn aligned_yaw(&self, direction: Vec3) -> Option<f32> {
        let b = bearing(direction)?;
        Some(if self.perpendicular { b + FRAC_PI_2 } else { b })
    }

    /// Yaws für eine Kette ausgerichteter Pivots.
    ///
    /// Richtung in Punkt i = Mitte(i, i+1) − Mitte(i−1, i); an offenen Enden
    /// die einseitige Paar-Richtung. `fallback` gilt für einzelne Punkte.
    pub fn aligned_yaws(&self, pivots: &[Vec3], closed: bool, fallback: Vec3) -> Vec<Option<f32>> {
        let n = pivots.len();
        if n < 2 {
            return pivots.iter().map(|_| self.aligned_yaw(fallback)).collect();
        }
        let midpoint = |i: usize, j: usize| (pivots[i] + pivots[j]) * 0.5;
        (0..n)
            .map(|i| {
                let direction = if closed {
                    midpoint(i, (i + 1) % n) - midpoint((i + n - 1) % n, i)
                } else if i == 0 {
                    pivots[1] - pivots[0]
                } else if i == n - 1 {
                    pivots[n - 1] - pivots[n - 2]
                } else {
                    midpoint(i, i + 1) - midpoint(i - 1, i)
                };
                self.aligned_yaw(direction)
            })
            .collect()
    }
}
