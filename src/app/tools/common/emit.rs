//! Sammelt Platzierungspunkte während einer Abtastung.

use super::geometry::lateral;
use super::jitter::RandomJitter;
use super::rotation::RotationPlanner;
use super::spacing::SpacingPlanner;
use crate::core::{PlacementPoint, TerrainSampler};
use crate::shared::options::MAX_PLACEMENT_POINTS;
use glam::Vec3;

/// Abtast-Kontext einer Neuberechnung: Planer, Jitter, Terrain und Ergebnisliste.
pub struct SampleContext<'a> {
    pub spacing: SpacingPlanner,
    pub rotation: RotationPlanner,
    pub jitter: RandomJitter,
    terrain: &'a dyn TerrainSampler,
    points: Vec<PlacementPoint>,
    skipped: usize,
}

impl<'a> SampleContext<'a> {
    pub fn new(
        spacing: SpacingPlanner,
        rotation: RotationPlanner,
        jitter: RandomJitter,
        terrain: &'a dyn TerrainSampler,
    ) -> Self {
        Self {
            spacing,
            rotation,
            jitter,
            terrain,
            points: Vec::new(),
            skipped: 0,
        }
    }

    /// True sobald die Obergrenze erreicht ist.
    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_PLACEMENT_POINTS
    }

    /// Fügt einen Punkt hinzu; Y wird vom Terrain gesampelt.
    ///
    /// Entartete Werte (NaN/Inf in Position oder Yaw, fehlender Yaw) werden
    /// übersprungen. Gibt `false` zurück, wenn die Obergrenze erreicht ist.
    pub fn emit(&mut self, position: Vec3, yaw: Option<f32>) -> bool {
        if self.is_full() {
            return false;
        }
        let Some(yaw) = yaw.filter(|y| y.is_finite()) else {
            self.skip(position);
            return true;
        };
        if !position.is_finite() {
            self.skip(position);
            return true;
        }
        let height = self.terrain.sample_height(position);
        if !height.is_finite() {
            self.skip(position);
            return true;
        }
        let seed = self.jitter.appearance_seed();
        self.points.push(PlacementPoint::new(
            Vec3::new(position.x, height, position.z),
            yaw,
            seed,
        ));
        true
    }

    /// Wie `emit`, aber mit Seitenversatz-Jitter senkrecht zu `direction`.
    pub fn emit_with_offset(&mut self, position: Vec3, direction: Vec3, yaw: Option<f32>) -> bool {
        let offset = self.jitter.lateral_offset();
        let shifted = if offset != 0.0 {
            position + lateral(direction) * offset
        } else {
            position
        };
        self.emit(shifted, yaw)
    }

    fn skip(&mut self, position: Vec3) {
        self.skipped += 1;
        log::trace!("Entarteter Abtastpunkt übersprungen: {:?}", position);
    }

    /// Anzahl verworfener Abtastpunkte.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Übergibt die gesammelten Punkte.
    pub fn finish(self) -> Vec<PlacementPoint> {
        if self.points.len() >= MAX_PLACEMENT_POINTS {
            log::warn!(
                "Punkt-Obergrenze {} erreicht, Vorschau gekürzt",
                MAX_PLACEMENT_POINTS
            );
        }
        self.points
    }
}
