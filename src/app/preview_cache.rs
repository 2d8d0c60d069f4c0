//! Vorschau-Cache: Neuberechnung nur bei geänderter Eingabe.
//!
//! Der Schlüssel umfasst alles, wovon `generate_points` abhängt, mit Ausnahme
//! des Terrains: Höhenänderungen sind für den Cache unsichtbar, wer das
//! Terrain austauscht oder editiert, muss `invalidate` aufrufen
//! (`LineToolController::set_terrain` tut das). Die Zufallsrotation bekommt
//! ihren Seed vom Timer, nicht pro Tick.

use super::generator::{generate_points, PreviewRequest};
use super::tools::PathShape;
use crate::core::{PlacementPoint, PrefabBounds, RotationMode, TerrainSampler};
use crate::shared::options::PlacementSettings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Eingabe der letzten Berechnung
#[derive(Debug)]
struct PreviewKey {
    shape: PathShape,
    request: PreviewRequest,
    settings: PlacementSettings,
    bounds: PrefabBounds,
}

/// Memoisierte Vorschau-Punkte plus Timer der Zufallsrotation.
#[derive(Debug)]
pub struct PreviewCache {
    key: Option<PreviewKey>,
    points: Vec<PlacementPoint>,
    rotation_seed: u64,
    seed_rng: StdRng,
    elapsed: Duration,
    computations: usize,
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PreviewCache {
    /// Neuer Cache; `seed` initialisiert die Folge der Rotations-Seeds.
    pub fn new(seed: u64) -> Self {
        let mut seed_rng = StdRng::seed_from_u64(seed);
        let rotation_seed = seed_rng.gen();
        Self {
            key: None,
            points: Vec::new(),
            rotation_seed,
            seed_rng,
            elapsed: Duration::ZERO,
            computations: 0,
        }
    }

    /// Aktueller Seed der Zufallsrotation.
    pub fn rotation_seed(&self) -> u64 {
        self.rotation_seed
    }

    /// Anzahl tatsächlicher Neuberechnungen seit Erstellung.
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Zuletzt berechnete Punkte.
    pub fn points(&self) -> &[PlacementPoint] {
        &self.points
    }

    /// Zählt den Timer weiter. Im Random-Modus wird nach Ablauf des
    /// Intervalls neu gewürfelt; gibt `true` zurück, wenn das passiert ist.
    pub fn advance_timer(&mut self, elapsed: Duration, settings: &PlacementSettings) -> bool {
        if settings.rotation_mode != RotationMode::Random {
            self.elapsed = Duration::ZERO;
            return false;
        }
        self.elapsed += elapsed;
        let interval = Duration::try_from_secs_f32(settings.random_rotation_interval_secs.max(0.1))
            .unwrap_or(Duration::MAX);
        if self.elapsed < interval {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.reseed();
        true
    }

    /// Neuer Rotations-Seed; erzwingt die nächste Berechnung.
    pub fn reseed(&mut self) {
        self.rotation_seed = self.seed_rng.gen();
        self.invalidate();
        log::debug!("Zufallsrotation neu gewürfelt");
    }

    /// Verwirft den Cache-Schlüssel.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Liefert die Punkte für die Eingabe; rechnet nur bei geändertem Schlüssel.
    ///
    /// `terrain` ist nicht Teil des Schlüssels, siehe Modul-Doku.
    pub fn get_or_compute(
        &mut self,
        shape: &PathShape,
        mut request: PreviewRequest,
        settings: &PlacementSettings,
        bounds: &PrefabBounds,
        terrain: &dyn TerrainSampler,
    ) -> &[PlacementPoint] {
        request.rotation_seed = self.rotation_seed;
        let hit = self.key.as_ref().is_some_and(|key| {
            key.request == request
                && key.shape == *shape
                && key.settings == *settings
                && key.bounds == *bounds
        });
        if !hit {
            self.points = generate_points(shape, &request, settings, bounds, terrain);
            self.computations += 1;
            self.key = Some(PreviewKey {
                shape: shape.clone(),
                request,
                settings: settings.clone(),
                bounds: *bounds,
            });
        }
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::{FitConstraints, ShapeTool};
    use crate::core::{FlatTerrain, ShapeKind};
    use glam::Vec3;

    fn line_shape() -> PathShape {
        let mut shape = PathShape::new(ShapeKind::Straight);
        shape.handle_click(Vec3::ZERO, &FitConstraints::default());
        shape
    }

    #[test]
    fn test_same_input_computes_once() {
        let mut cache = PreviewCache::new(1);
        let shape = line_shape();
        let settings = PlacementSettings::default();
        let bounds = PrefabBounds::default();
        let terrain = FlatTerrain::default();
        let request = PreviewRequest::new(Vec3::new(20.0, 0.0, 0.0));
        let first = cache
            .get_or_compute(&shape, request, &settings, &bounds, &terrain)
            .to_vec();
        let second = cache
            .get_or_compute(&shape, request, &settings, &bounds, &terrain)
            .to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.computations(), 1);

        let moved = PreviewRequest::new(Vec3::new(30.0, 0.0, 0.0));
        cache.get_or_compute(&shape, moved, &settings, &bounds, &terrain);
        assert_eq!(cache.computations(), 2);
    }

    #[test]
    fn test_timer_only_in_random_mode() {
        let mut cache = PreviewCache::new(7);
        let seed = cache.rotation_seed();
        let relative = PlacementSettings::default();
        assert!(!cache.advance_timer(Duration::from_secs(10), &relative));
        assert_eq!(cache.rotation_seed(), seed);

        let random = PlacementSettings {
            rotation_mode: RotationMode::Random,
            ..Default::default()
        };
        assert!(!cache.advance_timer(Duration::from_secs(2), &random));
        assert!(cache.advance_timer(Duration::from_secs(2), &random));
        assert_ne!(cache.rotation_seed(), seed);
    }

    #[test]
    fn test_terrain_change_needs_invalidate() {
        let mut cache = PreviewCache::new(3);
        let shape = line_shape();
        let settings = PlacementSettings::default();
        let bounds = PrefabBounds::default();
        let request = PreviewRequest::new(Vec3::new(20.0, 0.0, 0.0));

        cache.get_or_compute(&shape, request, &settings, &bounds, &FlatTerrain::new(1.0));
        let stale = cache
            .get_or_compute(&shape, request, &settings, &bounds, &FlatTerrain::new(4.0))
            .to_vec();
        assert!(stale.iter().all(|p| p.position.y == 1.0));

        cache.invalidate();
        let fresh = cache.get_or_compute(&shape, request, &settings, &bounds, &FlatTerrain::new(4.0));
        assert!(fresh.iter().all(|p| p.position.y == 4.0));
        assert_eq!(cache.computations(), 2);
    }
}
