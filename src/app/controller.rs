//! Controller des Linien-Werkzeugs: Eingaben → Form → Vorschau bzw. Platzierung.

use super::generator::{generate_points, PreviewRequest};
use super::preview_cache::PreviewCache;
use super::tools::{ClickOutcome, DragTarget, FitConstraints, PathShape, ShapeTool};
use crate::core::{
    CubicBezier, PlacementPoint, PrefabBounds, RotationMode, ShapeKind, SpacingMode,
    TerrainSampler,
};
use crate::shared::options::PlacementSettings;
use glam::Vec3;
use std::time::Duration;

/// Empfänger der endgültig platzierten Punkte (Objekt-Erzeugung).
pub trait ObjectSink {
    /// Wird genau einmal pro `Placed`-Übergang mit der fertigen Punktliste aufgerufen.
    fn place_objects(&mut self, points: Vec<PlacementPoint>);
}

impl ObjectSink for Vec<Vec<PlacementPoint>> {
    fn place_objects(&mut self, points: Vec<PlacementPoint>) {
        self.push(points);
    }
}

/// Einzelne Änderung an der Einstellungs-Oberfläche (UI-Toggle, Slider).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsChange {
    Shape(ShapeKind),
    Spacing(f32),
    SpacingMode(SpacingMode),
    RotationMode(RotationMode),
    RandomSpacingMax(f32),
    RandomOffsetMax(f32),
    RotationDeg(f32),
    RandomizeAppearance(bool),
    FixedSeed(i32),
}

/// Orchestriert eine Werkzeug-Sitzung mit genau einer aktiven Form.
pub struct LineToolController<T: TerrainSampler> {
    shape: PathShape,
    settings: PlacementSettings,
    bounds: PrefabBounds,
    terrain: T,
    cache: PreviewCache,
}

impl<T: TerrainSampler> LineToolController<T> {
    /// Erstellt den Controller; die Einstellungen werden gegen das Prefab geprüft.
    pub fn new(mut settings: PlacementSettings, bounds: PrefabBounds, terrain: T) -> Self {
        settings.sanitize(&bounds);
        let shape = PathShape::new(settings.shape);
        Self {
            shape,
            settings,
            bounds,
            terrain,
            cache: PreviewCache::default(),
        }
    }

    pub fn shape(&self) -> &PathShape {
        &self.shape
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    pub fn bounds(&self) -> &PrefabBounds {
        &self.bounds
    }

    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    /// Neues Terrain (z.B. nach Höhenänderung). Die Vorschau wird neu berechnet.
    pub fn set_terrain(&mut self, terrain: T) {
        self.terrain = terrain;
        self.cache.invalidate();
        log::debug!("Terrain ersetzt, Vorschau verworfen");
    }

    fn constraints(&self, snap_angle: bool) -> FitConstraints {
        FitConstraints::from_settings(&self.settings, snap_angle)
    }

    /// Position mit Terrain-Höhe.
    fn on_terrain(&self, position: Vec3) -> Vec3 {
        let height = self.terrain.sample_height(position);
        if height.is_finite() {
            Vec3::new(position.x, height, position.z)
        } else {
            position
        }
    }

    // ── Eingaben ────────────────────────────────────────────────

    /// Verarbeitet einen Viewport-Klick.
    ///
    /// Bei `Placed` werden die Punkte an `sink` übergeben und die Form geht
    /// in ihren Folgezustand (Verkettung ab dem letzten Endpunkt).
    pub fn handle_click(
        &mut self,
        position: Vec3,
        snap_angle: bool,
        sink: &mut dyn ObjectSink,
    ) -> ClickOutcome {
        let position = self.on_terrain(position);
        let constraints = self.constraints(snap_angle);
        let outcome = self.shape.handle_click(position, &constraints);
        log::debug!("{:?}: Klick → {:?}", self.shape.kind(), outcome);

        if outcome == ClickOutcome::Placed {
            let request = PreviewRequest {
                cursor: position,
                snap_angle,
                rotation_seed: self.cache.rotation_seed(),
            };
            let points = generate_points(
                &self.shape,
                &request,
                &self.settings,
                &self.bounds,
                &self.terrain,
            );
            log::info!(
                "{:?}: {} Objekte platziert",
                self.shape.kind(),
                points.len()
            );
            if !points.is_empty() {
                sink.place_objects(points);
            }
            self.shape.finalize();
        }
        self.cache.invalidate();
        outcome
    }

    /// Verschiebt einen bestehenden Kontrollpunkt.
    pub fn handle_drag(&mut self, target: DragTarget, position: Vec3, snap_angle: bool) -> bool {
        let position = self.on_terrain(position);
        let constraints = self.constraints(snap_angle);
        let moved = self.shape.handle_drag(target, position, &constraints);
        if moved {
            self.cache.invalidate();
        }
        moved
    }

    /// Kontrollpunkt in Greifweite der Cursor-Position.
    pub fn pick_drag_target(&self, position: Vec3, radius: f32) -> Option<DragTarget> {
        self.shape.pick_drag_target(position, radius)
    }

    /// Ein Vorschau-Tick: Timer weiterzählen, bei geänderter Eingabe neu rechnen.
    pub fn tick(&mut self, cursor: Vec3, elapsed: Duration, snap_angle: bool) -> &[PlacementPoint] {
        self.cache.advance_timer(elapsed, &self.settings);
        let cursor = self.on_terrain(cursor);
        let request = PreviewRequest {
            cursor,
            snap_angle,
            rotation_seed: 0,
        };
        self.cache.get_or_compute(
            &self.shape,
            request,
            &self.settings,
            &self.bounds,
            &self.terrain,
        )
    }

    /// Overlay-Kurven der aktiven Form für die Cursor-Position.
    pub fn overlay_curves(&self, cursor: Vec3, snap_angle: bool) -> Vec<CubicBezier> {
        let cursor = self.on_terrain(cursor);
        self.shape
            .overlay_curves(cursor, &self.constraints(snap_angle))
    }

    /// Verwirft alle Kontrollpunkte (Escape).
    pub fn reset(&mut self) {
        self.shape.reset();
        self.cache.invalidate();
        log::debug!("{:?}: zurückgesetzt", self.shape.kind());
    }

    // ── Einstellungen ───────────────────────────────────────────

    /// Wendet eine einzelne Einstellungs-Änderung an der Mutations-Grenze an.
    pub fn apply_setting(&mut self, change: SettingsChange) {
        let bounds = self.bounds;
        match change {
            SettingsChange::Shape(kind) => self.set_shape_kind(kind),
            SettingsChange::Spacing(v) => self.settings.set_spacing(v, &bounds),
            SettingsChange::SpacingMode(mode) => {
                self.settings.set_spacing_mode(mode, &bounds);
            }
            SettingsChange::RotationMode(mode) => {
                if self.settings.rotation_mode != mode {
                    self.settings.rotation_mode = mode;
                    self.cache.reseed();
                }
            }
            SettingsChange::RandomSpacingMax(v) => self.settings.set_random_spacing_max(v),
            SettingsChange::RandomOffsetMax(v) => self.settings.set_random_offset_max(v),
            SettingsChange::RotationDeg(v) => self.settings.set_rotation_deg(v),
            SettingsChange::RandomizeAppearance(on) => self.settings.randomize_appearance = on,
            SettingsChange::FixedSeed(seed) => self.settings.fixed_seed = seed,
        }
    }

    /// Wechselt die Form. Die neue Form startet leer, Seeds werden neu gezogen.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        if self.shape.kind() == kind {
            return;
        }
        self.settings.shape = kind;
        self.shape = PathShape::new(kind);
        self.cache.reseed();
        log::debug!("Form gewechselt auf {:?}", kind);
    }

    /// Neues Prefab: Einstellungen gegen die neue Ausdehnung prüfen.
    pub fn set_prefab_bounds(&mut self, bounds: PrefabBounds) {
        self.bounds = bounds;
        self.settings.sanitize(&bounds);
        self.cache.invalidate();
    }

    /// Ersetzt die komplette Einstellungs-Oberfläche (z.B. nach Datei-Reload).
    pub fn replace_settings(&mut self, mut settings: PlacementSettings) {
        settings.sanitize(&self.bounds);
        let kind = settings.shape;
        self.settings = settings;
        if self.shape.kind() != kind {
            self.shape = PathShape::new(kind);
            self.cache.reseed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FlatTerrain;

    fn controller() -> LineToolController<FlatTerrain> {
        LineToolController::new(
            PlacementSettings::default(),
            PrefabBounds::default(),
            FlatTerrain::new(2.0),
        )
    }

    #[test]
    fn test_click_samples_terrain_height() {
        let mut c = controller();
        let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
        c.handle_click(Vec3::new(1.0, 50.0, 1.0), false, &mut sink);
        let targets = c.shape().drag_targets();
        assert_eq!(targets[0].1.y, 2.0);
    }

    #[test]
    fn test_settings_change_clamps() {
        let mut c = controller();
        c.apply_setting(SettingsChange::Spacing(-1.0));
        assert!(c.settings().spacing > 0.0);
        c.apply_setting(SettingsChange::SpacingMode(SpacingMode::FenceMode));
        assert_eq!(c.settings().spacing_mode, SpacingMode::Manual);
        c.apply_setting(SettingsChange::RotationDeg(450.0));
        assert_eq!(c.settings().rotation_deg, 90.0);
    }

    #[test]
    fn test_shape_switch_clears_points() {
        let mut c = controller();
        let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
        c.handle_click(Vec3::ZERO, false, &mut sink);
        assert!(c.shape().state().has_start);
        c.apply_setting(SettingsChange::Shape(ShapeKind::Grid));
        assert_eq!(c.shape().kind(), ShapeKind::Grid);
        assert!(!c.shape().state().has_start);
        assert_eq!(c.settings().shape, ShapeKind::Grid);
    }

    #[test]
    fn test_terrain_swap_recomputes_preview() {
        let mut c = controller();
        let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
        c.handle_click(Vec3::ZERO, false, &mut sink);
        let cursor = Vec3::new(20.0, 0.0, 0.0);
        assert!(c
            .tick(cursor, Duration::ZERO, false)
            .iter()
            .all(|p| p.position.y == 2.0));

        c.set_terrain(FlatTerrain::new(7.0));
        let points = c.tick(cursor, Duration::ZERO, false);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.position.y == 7.0));
        assert_eq!(c.cache().computations(), 2);
        assert_eq!(c.terrain().height, 7.0);
    }
}
