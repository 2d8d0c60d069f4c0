//! PlacementPointGenerator: Form + Cursor + Einstellungen → Platzierungspunkte.
//!
//! Reine Funktion ohne Form-Mutation. Das Cachen zwischen Ticks übernimmt
//! der Aufrufer (`PreviewCache`).

use super::tools::common::{RandomJitter, RotationPlanner, SampleContext, SpacingPlanner};
use super::tools::{FitConstraints, PathShape, ShapeTool};
use crate::core::{PlacementPoint, PrefabBounds, TerrainSampler};
use crate::shared::options::PlacementSettings;
use glam::Vec3;

/// Eingabe einer Neuberechnung neben Form und Einstellungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewRequest {
    /// Cursor-Weltposition
    pub cursor: Vec3,
    /// Winkel-Raster aktiv (Modifier gehalten)
    pub snap_angle: bool,
    /// Seed der Zufallsrotation (wechselt nur per Timer)
    pub rotation_seed: u64,
}

impl PreviewRequest {
    pub fn new(cursor: Vec3) -> Self {
        Self {
            cursor,
            snap_angle: false,
            rotation_seed: 0,
        }
    }
}

/// Berechnet die komplette Punktliste für eine Form.
///
/// Leer, solange kein Startpunkt gesetzt ist. Ein für das Prefab ungültiger
/// Abstands-Modus fällt auf `Manual` zurück; in Zaun/W2W ist jeder Jitter aus.
pub fn generate_points(
    shape: &PathShape,
    request: &PreviewRequest,
    settings: &PlacementSettings,
    bounds: &PrefabBounds,
    terrain: &dyn TerrainSampler,
) -> Vec<PlacementPoint> {
    if !shape.state().has_start {
        return Vec::new();
    }
    let constraints = FitConstraints::from_settings(settings, request.snap_angle);
    let Some(fitted) = shape.recompute(request.cursor, &constraints) else {
        return Vec::new();
    };

    let spacing = SpacingPlanner::new(settings, bounds);
    let seed_length = fitted.seed_length();
    let jitter = if spacing.is_aligned() {
        RandomJitter::disabled(seed_length, settings)
    } else {
        RandomJitter::new(seed_length, settings)
    };
    let rotation = RotationPlanner::new(settings, spacing.mode(), request.rotation_seed);

    let mut ctx = SampleContext::new(spacing, rotation, jitter, terrain);
    fitted.sample(&mut ctx);
    if ctx.skipped() > 0 {
        log::debug!("{} entartete Abtastpunkte übersprungen", ctx.skipped());
    }
    ctx.finish()
}
