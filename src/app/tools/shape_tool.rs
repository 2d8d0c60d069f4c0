//! ShapeTool-Trait: gemeinsame Schnittstelle aller Pfadformen.

use super::common::{PathState, ShapeCarryOver};
use super::{ClickOutcome, DragTarget, FitConstraints, FittedPath};
use crate::core::{CubicBezier, ShapeKind};
use glam::Vec3;

/// Schnittstelle für alle Pfadformen (Gerade, Knick-Kurve, Kreis, Raster).
///
/// Formen halten nur ihre Kontrollpunkte. Die Abtastung läuft über das
/// zurückgegebene `FittedPath` und ist damit frei von Form-Zustand.
pub trait ShapeTool {
    /// Welche Form das ist
    fn kind(&self) -> ShapeKind;

    /// Aktuelle Lifecycle-Flags
    fn state(&self) -> PathState;

    /// Klick verarbeiten (Position mit Terrain-Höhe).
    fn handle_click(&mut self, position: Vec3, constraints: &FitConstraints) -> ClickOutcome;

    /// Bestehenden Kontrollpunkt verschieben. `false` wenn der Punkt nicht existiert.
    fn handle_drag(
        &mut self,
        target: DragTarget,
        position: Vec3,
        constraints: &FitConstraints,
    ) -> bool;

    /// Verschiebbare Kontrollpunkte mit ihrer Position.
    fn drag_targets(&self) -> Vec<(DragTarget, Vec3)>;

    /// Passt die Pfadgeometrie für die aktuelle Cursor-Position an.
    ///
    /// `None` solange kein Startpunkt gesetzt ist.
    fn recompute(&self, cursor: Vec3, constraints: &FitConstraints) -> Option<FittedPath>;

    /// Alle Kontrollpunkte verwerfen.
    fn reset(&mut self);

    /// Nach dem Platzieren: Folgezustand einnehmen und die Übergabe zurückgeben.
    fn finalize(&mut self) -> ShapeCarryOver;

    /// Kurven für das Overlay-Rendering.
    fn overlay_curves(&self, cursor: Vec3, constraints: &FitConstraints) -> Vec<CubicBezier>;
}
