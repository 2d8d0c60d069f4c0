//! Pfadformen des Linien-Werkzeugs als Tagged-Enum mit gemeinsamer Schnittstelle.
//!
//! Jede Form implementiert `ShapeTool` und liefert bei `recompute` ein
//! `FittedPath` als reine Geometrie, die anschließend über einen
//! `SampleContext` in Platzierungspunkte expandiert wird.

/// Kreis um einen festen Mittelpunkt.
pub mod circle;
/// Gemeinsame Bausteine: Lifecycle, Abstand, Rotation, Jitter, Ausgabe.
pub mod common;
/// Kubische Kurve über einen Knickpunkt.
pub mod elbow_curve;
/// Parallelogramm-Raster aus Basis- und Seitenachse.
pub mod grid;
/// ShapeTool-Trait: Schnittstelle für alle Pfadformen.
mod shape_tool;
/// Gerade Strecke Start → Cursor.
pub mod straight_line;

pub use circle::CircleShape;
pub use elbow_curve::ElbowCurve;
pub use grid::GridShape;
pub use shape_tool::ShapeTool;
pub use straight_line::StraightLine;

use crate::core::bezier::xz;
use crate::core::{CubicBezier, ShapeKind};
use crate::shared::options::{PlacementSettings, ANGLE_SNAP_STEP_DEG};
use common::{PathState, SampleContext, ShapeCarryOver};
use glam::Vec3;

// ── Typen ────────────────────────────────────────────────────────

/// Rückgabe von `handle_click`, steuert den Form-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Startpunkt (bzw. Mittelpunkt) gesetzt
    Initial,
    /// Knickpunkt gesetzt, weiterer Klick nötig
    Midpoint,
    /// Alle Punkte gesetzt, Objekte werden platziert
    Placed,
}

/// Verschiebbarer Kontrollpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// Startpunkt bzw. Kreismittelpunkt
    Start,
    /// Knickpunkt
    Elbow,
}

/// Eingabe-Constraints für das Anpassen der Geometrie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConstraints {
    /// Winkel-Raster aktiv (Modifier-Taste gehalten)
    pub snap_angle: bool,
    /// Raster-Schritt in Radiant
    pub angle_snap_step: f32,
    /// Knickpunkt an der Austrittstangente des Vorgängers ausrichten
    pub continue_tangent: bool,
}

impl Default for FitConstraints {
    fn default() -> Self {
        Self {
            snap_angle: false,
            angle_snap_step: ANGLE_SNAP_STEP_DEG.to_radians(),
            continue_tangent: true,
        }
    }
}

impl FitConstraints {
    /// Constraints aus den Einstellungen plus aktuellem Modifier-Zustand.
    pub fn from_settings(settings: &PlacementSettings, snap_angle: bool) -> Self {
        Self {
            snap_angle,
            angle_snap_step: settings.angle_snap_step_deg.to_radians(),
            continue_tangent: settings.continue_tangent,
        }
    }
}

/// Für eine Cursor-Position angepasste Pfadgeometrie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FittedPath {
    /// Gerade Strecke
    Line { start: Vec3, end: Vec3 },
    /// Kubische Bézier-Kurve
    Curve(CubicBezier),
    /// Vollkreis; `start_angle` zeigt auf den Cursor
    Circle {
        center: Vec3,
        radius: f32,
        start_angle: f32,
    },
    /// Parallelogramm Start → Knick → Ende
    Grid { start: Vec3, elbow: Vec3, end: Vec3 },
}

impl FittedPath {
    /// Länge bzw. Radius, aus der der Jitter-Seed abgeleitet wird.
    pub fn seed_length(&self) -> f32 {
        match self {
            FittedPath::Line { start, end } => xz(*end - *start).length(),
            FittedPath::Curve(curve) => curve.length(),
            FittedPath::Circle { radius, .. } => *radius,
            FittedPath::Grid { start, elbow, end } => {
                xz(*elbow - *start).length() + xz(*end - *elbow).length()
            }
        }
    }

    /// Expandiert die Geometrie in Platzierungspunkte.
    pub fn sample(&self, ctx: &mut SampleContext<'_>) {
        match *self {
            FittedPath::Line { start, end } => straight_line::sample_line(start, end, ctx),
            FittedPath::Curve(ref curve) => elbow_curve::sample_curve(curve, ctx),
            FittedPath::Circle {
                center,
                radius,
                start_angle,
            } => circle::sample_circle(center, radius, start_angle, ctx),
            FittedPath::Grid { start, elbow, end } => grid::sample_grid(start, elbow, end, ctx),
        }
    }
}

// ── PathShape ────────────────────────────────────────────────────

/// Aktive Pfadform. Genau eine Instanz pro Werkzeug-Sitzung.
#[derive(Debug, Clone, PartialEq)]
pub enum PathShape {
    Straight(StraightLine),
    ElbowCurve(ElbowCurve),
    Circle(CircleShape),
    Grid(GridShape),
}

macro_rules! dispatch {
    ($self:expr, $shape:ident => $body:expr) => {
        match $self {
            PathShape::Straight($shape) => $body,
            PathShape::ElbowCurve($shape) => $body,
            PathShape::Circle($shape) => $body,
            PathShape::Grid($shape) => $body,
        }
    };
}

impl PathShape {
    /// Leere Form des gegebenen Typs.
    pub fn new(kind: ShapeKind) -> Self {
        Self::builder(kind).build()
    }

    /// Builder für eine Form mit optionaler Übergabe vom Vorgänger.
    pub fn builder(kind: ShapeKind) -> ShapeBuilder {
        ShapeBuilder {
            kind,
            carry: ShapeCarryOver::default(),
        }
    }

    /// Nächster verschiebbarer Kontrollpunkt innerhalb `radius` (XZ-Abstand).
    pub fn pick_drag_target(&self, position: Vec3, radius: f32) -> Option<DragTarget> {
        self.drag_targets()
            .into_iter()
            .map(|(target, point)| (target, common::geometry::xz_distance(point, position)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(target, _)| target)
    }
}

impl ShapeTool for PathShape {
    fn kind(&self) -> ShapeKind {
        dispatch!(self, shape => shape.kind())
    }

    fn state(&self) -> PathState {
        dispatch!(self, shape => shape.state())
    }

    fn handle_click(&mut self, position: Vec3, constraints: &FitConstraints) -> ClickOutcome {
        dispatch!(self, shape => shape.handle_click(position, constraints))
    }

    fn handle_drag(
        &mut self,
        target: DragTarget,
        position: Vec3,
        constraints: &FitConstraints,
    ) -> bool {
        dispatch!(self, shape => shape.handle_drag(target, position, constraints))
    }

    fn drag_targets(&self) -> Vec<(DragTarget, Vec3)> {
        dispatch!(self, shape => shape.drag_targets())
    }

    fn recompute(&self, cursor: Vec3, constraints: &FitConstraints) -> Option<FittedPath> {
        dispatch!(self, shape => shape.recompute(cursor, constraints))
    }

    fn reset(&mut self) {
        dispatch!(self, shape => shape.reset())
    }

    fn finalize(&mut self) -> ShapeCarryOver {
        dispatch!(self, shape => shape.finalize())
    }

    fn overlay_curves(&self, cursor: Vec3, constraints: &FitConstraints) -> Vec<CubicBezier> {
        dispatch!(self, shape => shape.overlay_curves(cursor, constraints))
    }
}

/// Baut eine `PathShape`, optional mit Übergabe vom vorigen Segment.
#[derive(Debug, Clone, Copy)]
pub struct ShapeBuilder {
    kind: ShapeKind,
    carry: ShapeCarryOver,
}

impl ShapeBuilder {
    /// Übernimmt Startpunkt und Austrittstangente des Vorgängers.
    pub fn carry_over(mut self, carry: ShapeCarryOver) -> Self {
        self.carry = carry;
        self
    }

    pub fn build(self) -> PathShape {
        match self.kind {
            ShapeKind::Straight => PathShape::Straight(StraightLine::with_carry_over(self.carry)),
            ShapeKind::ElbowCurve => {
                PathShape::ElbowCurve(ElbowCurve::with_carry_over(self.carry))
            }
            ShapeKind::Circle => PathShape::Circle(CircleShape::with_carry_over(self.carry)),
            ShapeKind::Grid => PathShape::Grid(GridShape::with_carry_over(self.carry)),
        }
    }
}
