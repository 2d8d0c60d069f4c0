//! Lifecycle-Zustand der Pfadformen und Übergabe beim Verketten.

use glam::Vec3;

/// Lifecycle-Flags einer Form, abgeleitet aus den gesetzten Kontrollpunkten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathState {
    /// Startpunkt (bzw. Kreismittelpunkt) gesetzt
    pub has_start: bool,
    /// Knickpunkt gesetzt (nur Formen mit Elbow)
    pub has_elbow: bool,
    /// Alle Punkte gesetzt, bereit zum Platzieren
    pub has_all_points: bool,
}

impl PathState {
    /// Leitet die Flags aus den optionalen Kontrollpunkten ab.
    pub fn from_points(start: Option<Vec3>, elbow: Option<Vec3>, end: Option<Vec3>) -> Self {
        Self {
            has_start: start.is_some(),
            has_elbow: elbow.is_some(),
            has_all_points: start.is_some() && end.is_some(),
        }
    }
}

/// Zustand, den ein platziertes Segment an die nächste Form-Instanz übergibt.
///
/// Wird explizit in den Konstruktor der Nachfolge-Instanz gereicht
/// (`ShapeBuilder::carry_over`) statt in versteckten Feldern weiterzuleben.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeCarryOver {
    /// Neuer Startpunkt (bzw. beibehaltener Kreismittelpunkt)
    pub start: Option<Vec3>,
    /// Austrittstangente des vorigen Segments (für Kurven-Fortsetzung)
    pub exit_tangent: Option<Vec3>,
}
