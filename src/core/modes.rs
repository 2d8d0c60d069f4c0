//! Policy-Enums der Platzierung: Form, Abstand, Rotation.

use super::PrefabBounds;
use serde::{Deserialize, Serialize};

/// Pfadform des Werkzeugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Gerade Strecke Start → Cursor
    #[default]
    Straight,
    /// Kubische Kurve über einen Knickpunkt
    ElbowCurve,
    /// Vollkreis um einen Mittelpunkt
    Circle,
    /// Parallelogramm-Raster aus Basis- und Seitenachse
    Grid,
}

impl ShapeKind {
    /// Alle Formen in Anzeige-Reihenfolge.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Straight,
        ShapeKind::ElbowCurve,
        ShapeKind::Circle,
        ShapeKind::Grid,
    ];
}

/// Abstands-Policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpacingMode {
    /// Fester Abstand aus den Einstellungen
    #[default]
    Manual,
    /// Abstand so normiert, dass eine ganze Anzahl Schritte den Pfad exakt füllt
    FullLength,
    /// Stoß an Stoß entlang der Prefab-Z-Ausdehnung, ohne Zufall
    FenceMode,
    /// Seite an Seite entlang der Prefab-X-Ausdehnung, ohne Zufall
    W2WMode,
}

impl SpacingMode {
    /// True für die ausrichtungs-sensitiven Modi (Zaun, Wand-an-Wand).
    pub fn is_aligned(self) -> bool {
        matches!(self, SpacingMode::FenceMode | SpacingMode::W2WMode)
    }

    /// Prüft ob der Modus für das gegebene Prefab geometrisch sinnvoll ist.
    pub fn is_supported_by(self, bounds: &PrefabBounds) -> bool {
        match self {
            SpacingMode::Manual | SpacingMode::FullLength => true,
            SpacingMode::FenceMode => !bounds.z.is_empty(),
            SpacingMode::W2WMode => !bounds.x.is_empty(),
        }
    }
}

/// Rotations-Policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationMode {
    /// Alle Objekte teilen dieselbe Welt-Rotation
    Absolute,
    /// Rotation folgt der lokalen Pfad-Tangente
    #[default]
    Relative,
    /// Zufällige Rotation pro Objekt (per Timer neu gewürfelt)
    Random,
}
