//! Ausdehnung des gewählten Prefabs entlang seiner lokalen Achsen.

use serde::{Deserialize, Serialize};

/// Eindimensionales Intervall [min, max] (lokale Prefab-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds1 {
    pub min: f32,
    pub max: f32,
}

impl Bounds1 {
    /// Erstellt ein Intervall; vertauschte Grenzen werden sortiert.
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Symmetrisches Intervall [-half, half].
    pub fn centered(extent: f32) -> Self {
        let half = extent.abs() * 0.5;
        Self::new(-half, half)
    }

    /// Länge des Intervalls (0.0 bei ungültigen Werten).
    pub fn extent(&self) -> f32 {
        let extent = self.max - self.min;
        if extent.is_finite() {
            extent.max(0.0)
        } else {
            0.0
        }
    }

    /// True wenn das Intervall keine nutzbare Ausdehnung hat.
    pub fn is_empty(&self) -> bool {
        self.extent() < f32::EPSILON
    }
}

/// Prefab-Ausdehnung: `x` = seitlich, `z` = vorwärts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrefabBounds {
    /// Seitliche Ausdehnung (Wand-an-Wand-Modus)
    pub x: Bounds1,
    /// Ausdehnung in Blickrichtung (Zaun-Modus)
    pub z: Bounds1,
}

impl PrefabBounds {
    /// Erstellt Bounds aus beiden Achsen.
    pub fn new(x: Bounds1, z: Bounds1) -> Self {
        Self { x, z }
    }

    /// Um den Pivot zentrierte Box mit Breite `width` und Tiefe `depth`.
    pub fn centered(width: f32, depth: f32) -> Self {
        Self {
            x: Bounds1::centered(width),
            z: Bounds1::centered(depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_sorted_and_extent() {
        let b = Bounds1::new(2.0, -1.0);
        assert_eq!(b.min, -1.0);
        assert_eq!(b.max, 2.0);
        assert_eq!(b.extent(), 3.0);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(Bounds1::default().is_empty());
        assert!(Bounds1::new(f32::NAN, 1.0).is_empty());
        assert!(!PrefabBounds::centered(1.0, 2.0).z.is_empty());
    }
}
