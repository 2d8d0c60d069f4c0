//! Zentrale Konfiguration des Linien-Werkzeugs.
//!
//! `PlacementSettings` ist die flache Einstellungs-Oberfläche, die zwischen zwei
//! Ticks neu geladen werden darf. Ungültige Werte werden an der Mutations-Grenze
//! (Setter, `sanitize`) geklemmt; die Abtastung geht immer von gültigen Werten aus.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{PrefabBounds, RotationMode, ShapeKind, SpacingMode};
use serde::{Deserialize, Serialize};

// ── Abstand ─────────────────────────────────────────────────────────

/// Standard-Abstand zwischen zwei Objekten (Meter).
pub const DEFAULT_SPACING: f32 = 10.0;
/// Kleinster zulässiger Abstand (Meter).
pub const MIN_SPACING: f32 = 0.1;
/// Anteil des Abstands, innerhalb dessen der letzte Teilschritt aufs Ende rastet.
pub const SNAP_END_FRACTION: f32 = 0.02;
/// Maximaler Spacing-Jitter als Anteil des Abstands.
pub const MAX_RANDOM_SPACING_FRACTION: f32 = 0.9;
/// Restlücke (Meter), ab der im Zaun-Modus ein Korrekturpunkt angehängt wird.
pub const DEFAULT_FENCE_END_TOLERANCE: f32 = 0.001;
/// Obergrenze für Punkte pro Neuberechnung.
pub const MAX_PLACEMENT_POINTS: usize = 20_000;

// ── Rotation / Eingabe ──────────────────────────────────────────────

/// Winkel-Raster (Grad) für den Knickpunkt bei gedrückter Modifier-Taste.
pub const ANGLE_SNAP_STEP_DEG: f32 = 15.0;
/// Intervall (Sekunden), nach dem die Zufallsrotation neu gewürfelt wird.
pub const RANDOM_ROTATION_INTERVAL_SECS: f32 = 3.0;

/// Alle zur Laufzeit änderbaren Platzierungs-Einstellungen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Aktive Pfadform
    pub shape: ShapeKind,
    /// Abstands-Policy
    pub spacing_mode: SpacingMode,
    /// Rotations-Policy
    pub rotation_mode: RotationMode,
    /// Gewünschter Abstand in Metern
    pub spacing: f32,
    /// Maximale Abweichung des Abstands (±, Meter)
    pub random_spacing_max: f32,
    /// Maximaler seitlicher Versatz (±, Meter)
    pub random_offset_max: f32,
    /// Rotation in Grad (absolut bzw. Offset zur Pfadrichtung)
    pub rotation_deg: f32,
    /// Erscheinungsvariante pro Objekt würfeln
    pub randomize_appearance: bool,
    /// Fester Seed (Erscheinung und Geometrie-Jitter)
    pub fixed_seed: i32,

    // ── Feintuning ──────────────────────────────────────────────
    /// Restlücke, ab der im Zaun-/W2W-Modus ein Korrekturpunkt folgt
    pub fence_end_tolerance: f32,
    /// Einrast-Anteil für den letzten Teilschritt (Manual)
    pub snap_end_fraction: f32,
    /// Winkel-Raster für den Knickpunkt (Grad)
    pub angle_snap_step_deg: f32,
    /// Timer für die Zufallsrotation in Sekunden
    pub random_rotation_interval_secs: f32,
    /// Verkettete Kurven an der Austrittstangente des Vorgängers ausrichten
    pub continue_tangent: bool,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Straight,
            spacing_mode: SpacingMode::Manual,
            rotation_mode: RotationMode::Relative,
            spacing: DEFAULT_SPACING,
            random_spacing_max: 0.0,
            random_offset_max: 0.0,
            rotation_deg: 0.0,
            randomize_appearance: false,
            fixed_seed: 0,
            fence_end_tolerance: DEFAULT_FENCE_END_TOLERANCE,
            snap_end_fraction: SNAP_END_FRACTION,
            angle_snap_step_deg: ANGLE_SNAP_STEP_DEG,
            random_rotation_interval_secs: RANDOM_ROTATION_INTERVAL_SECS,
            continue_tangent: true,
        }
    }
}

/// Ersetzt NaN/Inf durch `fallback`.
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

impl PlacementSettings {
    /// Kleinster gültiger Abstand für den aktuellen Modus.
    ///
    /// Im Zaun-Modus darf der Abstand nicht unter der Prefab-Tiefe liegen.
    pub fn min_spacing(&self, bounds: &PrefabBounds) -> f32 {
        match self.spacing_mode {
            SpacingMode::FenceMode => bounds.z.extent().max(MIN_SPACING),
            _ => MIN_SPACING,
        }
    }

    /// Setzt den Abstand (geklemmt) und zieht den Spacing-Jitter nach.
    pub fn set_spacing(&mut self, spacing: f32, bounds: &PrefabBounds) {
        let min = self.min_spacing(bounds);
        let clamped = finite_or(spacing, self.spacing).max(min);
        if clamped != spacing {
            log::warn!("Abstand {} ungültig, geklemmt auf {:.3}", spacing, clamped);
        }
        self.spacing = clamped;
        self.set_random_spacing_max(self.random_spacing_max);
    }

    /// Setzt die Abstands-Policy.
    ///
    /// Nicht unterstützte Modi (Prefab ohne Ausdehnung in der benötigten Achse)
    /// werden verworfen: der bisherige Modus bleibt, sofern er selbst gültig ist,
    /// sonst `Manual`. Gibt den tatsächlich aktiven Modus zurück.
    pub fn set_spacing_mode(&mut self, mode: SpacingMode, bounds: &PrefabBounds) -> SpacingMode {
        if mode.is_supported_by(bounds) {
            self.spacing_mode = mode;
        } else {
            let fallback = if self.spacing_mode.is_supported_by(bounds) {
                self.spacing_mode
            } else {
                SpacingMode::Manual
            };
            log::warn!(
                "{:?} für dieses Prefab nicht möglich, verwende {:?}",
                mode,
                fallback
            );
            self.spacing_mode = fallback;
        }
        let spacing = self.spacing;
        self.set_spacing(spacing, bounds);
        self.spacing_mode
    }

    /// Setzt den maximalen Spacing-Jitter (0 ..= 90 % des Abstands).
    pub fn set_random_spacing_max(&mut self, value: f32) {
        let max = self.spacing * MAX_RANDOM_SPACING_FRACTION;
        self.random_spacing_max = finite_or(value, 0.0).clamp(0.0, max);
    }

    /// Setzt den maximalen seitlichen Versatz (≥ 0).
    pub fn set_random_offset_max(&mut self, value: f32) {
        self.random_offset_max = finite_or(value, 0.0).max(0.0);
    }

    /// Setzt die Rotation in Grad, normiert auf [0, 360).
    pub fn set_rotation_deg(&mut self, degrees: f32) {
        self.rotation_deg = finite_or(degrees, 0.0).rem_euclid(360.0);
    }

    /// Bringt alle Werte in einen gültigen Zustand (nach Laden oder Prefab-Wechsel).
    pub fn sanitize(&mut self, bounds: &PrefabBounds) {
        let mode = self.spacing_mode;
        if !mode.is_supported_by(bounds) {
            // Kein gültiger Vorgänger bekannt → Manual
            self.spacing_mode = SpacingMode::Manual;
            log::warn!("{:?} für dieses Prefab nicht möglich, verwende Manual", mode);
        }
        let spacing = finite_or(self.spacing, DEFAULT_SPACING);
        self.set_spacing(spacing, bounds);
        self.set_random_offset_max(self.random_offset_max);
        self.set_rotation_deg(self.rotation_deg);
        self.fence_end_tolerance =
            finite_or(self.fence_end_tolerance, DEFAULT_FENCE_END_TOLERANCE).max(0.0);
        self.snap_end_fraction = finite_or(self.snap_end_fraction, SNAP_END_FRACTION).clamp(0.0, 0.5);
        self.angle_snap_step_deg =
            finite_or(self.angle_snap_step_deg, ANGLE_SNAP_STEP_DEG).clamp(1.0, 90.0);
        self.random_rotation_interval_secs =
            finite_or(self.random_rotation_interval_secs, RANDOM_ROTATION_INTERVAL_SECS).max(0.1);
    }

    /// Lädt Einstellungen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    log::info!("Einstellungen geladen aus: {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Einstellungs-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Einstellungs-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Einstellungen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Einstellungen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds1;

    fn fence_bounds() -> PrefabBounds {
        PrefabBounds::new(Bounds1::default(), Bounds1::new(-2.0, 2.0))
    }

    #[test]
    fn test_spacing_clamped_to_minimum() {
        let mut s = PlacementSettings::default();
        s.set_spacing(-5.0, &PrefabBounds::default());
        assert_eq!(s.spacing, MIN_SPACING);
        s.set_spacing(f32::NAN, &PrefabBounds::default());
        assert_eq!(s.spacing, MIN_SPACING);
    }

    #[test]
    fn test_fence_spacing_not_below_footprint() {
        let mut s = PlacementSettings::default();
        s.set_spacing_mode(SpacingMode::FenceMode, &fence_bounds());
        s.set_spacing(1.0, &fence_bounds());
        assert_eq!(s.spacing, 4.0);
    }

    #[test]
    fn test_unsupported_mode_keeps_previous() {
        let mut s = PlacementSettings::default();
        let bounds = fence_bounds();
        assert_eq!(
            s.set_spacing_mode(SpacingMode::FullLength, &bounds),
            SpacingMode::FullLength
        );
        // Keine X-Ausdehnung → W2W abgelehnt, FullLength bleibt
        assert_eq!(
            s.set_spacing_mode(SpacingMode::W2WMode, &bounds),
            SpacingMode::FullLength
        );
    }

    #[test]
    fn test_sanitize_falls_back_to_manual() {
        let mut s = PlacementSettings {
            spacing_mode: SpacingMode::FenceMode,
            ..Default::default()
        };
        s.sanitize(&PrefabBounds::default());
        assert_eq!(s.spacing_mode, SpacingMode::Manual);
    }

    #[test]
    fn test_random_spacing_follows_spacing() {
        let mut s = PlacementSettings::default();
        s.set_random_spacing_max(50.0);
        assert_eq!(s.random_spacing_max, 9.0);
        s.set_spacing(2.0, &PrefabBounds::default());
        assert!((s.random_spacing_max - 1.8).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut s = PlacementSettings::default();
        s.set_rotation_deg(-90.0);
        assert_eq!(s.rotation_deg, 270.0);
    }

    #[test]
    fn test_toml_roundtrip_with_missing_fields() {
        let parsed: PlacementSettings =
            toml::from_str("spacing = 4.5\nspacing_mode = \"FullLength\"").expect("gültiges TOML");
        assert_eq!(parsed.spacing, 4.5);
        assert_eq!(parsed.spacing_mode, SpacingMode::FullLength);
        assert_eq!(parsed.angle_snap_step_deg, ANGLE_SNAP_STEP_DEG);
    }
}
