//! Abstands-Planung: Pfadlänge → Folge von Abtast-Distanzen.
//!
//! Manual/FullLength liefern Distanzen ab dem Pfadstart, Zaun/W2W liefern
//! Pivot-Distanzen (Objektmittelpunkte), die um die Prefab-Ausdehnung nach
//! innen versetzt sind. Kreise bekommen eine Anzahl plus Winkelschritt.

use super::jitter::RandomJitter;
use crate::core::{Bounds1, PrefabBounds, SpacingMode};
use crate::shared::options::{
    PlacementSettings, DEFAULT_SPACING, MAX_PLACEMENT_POINTS, MIN_SPACING,
};
use std::f32::consts::{PI, TAU};

/// Achse eines Rasters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Start → Knickpunkt
    Base,
    /// Knickpunkt → Cursor
    Side,
}

/// Punktanzahl und Winkelschritt für einen Vollkreis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePlan {
    /// Anzahl Punkte auf dem Umfang (≥ 1)
    pub count: usize,
    /// Winkelschritt in Radiant (`2π / count`)
    pub increment: f32,
}

/// Berechnet Abtast-Distanzen für die aktive Abstands-Policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingPlanner {
    mode: SpacingMode,
    spacing: f32,
    bounds: PrefabBounds,
    end_tolerance: f32,
    snap_end_fraction: f32,
}

impl SpacingPlanner {
    /// Erstellt den Planer. Ein für das Prefab ungültiger Modus fällt auf `Manual` zurück.
    pub fn new(settings: &PlacementSettings, bounds: &PrefabBounds) -> Self {
        let mode = if settings.spacing_mode.is_supported_by(bounds) {
            settings.spacing_mode
        } else {
            log::debug!(
                "Abstands-Modus {:?} ohne passende Prefab-Ausdehnung, verwende Manual",
                settings.spacing_mode
            );
            SpacingMode::Manual
        };
        let spacing = if settings.spacing.is_finite() {
            settings.spacing.max(MIN_SPACING)
        } else {
            DEFAULT_SPACING
        };
        Self {
            mode,
            spacing,
            bounds: *bounds,
            end_tolerance: settings.fence_end_tolerance.max(0.0),
            snap_end_fraction: settings.snap_end_fraction.max(0.0),
        }
    }

    /// Tatsächlich verwendeter Modus (nach Fallback).
    pub fn mode(&self) -> SpacingMode {
        self.mode
    }

    pub fn is_aligned(&self) -> bool {
        self.mode.is_aligned()
    }

    /// Restlücke, ab der ein Korrektur-Pivot angehängt wird.
    pub fn end_tolerance(&self) -> f32 {
        self.end_tolerance
    }

    /// Prefab-Ausdehnung entlang der Ausrichtungs-Achse (Zaun: Z, W2W: X).
    pub fn footprint(&self) -> Bounds1 {
        match self.mode {
            SpacingMode::W2WMode => self.bounds.x,
            _ => self.bounds.z,
        }
    }

    /// Effektiver Schritt für eine Pfadlänge.
    pub fn step_for_length(&self, length: f32) -> f32 {
        match self.mode {
            SpacingMode::Manual => self.spacing,
            SpacingMode::FullLength => {
                if length <= f32::EPSILON {
                    return self.spacing;
                }
                length / full_length_count(length, self.spacing) as f32
            }
            SpacingMode::FenceMode | SpacingMode::W2WMode => self.footprint().extent(),
        }
    }

    /// Distanzen ab Pfadstart für Manual/FullLength (erster Eintrag immer 0).
    pub fn line_distances(&self, length: f32, jitter: &mut RandomJitter) -> Vec<f32> {
        if length.is_nan() || length <= f32::EPSILON {
            return vec![0.0];
        }
        match self.mode {
            SpacingMode::FullLength => {
                let count = full_length_count(length, self.spacing);
                let step = self.step_for_length(length);
                (0..=count)
                    .map(|i| {
                        if i == 0 {
                            0.0
                        } else if i == count {
                            length
                        } else {
                            (i as f32 * step + jitter.spacing_offset()).clamp(0.0, length)
                        }
                    })
                    .collect()
            }
            _ => self.manual_distances(length, jitter),
        }
    }

    /// Fester Schritt mit Einrasten aufs Ende.
    ///
    /// Ein letzter Teilschritt wird noch ausgegeben (auf `length` geklemmt),
    /// wenn er höchstens `snap_end_fraction · spacing` über das Ende hinausragt.
    fn manual_distances(&self, length: f32, jitter: &mut RandomJitter) -> Vec<f32> {
        let snap = self.snap_end_fraction * self.spacing;
        let mut out = vec![0.0];
        let mut d = 0.0f32;
        while out.len() < MAX_PLACEMENT_POINTS {
            let next = d + jitter.apply_step(self.spacing);
            if next > length + snap {
                break;
            }
            out.push(next.min(length));
            if next >= length {
                break;
            }
            d = next;
        }
        out
    }

    /// Pivot-Distanzen für Zaun/W2W entlang einer geraden Strecke.
    pub fn pivot_distances(&self, length: f32) -> Vec<f32> {
        self.pivots_along(length, self.footprint())
    }

    /// Erster Pivot bei `-min`, reguläre Pivots bis `length - max`, danach
    /// höchstens ein Korrektur-Pivot eine Ausdehnung weiter.
    fn pivots_along(&self, length: f32, footprint: Bounds1) -> Vec<f32> {
        let step = footprint.extent();
        if step <= f32::EPSILON || !length.is_finite() {
            return Vec::new();
        }
        let first = -footprint.min;
        let limit = length - footprint.max;

        let mut out = Vec::new();
        for k in 0..MAX_PLACEMENT_POINTS {
            let d = first + k as f32 * step;
            if d > limit + self.end_tolerance {
                break;
            }
            out.push(d);
        }
        match out.last().copied() {
            None => out.push(first),
            Some(last) => {
                if limit - last > self.end_tolerance && out.len() < MAX_PLACEMENT_POINTS {
                    out.push(last + step);
                }
            }
        }
        out
    }

    /// Anzahl und Winkelschritt auf einem Kreis mit `radius`.
    ///
    /// `None` bei entartetem Radius.
    pub fn circle_plan(&self, radius: f32) -> Option<CirclePlan> {
        if !radius.is_finite() || radius <= f32::EPSILON {
            return None;
        }
        let circumference = TAU * radius;
        let raw = match self.mode {
            SpacingMode::Manual => (circumference / self.spacing).floor(),
            SpacingMode::FullLength => (circumference / self.spacing).round(),
            SpacingMode::FenceMode | SpacingMode::W2WMode => {
                // Sehne zwischen Nachbarn ≥ Ausdehnung
                let half_ratio = self.footprint().extent() / (2.0 * radius);
                if half_ratio >= 1.0 {
                    1.0
                } else {
                    (PI / half_ratio.asin()).floor()
                }
            }
        };
        let count = if raw.is_finite() { raw as usize } else { 1 };
        let count = count.clamp(1, MAX_PLACEMENT_POINTS);
        Some(CirclePlan {
            count,
            increment: TAU / count as f32,
        })
    }

    /// Lerp-Faktoren entlang einer Raster-Achse.
    ///
    /// Zaun richtet die Basis-Achse an der Z-Ausdehnung aus, W2W die
    /// Seiten-Achse an der X-Ausdehnung; die jeweils andere Achse nutzt den
    /// eingestellten Abstand. Faktoren außerhalb [0, 1] sind möglich.
    pub fn grid_axis_lerps(
        &self,
        length: f32,
        axis: GridAxis,
        jitter: &mut RandomJitter,
    ) -> Vec<f32> {
        if length.is_nan() || length <= f32::EPSILON {
            return vec![0.0];
        }
        let distances = match (self.mode, axis) {
            (SpacingMode::FenceMode, GridAxis::Base) => self.pivots_along(length, self.bounds.z),
            (SpacingMode::W2WMode, GridAxis::Side) => self.pivots_along(length, self.bounds.x),
            (SpacingMode::FenceMode | SpacingMode::W2WMode, _) => {
                self.manual_distances(length, jitter)
            }
            _ => self.line_distances(length, jitter),
        };
        distances.into_iter().map(|d| d / length).collect()
    }
}

/// `round(length / spacing)`, mindestens 1 und gedeckelt.
fn full_length_count(length: f32, spacing: f32) -> usize {
    let raw = (length / spacing).round();
    if raw.is_finite() {
        (raw as usize).clamp(1, MAX_PLACEMENT_POINTS - 1)
    } else {
        1
    }
}
