//! Lifecycle-Methoden des Kreises (ShapeTool-Implementierung).
//!
//! Abweichend von den anderen Formen behält `finalize` den Mittelpunkt bei:
//! wiederholtes Platzieren zeichnet weitere Kreise um dasselbe Zentrum.

use super::super::common::geometry::xz_distance;
use super::super::common::{PathState, ShapeCarryOver};
use super::super::{ClickOutcome, DragTarget, FitConstraints, FittedPath, ShapeTool};
use super::geometry::circle_arcs;
use super::state::CircleShape;
use crate::core::{CubicBezier, ShapeKind};
use glam::Vec3;

impl ShapeTool for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn state(&self) -> PathState {
        PathState::from_points(self.center, None, self.rim)
    }

    fn handle_click(&mut self, position: Vec3, _constraints: &FitConstraints) -> ClickOutcome {
        if self.center.is_none() {
            self.center = Some(position);
            ClickOutcome::Initial
        } else {
            self.rim = Some(position);
            ClickOutcome::Placed
        }
    }

    fn handle_drag(
        &mut self,
        target: DragTarget,
        position: Vec3,
        _constraints: &FitConstraints,
    ) -> bool {
        match (target, self.center.as_mut()) {
            (DragTarget::Start, Some(center)) => {
                *center = position;
                true
            }
            _ => false,
        }
    }

    fn drag_targets(&self) -> Vec<(DragTarget, Vec3)> {
        self.center
            .map(|center| (DragTarget::Start, center))
            .into_iter()
            .collect()
    }

    fn recompute(&self, cursor: Vec3, _constraints: &FitConstraints) -> Option<FittedPath> {
        let center = self.center?;
        let rim = self.rim.unwrap_or(cursor);
        let radius = xz_distance(center, rim);
        Some(FittedPath::Circle {
            center,
            radius,
            start_angle: (rim.z - center.z).atan2(rim.x - center.x),
        })
    }

    fn reset(&mut self) {
        self.center = None;
        self.rim = None;
    }

    fn finalize(&mut self) -> ShapeCarryOver {
        let carry = ShapeCarryOver {
            start: self.center,
            exit_tangent: None,
        };
        *self = Self::with_carry_over(carry);
        carry
    }

    fn overlay_curves(&self, cursor: Vec3, constraints: &FitConstraints) -> Vec<CubicBezier> {
        match self.recompute(cursor, constraints) {
            Some(FittedPath::Circle {
                center,
                radius,
                start_angle,
            }) => circle_arcs(center, radius, start_angle),
            _ => Vec::new(),
        }
    }
}
