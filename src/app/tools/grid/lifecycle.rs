//! Lifecycle-Methoden des Rasters (ShapeTool-Implementierung).

use super::super::common::{PathState, ShapeCarryOver};
use super::super::{ClickOutcome, DragTarget, FitConstraints, FittedPath, ShapeTool};
use super::state::GridShape;
use crate::core::{CubicBezier, ShapeKind};
use glam::Vec3;

impl ShapeTool for GridShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Grid
    }

    fn state(&self) -> PathState {
        PathState::from_points(self.start, self.elbow, self.end)
    }

    fn handle_click(&mut self, position: Vec3, _constraints: &FitConstraints) -> ClickOutcome {
        if self.start.is_none() {
            self.start = Some(position);
            ClickOutcome::Initial
        } else if self.elbow.is_none() {
            self.elbow = Some(position);
            ClickOutcome::Midpoint
        } else {
            self.end = Some(position);
            ClickOutcome::Placed
        }
    }

    fn handle_drag(
        &mut self,
        target: DragTarget,
        position: Vec3,
        _constraints: &FitConstraints,
    ) -> bool {
        let slot = match target {
            DragTarget::Start => self.start.as_mut(),
            DragTarget::Elbow => self.elbow.as_mut(),
        };
        if let Some(point) = slot {
            *point = position;
            true
        } else {
            false
        }
    }

    fn drag_targets(&self) -> Vec<(DragTarget, Vec3)> {
        [
            self.start.map(|p| (DragTarget::Start, p)),
            self.elbow.map(|p| (DragTarget::Elbow, p)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn recompute(&self, cursor: Vec3, _constraints: &FitConstraints) -> Option<FittedPath> {
        let start = self.start?;
        // Vor dem zweiten Klick: einzeilige Basis bis zum Cursor
        let elbow = self.elbow.unwrap_or(cursor);
        let end = self.end.unwrap_or(cursor);
        Some(FittedPath::Grid { start, elbow, end })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn finalize(&mut self) -> ShapeCarryOver {
        let carry = ShapeCarryOver {
            start: self.end.or(self.start),
            exit_tangent: None,
        };
        *self = Self::with_carry_over(carry);
        carry
    }

    fn overlay_curves(&self, cursor: Vec3, constraints: &FitConstraints) -> Vec<CubicBezier> {
        let Some(FittedPath::Grid { start, elbow, end }) = self.recompute(cursor, constraints)
        else {
            return Vec::new();
        };
        let opposite = start + end - elbow;
        vec![
            CubicBezier::line(start, elbow),
            CubicBezier::line(elbow, end),
            CubicBezier::line(end, opposite),
            CubicBezier::line(opposite, start),
        ]
    }
}
