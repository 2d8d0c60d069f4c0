//! Lifecycle-Methoden der geraden Strecke (ShapeTool-Implementierung).

use super::super::common::{PathState, ShapeCarryOver};
use super::super::{ClickOutcome, DragTarget, FitConstraints, FittedPath, ShapeTool};
use super::state::StraightLine;
use crate::core::{CubicBezier, ShapeKind};
use glam::Vec3;

impl ShapeTool for StraightLine {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Straight
    }

    fn state(&self) -> PathState {
        PathState::from_points(self.start, None, self.end)
    }

    fn handle_click(&mut self, position: Vec3, _constraints: &FitConstraints) -> ClickOutcome {
        if self.start.is_none() {
            self.start = Some(position);
            ClickOutcome::Initial
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
        match (target, self.start.as_mut()) {
            (DragTarget::Start, Some(start)) => {
                *start = position;
                true
            }
            _ => false,
        }
    }

    fn drag_targets(&self) -> Vec<(DragTarget, Vec3)> {
        self.start
            .map(|start| (DragTarget::Start, start))
            .into_iter()
            .collect()
    }

    fn recompute(&self, cursor: Vec3, _constraints: &FitConstraints) -> Option<FittedPath> {
        let start = self.start?;
        Some(FittedPath::Line {
            start,
            end: self.end.unwrap_or(cursor),
        })
    }

    fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }

    fn finalize(&mut self) -> ShapeCarryOver {
        let carry = ShapeCarryOver {
            start: self.end.or(self.start),
            exit_tangent: match (self.start, self.end) {
                (Some(start), Some(end)) => Some(end - start),
                _ => None,
            },
        };
        *self = Self::with_carry_over(carry);
        carry
    }

    fn overlay_curves(&self, cursor: Vec3, _constraints: &FitConstraints) -> Vec<CubicBezier> {
        match self.start {
            Some(start) => vec![CubicBezier::line(start, self.end.unwrap_or(cursor))],
            None => Vec::new(),
        }
    }
}
