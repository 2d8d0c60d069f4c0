//! Lifecycle-Methoden der Knick-Kurve (ShapeTool-Implementierung).

use super::super::common::{PathState, ShapeCarryOver};
use super::super::{ClickOutcome, DragTarget, FitConstraints, FittedPath, ShapeTool};
use super::geometry::{constrain_elbow, constrain_end, fit_curve};
use super::state::ElbowCurve;
use crate::core::{CubicBezier, ShapeKind};
use glam::Vec3;

impl ElbowCurve {
    /// Knickpunkt-Kandidat für eine Cursor-Position.
    fn elbow_candidate(&self, start: Vec3, cursor: Vec3, constraints: &FitConstraints) -> Vec3 {
        let exit = self
            .previous_exit
            .filter(|_| constraints.continue_tangent);
        constrain_elbow(start, cursor, exit)
    }
}

impl ShapeTool for ElbowCurve {
    fn kind(&self) -> ShapeKind {
        ShapeKind::ElbowCurve
    }

    fn state(&self) -> PathState {
        PathState::from_points(self.start, self.elbow, self.end)
    }

    fn handle_click(&mut self, position: Vec3, constraints: &FitConstraints) -> ClickOutcome {
        match (self.start, self.elbow) {
            (None, _) => {
                self.start = Some(position);
                ClickOutcome::Initial
            }
            (Some(start), None) => {
                self.elbow = Some(self.elbow_candidate(start, position, constraints));
                ClickOutcome::Midpoint
            }
            (Some(start), Some(elbow)) => {
                self.end = Some(constrain_end(start, elbow, position, constraints));
                ClickOutcome::Placed
            }
        }
    }

    fn handle_drag(
        &mut self,
        target: DragTarget,
        position: Vec3,
        constraints: &FitConstraints,
    ) -> bool {
        match (target, self.start) {
            (DragTarget::Start, Some(_)) => {
                self.start = Some(position);
                true
            }
            // Gezogener Knick bleibt auf der Austrittstangente der Vorgänger-Kurve
            (DragTarget::Elbow, Some(start)) if self.elbow.is_some() => {
                self.elbow = Some(self.elbow_candidate(start, position, constraints));
                true
            }
            _ => false,
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

    fn recompute(&self, cursor: Vec3, constraints: &FitConstraints) -> Option<FittedPath> {
        let start = self.start?;
        match self.elbow {
            // Ohne Knick: Gerade zum (ggf. projizierten) Knick-Kandidaten
            None => Some(FittedPath::Line {
                start,
                end: self.elbow_candidate(start, cursor, constraints),
            }),
            Some(elbow) => {
                let end = self
                    .end
                    .unwrap_or_else(|| constrain_end(start, elbow, cursor, constraints));
                Some(FittedPath::Curve(fit_curve(start, elbow, end)))
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn finalize(&mut self) -> ShapeCarryOver {
        let carry = match (self.elbow, self.end) {
            (Some(elbow), Some(end)) => ShapeCarryOver {
                start: Some(end),
                exit_tangent: Some(end - elbow),
            },
            _ => ShapeCarryOver {
                start: self.start,
                exit_tangent: self.previous_exit,
            },
        };
        log::debug!("Knick-Kurve abgeschlossen, Übergabe: {:?}", carry);
        *self = Self::with_carry_over(carry);
        carry
    }

    fn overlay_curves(&self, cursor: Vec3, constraints: &FitConstraints) -> Vec<CubicBezier> {
        match self.recompute(cursor, constraints) {
            Some(FittedPath::Line { start, end }) => vec![CubicBezier::line(start, end)],
            Some(FittedPath::Curve(curve)) => vec![curve],
            _ => Vec::new(),
        }
    }
}
