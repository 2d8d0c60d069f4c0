//! Abtastung einer geraden Strecke.

use super::super::common::SampleContext;
use crate::core::bezier::xz;
use glam::Vec3;

/// Punkt im horizontalen Abstand `distance` ab `start` (extrapoliert über das Ende hinaus).
pub(crate) fn point_on_line(start: Vec3, end: Vec3, length: f32, distance: f32) -> Vec3 {
    if length <= f32::EPSILON {
        return start;
    }
    start.lerp(end, distance / length)
}

/// Expandiert die Strecke `start → end` in Platzierungspunkte.
///
/// Manual/FullLength: Distanzen ab Start, Seitenversatz-Jitter quer zur Strecke.
/// Zaun/W2W: Pivot-Distanzen, Yaw aus der Paar-Mitte benachbarter Pivots.
pub(crate) fn sample_line(start: Vec3, end: Vec3, ctx: &mut SampleContext<'_>) {
    let direction = end - start;
    let length = xz(direction).length();

    if ctx.spacing.is_aligned() {
        let pivots: Vec<Vec3> = ctx
            .spacing
            .pivot_distances(length)
            .into_iter()
            .map(|d| point_on_line(start, end, length, d))
            .collect();
        let yaws = ctx.rotation.aligned_yaws(&pivots, false, direction);
        for (position, yaw) in pivots.into_iter().zip(yaws) {
            if !ctx.emit(position, yaw) {
                break;
            }
        }
        return;
    }

    let distances = ctx.spacing.line_distances(length, &mut ctx.jitter);
    for d in distances {
        let position = point_on_line(start, end, length, d);
        let yaw = ctx.rotation.yaw(direction);
        if !ctx.emit_with_offset(position, direction, yaw) {
            break;
        }
    }
}
