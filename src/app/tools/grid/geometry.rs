//! Abtastung des Parallelogramm-Rasters.

use super::super::common::geometry::bearing;
use super::super::common::{GridAxis, SampleContext};
use crate::core::bezier::xz;
use crate::core::SpacingMode;
use glam::Vec3;

/// Gitterpunkt für die Lerp-Faktoren `base` (Start → Knick) und `side` (Knick → Ende).
pub fn lattice_point(start: Vec3, elbow: Vec3, end: Vec3, base: f32, side: f32) -> Vec3 {
    start.lerp(elbow, base) + elbow.lerp(end, side) - elbow
}

fn in_unit_range(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Expandiert das Raster zeilenweise (Seitenachse außen, Basisachse innen).
///
/// Zaun richtet alle Objekte entlang der Basis aus, W2W quer zur Seitenachse
/// (bei entarteter Seitenachse entlang der Basis).
pub(crate) fn sample_grid(start: Vec3, elbow: Vec3, end: Vec3, ctx: &mut SampleContext<'_>) {
    let base_dir = elbow - start;
    let side_dir = end - elbow;
    let base = ctx
        .spacing
        .grid_axis_lerps(xz(base_dir).length(), GridAxis::Base, &mut ctx.jitter);
    let side = ctx
        .spacing
        .grid_axis_lerps(xz(side_dir).length(), GridAxis::Side, &mut ctx.jitter);

    let aligned_yaw = match ctx.spacing.mode() {
        SpacingMode::FenceMode => Some(bearing(base_dir)),
        SpacingMode::W2WMode => Some(
            ctx.rotation
                .aligned_yaw(side_dir)
                .or_else(|| bearing(base_dir)),
        ),
        SpacingMode::Manual | SpacingMode::FullLength => None,
    };

    for &s in side.iter().filter(|s| in_unit_range(**s)) {
        for &b in base.iter().filter(|b| in_unit_range(**b)) {
            let position = lattice_point(start, elbow, end, b, s);
            let keep_going = match aligned_yaw {
                Some(yaw) => ctx.emit(position, yaw),
                None => {
                    let yaw = ctx.rotation.yaw(base_dir);
                    ctx.emit_with_offset(position, base_dir, yaw)
                }
            };
            if !keep_going {
                return;
            }
        }
    }
}
