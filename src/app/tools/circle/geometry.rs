//! Kreisgeometrie: exakte Abtastung und Bézier-Näherung für das Overlay.

use super::super::common::SampleContext;
use crate::core::CubicBezier;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Punkt auf dem Kreis bei Winkel `theta` (0 = +X, gegen den Uhrzeigersinn zu +Z).
pub fn point_on_circle(center: Vec3, radius: f32, theta: f32) -> Vec3 {
    center + Vec3::new(theta.cos(), 0.0, theta.sin()) * radius
}

/// Laufrichtung (Tangente) bei Winkel `theta`.
fn tangent_at(theta: f32) -> Vec3 {
    Vec3::new(-theta.sin(), 0.0, theta.cos())
}

/// Vier 90°-Bögen ab `start_angle` (Kontrollpunkt-Abstand k = 4/3·tan(π/8)·r).
pub fn circle_arcs(center: Vec3, radius: f32, start_angle: f32) -> Vec<CubicBezier> {
    if radius.is_nan() || radius <= f32::EPSILON {
        return Vec::new();
    }
    let k = 4.0 / 3.0 * (FRAC_PI_2 / 4.0).tan() * radius;
    (0..4)
        .map(|i| {
            let a0 = start_angle + i as f32 * FRAC_PI_2;
            let a1 = a0 + FRAC_PI_2;
            let p0 = point_on_circle(center, radius, a0);
            let p3 = point_on_circle(center, radius, a1);
            CubicBezier::new(p0, p0 + tangent_at(a0) * k, p3 - tangent_at(a1) * k, p3)
        })
        .collect()
}

/// Expandiert den Kreis in Platzierungspunkte, beginnend beim Cursor-Winkel.
///
/// Manual/FullLength: Winkel-Jitter = Abstands-Jitter / Radius, radialer
/// Versatz über den Seitenversatz. Zaun/W2W: geschlossene Pivot-Kette ohne Jitter.
pub(crate) fn sample_circle(
    center: Vec3,
    radius: f32,
    start_angle: f32,
    ctx: &mut SampleContext<'_>,
) {
    let Some(plan) = ctx.spacing.circle_plan(radius) else {
        log::trace!("Kreis mit entartetem Radius {} verworfen", radius);
        return;
    };

    if ctx.spacing.is_aligned() {
        let pivots: Vec<Vec3> = (0..plan.count)
            .map(|i| point_on_circle(center, radius, start_angle + i as f32 * plan.increment))
            .collect();
        let yaws = ctx
            .rotation
            .aligned_yaws(&pivots, true, tangent_at(start_angle));
        for (position, yaw) in pivots.into_iter().zip(yaws) {
            if !ctx.emit(position, yaw) {
                break;
            }
        }
        return;
    }

    for i in 0..plan.count {
        let theta = start_angle + i as f32 * plan.increment + ctx.jitter.spacing_offset() / radius;
        let tangent = tangent_at(theta);
        let yaw = ctx.rotation.yaw(tangent);
        if !ctx.emit_with_offset(point_on_circle(center, radius, theta), tangent, yaw) {
            break;
        }
    }
}
