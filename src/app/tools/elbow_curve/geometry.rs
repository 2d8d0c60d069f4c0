//! Kurven-Fit und Abtastung der Knick-Kurve.

use super::super::common::geometry::{angle_delta, bearing, direction_from_yaw, snap_angle};
use super::super::common::SampleContext;
use super::super::FitConstraints;
use crate::core::bezier::{
    arc_length, first_chord_crossing, step_back_by_distance, step_by_chord, step_by_distance, xz,
    CubicBezier,
};
use crate::shared::options::MAX_PLACEMENT_POINTS;
use glam::{Vec2, Vec3};

/// Kubische Kurve, deren Start- und Endtangente durch den Knickpunkt laufen.
///
/// Die inneren Kontrollpunkte liegen auf 2/3 der Strecken Start→Knick und
/// Ende→Knick (Grad-Erhöhung der quadratischen Kurve Start-Knick-Ende).
pub fn fit_curve(start: Vec3, elbow: Vec3, end: Vec3) -> CubicBezier {
    const TWO_THIRDS: f32 = 2.0 / 3.0;
    CubicBezier::new(
        start,
        start + (elbow - start) * TWO_THIRDS,
        end + (elbow - end) * TWO_THIRDS,
        end,
    )
}

/// Projiziert den Knick-Kandidaten auf den Strahl der vorigen Austrittstangente.
///
/// Ohne (gültige) Tangente bleibt der Kandidat unverändert. Punkte hinter dem
/// Start landen auf dem Start selbst.
pub fn constrain_elbow(start: Vec3, candidate: Vec3, exit_tangent: Option<Vec3>) -> Vec3 {
    let Some(direction) = exit_tangent
        .map(|t| xz(t).normalize_or_zero())
        .filter(|d| *d != Vec2::ZERO)
    else {
        return candidate;
    };
    let along = xz(candidate - start).dot(direction).max(0.0);
    Vec3::new(
        start.x + direction.x * along,
        candidate.y,
        start.z + direction.y * along,
    )
}

/// Rastet die Richtung Knick → Ende auf das Winkel-Raster relativ zur
/// Richtung Start → Knick. Der horizontale Abstand zum Knick bleibt erhalten.
pub fn constrain_end(
    start: Vec3,
    elbow: Vec3,
    candidate: Vec3,
    constraints: &FitConstraints,
) -> Vec3 {
    if !constraints.snap_angle {
        return candidate;
    }
    let (Some(base), Some(current)) = (bearing(elbow - start), bearing(candidate - elbow)) else {
        return candidate;
    };
    let relative = snap_angle(angle_delta(base, current), constraints.angle_snap_step);
    let direction = direction_from_yaw(base + relative);
    let distance = xz(candidate - elbow).length();
    Vec3::new(
        elbow.x + direction.x * distance,
        candidate.y,
        elbow.z + direction.z * distance,
    )
}

/// Expandiert die Kurve in Platzierungspunkte.
pub(crate) fn sample_curve(curve: &CubicBezier, ctx: &mut SampleContext<'_>) {
    let length = curve.length();
    if !length.is_finite() {
        log::trace!("Kurve mit ungültiger Länge verworfen");
        return;
    }
    if ctx.spacing.is_aligned() {
        sample_curve_aligned(curve, length, ctx);
        return;
    }

    let distances = ctx.spacing.line_distances(length, &mut ctx.jitter);
    let mut t = 0.0f32;
    let mut travelled = 0.0f32;
    for d in distances {
        if d >= length {
            t = 1.0;
        } else if d > travelled {
            t = step_by_distance(curve, t, d - travelled).min(1.0);
        } else if d < travelled {
            t = step_back_by_distance(curve, t, travelled - d).max(0.0);
        }
        travelled = d;

        let tangent = curve.tangent(t);
        let yaw = ctx.rotation.yaw(tangent);
        if !ctx.emit_with_offset(curve.position(t), tangent, yaw) {
            break;
        }
    }
}

/// Zaun/W2W auf der Kurve: Pivots im Sehnenabstand der Prefab-Ausdehnung.
///
/// Erster Pivot `-min` Bogenlänge hinter dem Start, reguläre Pivots bis
/// `max` Bogenlänge vor dem Ende, danach höchstens ein Korrektur-Pivot.
fn sample_curve_aligned(curve: &CubicBezier, length: f32, ctx: &mut SampleContext<'_>) {
    let footprint = ctx.spacing.footprint();
    let step = footprint.extent();
    let tolerance = ctx.spacing.end_tolerance();
    if step <= f32::EPSILON {
        return;
    }

    let first = -footprint.min;
    let t_limit = if footprint.max > 0.0 {
        step_back_by_distance(curve, 1.0, footprint.max).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let mut pivots = Vec::new();
    if first > length {
        // Kurve kürzer als der Versatz des ersten Pivots
        pivots.push(extrapolate_end(curve, first - length));
    } else {
        let (mut t, mut origin, mut on_curve) = if first >= 0.0 {
            let t = step_by_distance(curve, 0.0, first).clamp(0.0, 1.0);
            (t, curve.position(t), true)
        } else {
            (0.0, extrapolate_start(curve, -first), false)
        };
        pivots.push(origin);

        if arc_length(curve, t, t_limit) >= -tolerance {
            while pivots.len() < MAX_PLACEMENT_POINTS {
                let gap = arc_length(curve, t, t_limit);
                let next = if on_curve {
                    step_by_chord(curve, t, step)
                } else {
                    // Extrapolierter Start-Pivot liegt abseits der Kurve
                    first_chord_crossing(curve, xz(origin), 0.0, step)
                };
                match next {
                    Some(t_next) if arc_length(curve, t_next, t_limit) >= -tolerance => {
                        t = t_next;
                        origin = curve.position(t_next);
                        on_curve = true;
                        pivots.push(origin);
                    }
                    Some(t_next) => {
                        if gap > tolerance {
                            pivots.push(curve.position(t_next));
                        }
                        break;
                    }
                    None => {
                        if gap > tolerance {
                            if let Some(p) = chord_past_end(curve, origin, step) {
                                pivots.push(p);
                            }
                        }
                        break;
                    }
                }
            }
        }
    }

    let yaws = ctx
        .rotation
        .aligned_yaws(&pivots, false, curve.tangent(0.0));
    for (position, yaw) in pivots.into_iter().zip(yaws) {
        if !ctx.emit(position, yaw) {
            break;
        }
    }
}

/// Einheitsrichtung der Kurve bei `t` in der XZ-Ebene.
fn unit_direction(curve: &CubicBezier, t: f32) -> Vec2 {
    xz(curve.tangent(t)).normalize_or_zero()
}

/// Punkt `distance` vor dem Kurvenstart entlang der Starttangente.
fn extrapolate_start(curve: &CubicBezier, distance: f32) -> Vec3 {
    let dir = unit_direction(curve, 0.0);
    Vec3::new(
        curve.a.x - dir.x * distance,
        curve.a.y,
        curve.a.z - dir.y * distance,
    )
}

/// Punkt `distance` hinter dem Kurvenende entlang der Endtangente.
fn extrapolate_end(curve: &CubicBezier, distance: f32) -> Vec3 {
    let dir = unit_direction(curve, 1.0);
    Vec3::new(
        curve.d.x + dir.x * distance,
        curve.d.y,
        curve.d.z + dir.y * distance,
    )
}

/// Punkt auf der verlängerten Endtangente mit Sehnenabstand `distance` zu `origin`.
///
/// Löst |E + u·s − P| = distance nach s ≥ 0.
fn chord_past_end(curve: &CubicBezier, origin: Vec3, distance: f32) -> Option<Vec3> {
    let u = unit_direction(curve, 1.0);
    if u == Vec2::ZERO {
        return None;
    }
    let w = xz(curve.d) - xz(origin);
    let b = u.dot(w);
    let disc = b * b - (w.length_squared() - distance * distance);
    if disc.is_nan() || disc < 0.0 {
        return None;
    }
    let s = -b + disc.sqrt();
    Some(extrapolate_end(curve, s))
}
