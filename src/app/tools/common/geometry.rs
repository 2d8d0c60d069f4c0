//! Geometrie-Hilfsfunktionen für Pfadformen (XZ-Ebene, Yaw um +Y).

use crate::core::bezier::xz;
use glam::Vec3;

/// Yaw-Winkel einer Richtung (0 = +Z, π/2 = +X).
///
/// `None` bei Richtungen ohne horizontale Ausdehnung oder mit NaN-Anteilen.
pub fn bearing(direction: Vec3) -> Option<f32> {
    let flat = xz(direction);
    if !flat.is_finite() || flat.length_squared() < f32::EPSILON * f32::EPSILON {
        return None;
    }
    Some(flat.x.atan2(flat.y))
}

/// Horizontale Einheitsrichtung zu einem Yaw-Winkel.
pub fn direction_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Lokale +X-Achse eines Objekts, das in `direction` blickt (Vec3::ZERO bei Entartung).
pub fn lateral(direction: Vec3) -> Vec3 {
    Vec3::new(direction.z, 0.0, -direction.x).normalize_or_zero()
}

/// Horizontaler Abstand zweier Punkte.
pub fn xz_distance(a: Vec3, b: Vec3) -> f32 {
    xz(a).distance(xz(b))
}

/// Rundet `angle` auf das nächste Vielfache von `step` (Radiant).
pub fn snap_angle(angle: f32, step: f32) -> f32 {
    if step <= f32::EPSILON {
        return angle;
    }
    (angle / step).round() * step
}

/// Kürzeste vorzeichenbehaftete Differenz `to - from`, normiert auf [-π, π].
pub fn angle_delta(from: f32, to: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (to - from + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_bearing_axes() {
        assert_relative_eq!(bearing(Vec3::Z).unwrap_or(f32::NAN), 0.0);
        assert_relative_eq!(bearing(Vec3::X).unwrap_or(f32::NAN), FRAC_PI_2);
        assert!(bearing(Vec3::Y).is_none());
        assert!(bearing(Vec3::NAN).is_none());
    }

    #[test]
    fn test_lateral_is_local_x() {
        // Blick nach +Z → lokale X-Achse ist Welt-+X
        assert_relative_eq!(lateral(Vec3::Z).x, 1.0);
        assert_eq!(lateral(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_angle_delta_wraps() {
        assert_relative_eq!(angle_delta(PI - 0.1, -PI + 0.1), 0.2, epsilon = 1e-5);
        assert_relative_eq!(snap_angle(0.3, FRAC_PI_2 / 6.0), FRAC_PI_2 / 6.0, epsilon = 1e-6);
    }
}
