use super::super::common::{RandomJitter, RotationPlanner, SampleContext, SpacingPlanner};
use super::super::{ClickOutcome, DragTarget, FitConstraints, FittedPath, ShapeTool};
use super::sample_line;
use super::state::StraightLine;
use crate::core::{FlatTerrain, PlacementPoint, PrefabBounds, SpacingMode};
use crate::shared::options::PlacementSettings;
use approx::assert_relative_eq;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

fn sample(
    start: Vec3,
    end: Vec3,
    settings: &PlacementSettings,
    bounds: &PrefabBounds,
) -> Vec<PlacementPoint> {
    let terrain = FlatTerrain::new(2.0);
    let spacing = SpacingPlanner::new(settings, bounds);
    let rotation = RotationPlanner::new(settings, spacing.mode(), 0);
    let length = (end - start).length();
    let jitter = if spacing.is_aligned() {
        RandomJitter::disabled(length, settings)
    } else {
        RandomJitter::new(length, settings)
    };
    let mut ctx = SampleContext::new(spacing, rotation, jitter, &terrain);
    sample_line(start, end, &mut ctx);
    ctx.finish()
}

#[test]
fn test_click_flow() {
    let mut line = StraightLine::new();
    let c = FitConstraints::default();
    assert!(!line.state().has_start);
    assert_eq!(line.handle_click(Vec3::ZERO, &c), ClickOutcome::Initial);
    assert!(line.state().has_start);
    assert!(!line.state().has_all_points);
    assert_eq!(
        line.handle_click(Vec3::new(10.0, 0.0, 0.0), &c),
        ClickOutcome::Placed
    );
    assert!(line.state().has_all_points);
}

#[test]
fn test_finalize_chains_to_end() {
    let mut line = StraightLine::new();
    let c = FitConstraints::default();
    line.handle_click(Vec3::ZERO, &c);
    line.handle_click(Vec3::new(10.0, 0.0, 0.0), &c);
    let carry = line.finalize();
    assert_eq!(carry.start, Some(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(carry.exit_tangent, Some(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(line.start(), Some(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(line.end(), None);
}

#[test]
fn test_recompute_follows_cursor() {
    let mut line = StraightLine::new();
    let c = FitConstraints::default();
    assert!(line.recompute(Vec3::X, &c).is_none());
    line.handle_click(Vec3::ZERO, &c);
    assert_eq!(
        line.recompute(Vec3::new(3.0, 0.0, 4.0), &c),
        Some(FittedPath::Line {
            start: Vec3::ZERO,
            end: Vec3::new(3.0, 0.0, 4.0)
        })
    );
}

#[test]
fn test_drag_start() {
    let mut line = StraightLine::new();
    let c = FitConstraints::default();
    assert!(!line.handle_drag(DragTarget::Start, Vec3::X, &c));
    line.handle_click(Vec3::ZERO, &c);
    assert!(line.handle_drag(DragTarget::Start, Vec3::X, &c));
    assert!(!line.handle_drag(DragTarget::Elbow, Vec3::X, &c));
    assert_eq!(line.start(), Some(Vec3::X));
}

#[test]
fn test_manual_points_face_along_line() {
    let settings = PlacementSettings {
        spacing: 20.0,
        ..Default::default()
    };
    let points = sample(
        Vec3::ZERO,
        Vec3::new(100.0, 0.0, 0.0),
        &settings,
        &PrefabBounds::default(),
    );
    assert_eq!(points.len(), 6);
    for (i, p) in points.iter().enumerate() {
        assert_relative_eq!(p.position.x, i as f32 * 20.0, epsilon = 1e-4);
        assert_eq!(p.position.y, 2.0);
        assert_relative_eq!(p.yaw(), FRAC_PI_2, epsilon = 1e-5);
    }
}

#[test]
fn test_degenerate_line_yields_nothing() {
    let points = sample(
        Vec3::ONE,
        Vec3::ONE,
        &PlacementSettings::default(),
        &PrefabBounds::default(),
    );
    assert!(points.is_empty());
}

#[test]
fn test_offset_jitter_stays_within_bounds() {
    let settings = PlacementSettings {
        spacing: 5.0,
        random_offset_max: 1.5,
        ..Default::default()
    };
    let points = sample(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 50.0),
        &settings,
        &PrefabBounds::default(),
    );
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| p.position.x.abs() <= 1.5 + 1e-5));
    assert!(points.iter().any(|p| p.position.x != 0.0));
}

#[test]
fn test_w2w_faces_sideways() {
    let settings = PlacementSettings {
        spacing_mode: SpacingMode::W2WMode,
        ..Default::default()
    };
    let bounds = PrefabBounds::centered(4.0, 1.0);
    let points = sample(Vec3::ZERO, Vec3::new(0.0, 0.0, 16.0), &settings, &bounds);
    // Pivots bei 2, 6, 10, 14
    assert_eq!(points.len(), 4);
    assert_relative_eq!(points[0].position.z, 2.0, epsilon = 1e-4);
    for p in &points {
        assert_relative_eq!(p.yaw(), FRAC_PI_2, epsilon = 1e-5);
    }
}
