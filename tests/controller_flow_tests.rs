//! Integrationstests für den Werkzeug-Flow über den Controller:
//! Klickfolge, Verkettung, Formwechsel, Einstellungs-Grenze, Vorschau-Cache.

use glam::Vec3;
use line_placement::{
    ClickOutcome, DragTarget, FlatTerrain, LineToolController, PlacementPoint, PlacementSettings,
    PrefabBounds, RotationMode, SettingsChange, ShapeKind, ShapeTool, SpacingMode,
};
use std::time::Duration;

fn controller(kind: ShapeKind) -> LineToolController<FlatTerrain> {
    let settings = PlacementSettings {
        shape: kind,
        ..Default::default()
    };
    LineToolController::new(settings, PrefabBounds::default(), FlatTerrain::default())
}

#[test]
fn test_straight_lines_chain_from_last_end() {
    let mut c = controller(ShapeKind::Straight);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();

    assert_eq!(
        c.handle_click(Vec3::ZERO, false, &mut sink),
        ClickOutcome::Initial
    );
    assert!(sink.is_empty());
    assert_eq!(
        c.handle_click(Vec3::new(20.0, 0.0, 0.0), false, &mut sink),
        ClickOutcome::Placed
    );
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].len(), 3);

    // Nächste Strecke beginnt am letzten Endpunkt
    assert!(c.shape().state().has_start);
    assert_eq!(
        c.handle_click(Vec3::new(20.0, 0.0, 30.0), false, &mut sink),
        ClickOutcome::Placed
    );
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[1][0].position, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(sink[1].len(), 4);
}

#[test]
fn test_elbow_curve_needs_three_clicks_and_continues_tangent() {
    let mut c = controller(ShapeKind::ElbowCurve);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();

    c.handle_click(Vec3::ZERO, false, &mut sink);
    assert_eq!(
        c.handle_click(Vec3::new(30.0, 0.0, 0.0), false, &mut sink),
        ClickOutcome::Midpoint
    );
    assert!(sink.is_empty());
    c.handle_click(Vec3::new(30.0, 0.0, 30.0), false, &mut sink);
    assert_eq!(sink.len(), 1);

    // Knick des Folgesegments liegt auf der Austrittstangente (+Z)
    c.handle_click(Vec3::new(45.0, 0.0, 60.0), false, &mut sink);
    let elbow = c
        .shape()
        .drag_targets()
        .into_iter()
        .find(|(target, _)| *target == DragTarget::Elbow)
        .map(|(_, p)| p);
    assert_eq!(elbow, Some(Vec3::new(30.0, 0.0, 60.0)));
}

#[test]
fn test_circle_keeps_center_between_placements() {
    let mut c = controller(ShapeKind::Circle);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::new(5.0, 0.0, 5.0), false, &mut sink);
    c.handle_click(Vec3::new(25.0, 0.0, 5.0), false, &mut sink);
    c.handle_click(Vec3::new(45.0, 0.0, 5.0), false, &mut sink);
    assert_eq!(sink.len(), 2);
    // Zweiter Kreis mit doppeltem Radius hat etwa doppelt so viele Punkte
    assert_eq!(sink[0].len(), 12);
    assert_eq!(sink[1].len(), 25);
}

#[test]
fn test_grid_places_after_third_click() {
    let mut c = controller(ShapeKind::Grid);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::ZERO, false, &mut sink);
    c.handle_click(Vec3::new(20.0, 0.0, 0.0), false, &mut sink);
    assert!(sink.is_empty());
    assert_eq!(
        c.handle_click(Vec3::new(20.0, 0.0, 20.0), false, &mut sink),
        ClickOutcome::Placed
    );
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].len(), 9);
}

#[test]
fn test_shape_switch_resets_session() {
    let mut c = controller(ShapeKind::Straight);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::ZERO, false, &mut sink);
    let seed = c.cache().rotation_seed();

    c.apply_setting(SettingsChange::Shape(ShapeKind::ElbowCurve));
    assert_eq!(c.shape().kind(), ShapeKind::ElbowCurve);
    assert!(!c.shape().state().has_start);
    assert_ne!(c.cache().rotation_seed(), seed);
    assert!(c
        .tick(Vec3::new(10.0, 0.0, 0.0), Duration::ZERO, false)
        .is_empty());
}

#[test]
fn test_unsupported_mode_rejected_until_prefab_fits() {
    let mut c = controller(ShapeKind::Straight);
    c.apply_setting(SettingsChange::SpacingMode(SpacingMode::FullLength));
    c.apply_setting(SettingsChange::SpacingMode(SpacingMode::FenceMode));
    assert_eq!(c.settings().spacing_mode, SpacingMode::FullLength);

    c.set_prefab_bounds(PrefabBounds::centered(0.5, 4.0));
    c.apply_setting(SettingsChange::SpacingMode(SpacingMode::FenceMode));
    assert_eq!(c.settings().spacing_mode, SpacingMode::FenceMode);
    c.apply_setting(SettingsChange::Spacing(1.0));
    assert_eq!(c.settings().spacing, 4.0);

    // Prefab ohne Ausdehnung → zurück auf Manual
    c.set_prefab_bounds(PrefabBounds::default());
    assert_eq!(c.settings().spacing_mode, SpacingMode::Manual);
}

#[test]
fn test_preview_is_memoized_per_input() {
    let mut c = controller(ShapeKind::Straight);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::ZERO, false, &mut sink);

    let cursor = Vec3::new(40.0, 0.0, 0.0);
    let first = c.tick(cursor, Duration::from_millis(16), false).to_vec();
    let second = c.tick(cursor, Duration::from_millis(16), false).to_vec();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    assert_eq!(c.cache().computations(), 1);

    c.tick(Vec3::new(50.0, 0.0, 0.0), Duration::from_millis(16), false);
    assert_eq!(c.cache().computations(), 2);

    c.apply_setting(SettingsChange::Spacing(5.0));
    let denser = c.tick(Vec3::new(50.0, 0.0, 0.0), Duration::ZERO, false);
    assert_eq!(denser.len(), 11);
    assert_eq!(c.cache().computations(), 3);
}

#[test]
fn test_random_rotation_rerolls_on_timer_only() {
    let mut c = controller(ShapeKind::Straight);
    c.apply_setting(SettingsChange::RotationMode(RotationMode::Random));
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::ZERO, false, &mut sink);

    let cursor = Vec3::new(30.0, 0.0, 0.0);
    let a = c.tick(cursor, Duration::ZERO, false).to_vec();
    let b = c.tick(cursor, Duration::from_secs(1), false).to_vec();
    assert_eq!(a, b);
    assert_eq!(c.cache().computations(), 1);

    let rolled = c.tick(cursor, Duration::from_secs(3), false).to_vec();
    assert_eq!(c.cache().computations(), 2);
    assert_eq!(rolled.len(), a.len());
    assert_ne!(rolled, a);
}

#[test]
fn test_drag_moves_start_and_invalidates_preview() {
    let mut c = controller(ShapeKind::Straight);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::ZERO, false, &mut sink);
    let cursor = Vec3::new(30.0, 0.0, 0.0);
    c.tick(cursor, Duration::ZERO, false);

    let target = c.pick_drag_target(Vec3::new(0.5, 0.0, 0.5), 1.0);
    assert_eq!(target, Some(DragTarget::Start));
    assert!(c.handle_drag(DragTarget::Start, Vec3::new(10.0, 0.0, 0.0), false));
    assert!(!c.handle_drag(DragTarget::Elbow, Vec3::ZERO, false));

    let points = c.tick(cursor, Duration::ZERO, false);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].position.x, 10.0);
}

#[test]
fn test_reset_discards_control_points() {
    let mut c = controller(ShapeKind::Grid);
    let mut sink: Vec<Vec<PlacementPoint>> = Vec::new();
    c.handle_click(Vec3::ZERO, false, &mut sink);
    c.handle_click(Vec3::new(10.0, 0.0, 0.0), false, &mut sink);
    assert_eq!(c.overlay_curves(Vec3::new(10.0, 0.0, 10.0), false).len(), 4);

    c.reset();
    assert!(!c.shape().state().has_start);
    assert!(c.overlay_curves(Vec3::ONE, false).is_empty());
    assert_eq!(
        c.handle_click(Vec3::ONE, false, &mut sink),
        ClickOutcome::Initial
    );
}

#[test]
fn test_settings_file_reload_switches_shape() {
    let mut c = controller(ShapeKind::Straight);
    let reloaded: PlacementSettings =
        toml::from_str("shape = \"Circle\"\nspacing = -3.0").unwrap_or_default();
    c.replace_settings(reloaded);
    assert_eq!(c.shape().kind(), ShapeKind::Circle);
    assert!(c.settings().spacing > 0.0);
}
