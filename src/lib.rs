//! Geometrie-Kern des Linien-Platzierungswerkzeugs.
//! Pfadformen → Platzierungspunkte, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    generate_points, ClickOutcome, DragTarget, LineToolController, ObjectSink, PathShape,
    PreviewCache, PreviewRequest, SettingsChange, ShapeTool,
};
pub use core::{
    Bounds1, CubicBezier, FlatTerrain, HeightGrid, PlacementPoint, PrefabBounds, RotationMode,
    ShapeKind, SpacingMode, TerrainSampler, WorldBounds,
};
pub use shared::PlacementSettings;
