//! Core-Domänentypen: Bézier-Mathematik, Prefab-Bounds, Modi, Platzierungspunkte, Terrain.

/// Bogenlängen-Parametrisierung kubischer Bézier-Kurven (XZ-Ebene)
pub mod bezier;
pub mod bounds;
pub mod modes;
pub mod placement_point;
pub mod terrain;

pub use bezier::CubicBezier;
pub use bounds::{Bounds1, PrefabBounds};
pub use modes::{RotationMode, ShapeKind, SpacingMode};
pub use placement_point::PlacementPoint;
pub use terrain::{FlatTerrain, HeightGrid, TerrainSampler, WorldBounds};
