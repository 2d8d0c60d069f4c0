//! Application-Layer: Pfadformen, Punkt-Generator, Vorschau-Cache und Controller.

pub mod controller;
pub mod generator;
pub mod preview_cache;
pub mod tools;

pub use controller::{LineToolController, ObjectSink, SettingsChange};
pub use generator::{generate_points, PreviewRequest};
pub use preview_cache::PreviewCache;
pub use tools::{ClickOutcome, DragTarget, FitConstraints, FittedPath, PathShape, ShapeTool};
