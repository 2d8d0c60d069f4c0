//! Linien-Platzierung: Demo-Treiber.
//!
//! Liest einen TOML-Auftrag (Einstellungen, Prefab-Ausdehnung, Terrain,
//! Klickfolge), spielt die Klicks gegen den Controller ab und gibt alle
//! platzierten Punktlisten als JSON aus.

use anyhow::{Context, Result};
use glam::Vec3;
use line_placement::{
    FlatTerrain, HeightGrid, LineToolController, PlacementPoint, PlacementSettings, PrefabBounds,
    TerrainSampler, WorldBounds,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Ein Klick der Sitzung
#[derive(Debug, Deserialize)]
struct JobClick {
    position: [f32; 3],
    #[serde(default)]
    snap_angle: bool,
}

/// Optionales Höhenraster statt ebenem Terrain
#[derive(Debug, Deserialize)]
struct JobHeightGrid {
    width: usize,
    depth: usize,
    map_size: f32,
    heights: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct Job {
    #[serde(default)]
    settings: PlacementSettings,
    #[serde(default)]
    bounds: PrefabBounds,
    #[serde(default)]
    terrain_height: f32,
    height_grid: Option<JobHeightGrid>,
    #[serde(default)]
    clicks: Vec<JobClick>,
}

/// Terrain des Auftrags
enum JobTerrain {
    Flat(FlatTerrain),
    Grid(HeightGrid),
}

impl TerrainSampler for JobTerrain {
    fn sample_height(&self, position: Vec3) -> f32 {
        match self {
            JobTerrain::Flat(t) => t.sample_height(position),
            JobTerrain::Grid(t) => t.sample_height(position),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Linien-Platzierung v{} startet...", env!("CARGO_PKG_VERSION"));

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Aufruf: line-placement <auftrag.toml>")?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Auftrag nicht lesbar: {}", path.display()))?;
    let job: Job = toml::from_str(&content)
        .with_context(|| format!("Auftrag fehlerhaft: {}", path.display()))?;

    let terrain = match job.height_grid {
        Some(grid) => JobTerrain::Grid(
            HeightGrid::new(
                grid.width,
                grid.depth,
                grid.heights,
                WorldBounds::from_map_size(grid.map_size),
            )
            .context("Höhenraster ungültig")?,
        ),
        None => JobTerrain::Flat(FlatTerrain::new(job.terrain_height)),
    };

    let mut controller = LineToolController::new(job.settings, job.bounds, terrain);
    let mut placed: Vec<Vec<PlacementPoint>> = Vec::new();
    for click in &job.clicks {
        let [x, y, z] = click.position;
        let outcome = controller.handle_click(Vec3::new(x, y, z), click.snap_angle, &mut placed);
        log::debug!("Klick ({x}, {y}, {z}) → {:?}", outcome);
    }

    log::info!(
        "{} Segmente mit insgesamt {} Objekten platziert",
        placed.len(),
        placed.iter().map(Vec::len).sum::<usize>()
    );
    let json = serde_json::to_string_pretty(&placed).context("JSON-Ausgabe fehlgeschlagen")?;
    println!("{json}");
    Ok(())
}
