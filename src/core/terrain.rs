//! Terrain-Höhenabfrage für Platzierungspunkte.
//!
//! Die Engine kennt das Terrain nur über `TerrainSampler::sample_height`.
//! `HeightGrid` ist ein reguläres Höhenraster mit bikubischer Interpolation.

use anyhow::{bail, Result};
use glam::Vec3;

/// Liefert die Terrain-Höhe an einer Weltposition (Y wird ignoriert).
pub trait TerrainSampler {
    /// Höhe (Y-Meter) an der X/Z-Position von `position`.
    fn sample_height(&self, position: Vec3) -> f32;
}

impl<F> TerrainSampler for F
where
    F: Fn(Vec3) -> f32,
{
    fn sample_height(&self, position: Vec3) -> f32 {
        self(position)
    }
}

/// Ebenes Terrain auf fester Höhe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatTerrain {
    pub height: f32,
}

impl FlatTerrain {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainSampler for FlatTerrain {
    fn sample_height(&self, _position: Vec3) -> f32 {
        self.height
    }
}

/// Weltkoordinaten-Begrenzungen eines Höhenrasters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Minimale X-Koordinate (links)
    pub min_x: f32,
    /// Minimale Z-Koordinate (unten)
    pub min_z: f32,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f32,
    /// Maximale Z-Koordinate (oben)
    pub max_z: f32,
}

impl WorldBounds {
    /// Erstellt Bounds aus Map-Größe (zentriert bei 0,0)
    pub fn from_map_size(size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min_x: -half,
            min_z: -half,
            max_x: half,
            max_z: half,
        }
    }
}

/// Reguläres Höhenraster, zeilenweise (Z) gespeichert.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    heights: Vec<f32>,
    width: usize,
    depth: usize,
    world_bounds: WorldBounds,
}

impl HeightGrid {
    /// Erstellt ein Raster aus `width × depth` Höhenwerten (Meter).
    pub fn new(
        width: usize,
        depth: usize,
        heights: Vec<f32>,
        world_bounds: WorldBounds,
    ) -> Result<Self> {
        if width < 2 || depth < 2 {
            bail!("Höhenraster braucht mindestens 2x2 Stützstellen ({}x{})", width, depth);
        }
        if heights.len() != width * depth {
            bail!(
                "Höhenraster: {} Werte erwartet, {} erhalten",
                width * depth,
                heights.len()
            );
        }
        if world_bounds.max_x <= world_bounds.min_x || world_bounds.max_z <= world_bounds.min_z {
            bail!("Höhenraster: leerer Weltbereich {:?}", world_bounds);
        }
        log::debug!(
            "Höhenraster erstellt: {}x{} Stützstellen, Bereich ({:.1}, {:.1}) bis ({:.1}, {:.1})",
            width,
            depth,
            world_bounds.min_x,
            world_bounds.min_z,
            world_bounds.max_x,
            world_bounds.max_z
        );
        Ok(Self {
            heights,
            width,
            depth,
            world_bounds,
        })
    }

    fn get(&self, x: usize, z: usize) -> f32 {
        self.heights[z * self.width + x]
    }

    /// Bikubische Interpolation über das 4x4-Umfeld der Rasterposition.
    fn sample_bicubic(&self, px: f32, pz: f32) -> f32 {
        let x = px.floor() as i64;
        let z = pz.floor() as i64;
        let fx = px - px.floor();
        let fz = pz - pz.floor();

        let mut rows = [0.0f32; 4];
        for (j, row) in rows.iter_mut().enumerate() {
            let sz = (z + j as i64 - 1).clamp(0, self.depth as i64 - 1) as usize;
            let mut values = [0.0f32; 4];
            for (i, cell) in values.iter_mut().enumerate() {
                let sx = (x + i as i64 - 1).clamp(0, self.width as i64 - 1) as usize;
                *cell = self.get(sx, sz);
            }
            *row = catmull_rom(values, fx);
        }
        catmull_rom(rows, fz)
    }
}

/// Catmull-Rom-Interpolation zwischen `p[1]` und `p[2]`.
fn catmull_rom(p: [f32; 4], t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let a = -0.5 * p[0] + 1.5 * p[1] - 1.5 * p[2] + 0.5 * p[3];
    let b = p[0] - 2.5 * p[1] + 2.0 * p[2] - 0.5 * p[3];
    let c = -0.5 * p[0] + 0.5 * p[2];
    a * t3 + b * t2 + c * t + p[1]
}

impl TerrainSampler for HeightGrid {
    fn sample_height(&self, position: Vec3) -> f32 {
        let b = &self.world_bounds;
        let nx = ((position.x - b.min_x) / (b.max_x - b.min_x)).clamp(0.0, 1.0);
        let nz = ((position.z - b.min_z) / (b.max_z - b.min_z)).clamp(0.0, 1.0);
        let px = nx * (self.width - 1) as f32;
        let pz = nz * (self.depth - 1) as f32;
        self.sample_bicubic(px, pz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp_grid() -> HeightGrid {
        // Höhe steigt linear mit X: 0, 10, 20, 30
        let heights = (0..4).flat_map(|_| (0..4).map(|x| x as f32 * 10.0)).collect();
        let bounds = WorldBounds {
            min_x: 0.0,
            min_z: 0.0,
            max_x: 30.0,
            max_z: 30.0,
        };
        HeightGrid::new(4, 4, heights, bounds).expect("gültiges Raster")
    }

    #[test]
    fn test_world_bounds_from_size() {
        let bounds = WorldBounds::from_map_size(4096.0);
        assert_eq!(bounds.min_x, -2048.0);
        assert_eq!(bounds.max_z, 2048.0);
    }

    #[test]
    fn test_grid_exact_at_samples() {
        let grid = ramp_grid();
        assert_relative_eq!(grid.sample_height(Vec3::new(10.0, 0.0, 10.0)), 10.0, epsilon = 1e-4);
        assert_relative_eq!(grid.sample_height(Vec3::new(20.0, 99.0, 0.0)), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_grid_interpolates_linear_ramp() {
        let grid = ramp_grid();
        assert_relative_eq!(grid.sample_height(Vec3::new(15.0, 0.0, 12.0)), 15.0, epsilon = 1e-3);
    }

    #[test]
    fn test_grid_clamps_outside() {
        let grid = ramp_grid();
        assert_relative_eq!(grid.sample_height(Vec3::new(-50.0, 0.0, 5.0)), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_grid_rejects_wrong_len() {
        let bounds = WorldBounds::from_map_size(10.0);
        assert!(HeightGrid::new(3, 3, vec![0.0; 8], bounds).is_err());
    }

    #[test]
    fn test_closure_sampler() {
        let sampler = |p: Vec3| p.x * 0.5;
        assert_eq!(sampler.sample_height(Vec3::new(4.0, 0.0, 0.0)), 2.0);
        assert_eq!(FlatTerrain::new(3.0).sample_height(Vec3::ZERO), 3.0);
    }
}
