//! # World Generation
//!
//! Pluggable initial-state generators. Generation is incidental to the
//! meshing/raycasting/physics contracts: a generator only fills the grid
//! once at world start, behind the [`WorldGenerator`] trait.

use log::debug;
use noise::{NoiseFn, Perlin};

use super::block::{BlockKind, AIR};
use super::grid::{VoxelGrid, WORLD_DIM};

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered empty for terrain generation.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Fills a freshly allocated grid with its initial voxel ids.
pub trait WorldGenerator {
    /// Populates the grid in place.
    fn generate(&self, grid: &mut VoxelGrid);
}

/// The stock world: a slab of random terrain fill below `surface_level`,
/// with flowers scattered across the surface row.
pub struct ScatteredTerrain {
    /// Y level of the first non-solid row.
    pub surface_level: i32,
    /// Percent chance of a flower on a surface cell, in `[0, 100]`.
    pub flower_chance: u8,
}

impl Default for ScatteredTerrain {
    fn default() -> Self {
        ScatteredTerrain {
            surface_level: 30,
            flower_chance: 3,
        }
    }
}

impl WorldGenerator for ScatteredTerrain {
    fn generate(&self, grid: &mut VoxelGrid) {
        for z in 0..WORLD_DIM {
            for y in 0..WORLD_DIM {
                for x in 0..WORLD_DIM {
                    let id = if y < self.surface_level {
                        BlockKind::random_terrain().id()
                    } else if y == self.surface_level
                        && fastrand::u8(0..100) < self.flower_chance
                    {
                        BlockKind::Flower.id()
                    } else {
                        AIR
                    };
                    grid.set(x, y, z, id);
                }
            }
        }

        debug!(
            "scattered terrain generated: {} solid voxels",
            grid.solid_count()
        );
    }
}

/// Cave-like terrain carved from 3D Perlin noise.
///
/// A cell is solid when its noise sample falls outside the band between
/// [`PERLIN_NEGATIVE_THRESHOLD`] and [`PERLIN_POSITIVE_THRESHOLD`].
pub struct PerlinTerrain {
    /// Seed handed to the noise source.
    pub seed: u32,
}

impl Default for PerlinTerrain {
    fn default() -> Self {
        PerlinTerrain { seed: 0 }
    }
}

impl WorldGenerator for PerlinTerrain {
    fn generate(&self, grid: &mut VoxelGrid) {
        let perlin = Perlin::new(self.seed);

        for z in 0..WORLD_DIM {
            for y in 0..WORLD_DIM {
                for x in 0..WORLD_DIM {
                    let sample = perlin.get([
                        x as f64 * PERLIN_SCALE_FACTOR,
                        y as f64 * PERLIN_SCALE_FACTOR,
                        z as f64 * PERLIN_SCALE_FACTOR,
                    ]);
                    let id = if (PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD)
                        .contains(&sample)
                    {
                        AIR
                    } else {
                        BlockKind::random_terrain().id()
                    };
                    grid.set(x, y, z, id);
                }
            }
        }

        debug!(
            "perlin terrain generated: {} solid voxels",
            grid.solid_count()
        );
    }
}
