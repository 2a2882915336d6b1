//! # Voxel Position
//!
//! Integer grid coordinates and their relationship to continuous space.

use cgmath::Point3;

use super::grid::WORLD_DIM;

/// Integer coordinates of a voxel in the world grid.
///
/// Constructed from continuous coordinates by truncation toward zero, not
/// flooring: movement can be negative, and the bounded-safe queries treat
/// everything outside the grid as open air, so the distinction only shows up
/// at the world edge and must match the truncating convention everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelPosition {
    /// X coordinate in the grid
    pub x: i32,
    /// Y coordinate in the grid
    pub y: i32,
    /// Z coordinate in the grid
    pub z: i32,
}

impl VoxelPosition {
    /// Creates a position from integer coordinates.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        VoxelPosition { x, y, z }
    }

    /// Creates a position from a continuous point by truncating each
    /// component toward zero.
    pub fn from_continuous(point: Point3<f32>) -> Self {
        VoxelPosition {
            x: point.x as i32,
            y: point.y as i32,
            z: point.z as i32,
        }
    }

    /// Checks whether every component lies inside `[0, WORLD_DIM)`.
    pub fn is_valid(&self) -> bool {
        !(self.x < 0
            || self.y < 0
            || self.z < 0
            || self.x >= WORLD_DIM
            || self.y >= WORLD_DIM
            || self.z >= WORLD_DIM)
    }

    /// The minimum corner of this voxel's unit cube.
    pub fn to_point(&self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// The center of this voxel's unit cube.
    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}
