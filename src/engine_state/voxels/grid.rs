//! # World Grid
//!
//! This module provides the `VoxelGrid` struct owning the world's voxel ids.
//!
//! ## Storage
//!
//! The grid is a fixed cube of side [`WORLD_DIM`], stored as one flat vector
//! of ids in `x + WORLD_DIM * y + WORLD_DIM² * z` order. It is allocated once
//! at world start, mutated in place by edits, and never resized.
//!
//! ## Boundary Behavior
//!
//! Out-of-range coordinates are a normal, expected condition at the world
//! edge, not an error: every bounded-safe query answers "empty" for them and
//! never touches storage. Meshing and physics use only the bounded-safe
//! queries, so world-edge and negative coordinates behave as open air.

use super::block::block_face::{FaceVisibility, VoxelFace};
use super::block::{VoxelId, AIR};
use super::generation::WorldGenerator;
use super::position::VoxelPosition;

/// The dimension (width, height, depth) of the world in voxels.
pub const WORLD_DIM: i32 = 64;
/// The number of voxels in a single 2D plane of the world (WORLD_DIM²).
pub const WORLD_PLANE_SIZE: i32 = WORLD_DIM * WORLD_DIM;
/// The total number of voxels in the world (WORLD_DIM³).
pub const WORLD_VOLUME: i32 = WORLD_PLANE_SIZE * WORLD_DIM;

/// A fixed-size cube of voxel ids.
pub struct VoxelGrid {
    voxels: Vec<VoxelId>,
}

impl VoxelGrid {
    /// Creates a grid filled with air.
    pub fn empty() -> Self {
        VoxelGrid {
            voxels: vec![AIR; WORLD_VOLUME as usize],
        }
    }

    /// Creates a grid completely filled with the given id (for testing).
    pub fn solid(id: VoxelId) -> Self {
        VoxelGrid {
            voxels: vec![id; WORLD_VOLUME as usize],
        }
    }

    /// Creates a grid with a 3D checkerboard of the given id (for testing).
    pub fn checkerboard(id: VoxelId) -> Self {
        let mut grid = VoxelGrid::empty();
        for z in 0..WORLD_DIM {
            for y in 0..WORLD_DIM {
                for x in 0..WORLD_DIM {
                    if (x + y + z) % 2 == 0 {
                        grid.set(x, y, z, id);
                    }
                }
            }
        }
        grid
    }

    /// Creates a grid and populates it with the given generator.
    pub fn from_generator(generator: &dyn WorldGenerator) -> Self {
        let mut grid = VoxelGrid::empty();
        generator.generate(&mut grid);
        grid
    }

    fn index(x: i32, y: i32, z: i32) -> usize {
        (x + WORLD_DIM * y + WORLD_PLANE_SIZE * z) as usize
    }

    /// Gets the voxel id at the given coordinates.
    ///
    /// Defined only for valid coordinates; out-of-range input panics.
    pub fn get(&self, x: i32, y: i32, z: i32) -> VoxelId {
        assert!(VoxelPosition::new(x, y, z).is_valid());
        self.voxels[Self::index(x, y, z)]
    }

    /// Sets the voxel id at the given coordinates.
    ///
    /// Defined only for valid coordinates; out-of-range input panics.
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: VoxelId) {
        assert!(VoxelPosition::new(x, y, z).is_valid());
        self.voxels[Self::index(x, y, z)] = id;
    }

    /// Bounded-safe read: the voxel id at the given position, or `None` for
    /// an invalid position.
    pub fn voxel_at(&self, pos: VoxelPosition) -> Option<VoxelId> {
        if pos.is_valid() {
            Some(self.voxels[Self::index(pos.x, pos.y, pos.z)])
        } else {
            None
        }
    }

    /// Bounded-safe opacity query: `true` when the position is valid and
    /// holds a solid id, `false` otherwise. Never panics.
    pub fn is_opaque(&self, pos: VoxelPosition) -> bool {
        if pos.is_valid() {
            self.voxels[Self::index(pos.x, pos.y, pos.z)] > AIR
        } else {
            false
        }
    }

    /// Bounded-safe opacity query by raw coordinates.
    pub fn is_opaque_at(&self, x: i32, y: i32, z: i32) -> bool {
        self.is_opaque(VoxelPosition::new(x, y, z))
    }

    /// Determines which faces of the voxel at `(x, y, z)` are adjacent to
    /// non-opaque neighbors.
    ///
    /// Neighbors outside the grid count as open air, so voxels on the world
    /// boundary expose their outward faces.
    pub fn exposed_faces(&self, x: i32, y: i32, z: i32) -> FaceVisibility {
        let mut exposed = [false; 6];
        for face in VoxelFace::all() {
            let (dx, dy, dz) = face.neighbor_offset();
            exposed[face as usize] = !self.is_opaque_at(x + dx, y + dy, z + dz);
        }
        FaceVisibility::new(exposed)
    }

    /// Counts the solid voxels in the grid.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|&&id| id > AIR).count()
    }
}
