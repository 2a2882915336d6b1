//! # Block Module
//!
//! The voxel id vocabulary. An id is simultaneously the opacity test
//! (anything above zero is solid) and the texture-atlas tile index, so the
//! named kinds below are pinned to their tile positions in the atlas.

use num_derive::FromPrimitive;

pub mod block_face;

/// The underlying integer type used to store voxel ids in the grid.
pub type VoxelId = u8;

/// The empty/air id.
pub const AIR: VoxelId = 0;

/// Named voxel kinds with their atlas tile indices.
///
/// The grid stores raw [`VoxelId`]s; this enum names the ids the engine
/// itself writes (world generation and the place action). Ids outside this
/// set are still valid grid contents, they just render with whatever tile
/// sits at that index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockKind {
    /// Empty space; non-solid and invisible.
    Air = 0,

    /// The id written by the place action.
    Planks = 4,

    /// Terrain fill.
    Stone = 11,

    /// Terrain fill.
    Dirt = 12,

    /// Surface decoration scattered at ground level.
    Flower = 54,
}

impl BlockKind {
    /// Converts a raw voxel id to a named kind, if it has one.
    pub fn from_id(id: VoxelId) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// Picks a random terrain fill kind.
    pub fn random_terrain() -> Self {
        num::FromPrimitive::from_u8(fastrand::u8(
            BlockKind::Stone as VoxelId..=BlockKind::Dirt as VoxelId,
        ))
        .unwrap()
    }

    /// The raw voxel id for this kind.
    pub fn id(self) -> VoxelId {
        self as VoxelId
    }
}
