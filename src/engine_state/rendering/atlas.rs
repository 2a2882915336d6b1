//! # Texture Atlas
//!
//! Maps voxel ids to pixel rectangles in the host's texture atlas. The
//! engine never loads the image; it only needs the atlas pixel dimensions to
//! normalize rectangle bounds into UV space.
//!
//! Tiles are laid out [`TILES_PER_ROW`] to a row with a fixed
//! [`TILE_MARGIN`]-pixel gap between them, so tile `id` sits at grid cell
//! `(id % TILES_PER_ROW, id / TILES_PER_ROW)`.

use crate::engine_state::voxels::block::VoxelId;

/// Edge length of one atlas tile in pixels.
pub const TILE_SIZE: u32 = 128;
/// Number of tiles per atlas row.
pub const TILES_PER_ROW: u32 = 7;
/// Gap between adjacent tiles in pixels.
pub const TILE_MARGIN: u32 = 2;

/// An axis-aligned pixel rectangle in the atlas, y-down from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// The left edge in pixels.
    pub fn left(&self) -> u32 {
        self.x
    }

    /// The right edge in pixels.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// The top edge in pixels.
    pub fn top(&self) -> u32 {
        self.y
    }

    /// The bottom edge in pixels.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// The pixel dimensions of the host's texture atlas plus the tile layout.
#[derive(Debug, Clone, Copy)]
pub struct TextureAtlas {
    width: u32,
    height: u32,
}

impl TextureAtlas {
    /// Creates an atlas lookup for an image of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        TextureAtlas { width, height }
    }

    /// Atlas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Atlas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel rectangle of the tile for the given voxel id.
    pub fn texture_rect(&self, id: VoxelId) -> PixelRect {
        let col = id as u32 % TILES_PER_ROW;
        let row = id as u32 / TILES_PER_ROW;
        PixelRect {
            x: col * TILE_SIZE + col * TILE_MARGIN,
            y: row * TILE_SIZE + row * TILE_MARGIN,
            width: TILE_SIZE,
            height: TILE_SIZE,
        }
    }
}
