//! # Engine Configuration
//!
//! Tuning constants for the player simulation and edit handling, grouped into
//! a single struct so hosts can override them from a JSON document instead of
//! recompiling.

use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::block::{BlockKind, VoxelId};

/// Downward acceleration in voxels per second per second.
pub const GRAVITY: f32 = 9.8;

/// Tuning knobs for the engine.
///
/// The defaults reproduce the stock feel: walking speed of 3 voxels/s, a
/// jump impulse of half the gravity constant, and a 5-voxel interaction
/// reach. Missing fields in a JSON document fall back to these defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Downward acceleration applied every frame, in voxels/s².
    pub gravity: f32,
    /// Vertical velocity set when jumping off solid ground, in voxels/s.
    pub jump_impulse: f32,
    /// Planar movement speed, in voxels/s.
    pub move_speed: f32,
    /// Multiplier applied to the movement vector while sprint is held.
    pub sprint_multiplier: f32,
    /// Scale applied to mouse deltas when accumulating look angles.
    pub look_sensitivity: f32,
    /// Length of the aim ray, in voxels.
    pub aim_reach: f32,
    /// Vertical offset from the player position to the eye, in voxels.
    pub eye_height: f32,
    /// Voxel id written by the place action.
    pub placed_block: VoxelId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravity: GRAVITY,
            jump_impulse: GRAVITY / 2.0,
            move_speed: 3.0,
            sprint_multiplier: 3.0,
            look_sensitivity: 0.5,
            aim_reach: 5.0,
            eye_height: 1.0,
            placed_block: BlockKind::Planks.id(),
        }
    }
}

impl EngineConfig {
    /// Parses a config from a JSON document.
    ///
    /// Fields absent from the document keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
