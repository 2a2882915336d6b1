//! # Placement Resolution
//!
//! Infers which face of a hit voxel was struck and returns the adjacent cell
//! eligible for placement.

use super::raycast::VoxelHit;
use crate::engine_state::voxels::position::VoxelPosition;

/// Returns the voxel adjacent to the struck face of `hit`.
///
/// The struck face is inferred from the offset of the incidence point from
/// the hit voxel's center: the axis with the largest absolute offset wins,
/// with ties against Z resolving to Z, and the neighbor is one step along
/// that axis in the offset's direction.
///
/// The inference is an offset-comparison heuristic, not an exact face
/// classification, and can misclassify near edges and corners; callers must
/// re-check that the returned position is valid and empty before writing a
/// voxel there.
pub fn build_position(hit: &VoxelHit) -> VoxelPosition {
    let local = hit.incidence - hit.position.center();

    let lx = local.x.abs();
    let ly = local.y.abs();
    let lz = local.z.abs();

    let mut pos = hit.position;

    if ly > lx {
        if lz >= ly {
            pos.z += if local.z > 0.0 { 1 } else { -1 };
        } else {
            pos.y += if local.y > 0.0 { 1 } else { -1 };
        }
    } else if lz >= lx {
        pos.z += if local.z > 0.0 { 1 } else { -1 };
    } else {
        pos.x += if local.x > 0.0 { 1 } else { -1 };
    }

    pos
}
