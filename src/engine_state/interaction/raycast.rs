//! # Voxel Raycast
//!
//! Marches a continuous segment through the grid and reports, in order, every
//! voxel it passes through, each paired with the exact point where the
//! segment entered it.
//!
//! The traversal steps directly from one axis-aligned integer boundary to the
//! next instead of densely sampling the segment, so its cost is proportional
//! to the number of cells crossed. Voxel identity uses the same
//! truncation-toward-zero convention as [`VoxelPosition::from_continuous`],
//! evaluated strictly inside each crossed span so a boundary-exact crossing
//! attributes to the span beyond it.

use cgmath::Point3;

use crate::engine_state::voxels::grid::VoxelGrid;
use crate::engine_state::voxels::position::VoxelPosition;

/// One voxel touched by a cast segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelHit {
    /// The voxel the segment passed through.
    pub position: VoxelPosition,
    /// The exact point on the segment where this voxel was entered. For the
    /// first entry this is the segment start; afterwards it is the boundary
    /// crossing point. Used to infer which face was struck.
    pub incidence: Point3<f32>,
}

/// Casts the segment `from → to` and returns the ordered sequence of voxels
/// it passes through, without consecutive duplicates.
///
/// The segment is parameterized by `t ∈ [0, 1)`: the start voxel is always
/// the first entry, and a voxel entered exactly at the endpoint is not
/// reported. A zero-length segment yields exactly one hit at `voxel(from)`.
/// Entries are not bounds-checked; callers that need in-grid hits filter via
/// [`first_solid`] or [`VoxelPosition::is_valid`].
pub fn cast_ray(from: Point3<f32>, to: Point3<f32>) -> Vec<VoxelHit> {
    let delta = to - from;
    let start: [f32; 3] = from.into();
    let step: [f32; 3] = delta.into();

    let mut hits = vec![VoxelHit {
        position: VoxelPosition::from_continuous(from),
        incidence: from,
    }];

    // Per-axis t of the next integer-boundary crossing, and the t spacing
    // between successive crossings on that axis.
    let mut t_next = [f32::INFINITY; 3];
    let mut t_spacing = [f32::INFINITY; 3];
    for axis in 0..3 {
        if step[axis].abs() > f32::EPSILON {
            // Moving down from exactly on a boundary enters the lower span
            // immediately, so the negative case must not skip past floor().
            let boundary = if step[axis] > 0.0 {
                start[axis].floor() + 1.0
            } else {
                start[axis].floor()
            };
            t_next[axis] = (boundary - start[axis]) / step[axis];
            t_spacing[axis] = 1.0 / step[axis].abs();
        }
    }

    loop {
        let mut axis = 0;
        for i in 1..3 {
            if t_next[i] < t_next[axis] {
                axis = i;
            }
        }

        let t_cross = t_next[axis];
        if t_cross >= 1.0 {
            break;
        }
        t_next[axis] += t_spacing[axis];

        // The crossed span runs from this crossing to the next event (or the
        // segment end); its midpoint is strictly inside, which pins down the
        // truncated voxel even when the crossing lands exactly on a boundary.
        let span_end = t_next.iter().fold(1.0f32, |end, &t| end.min(t));
        let t_mid = 0.5 * (t_cross + span_end);

        let position = VoxelPosition::from_continuous(from + delta * t_mid);
        if position != hits[hits.len() - 1].position {
            hits.push(VoxelHit {
                position,
                incidence: from + delta * t_cross,
            });
        }
    }

    hits
}

/// Scans an ordered hit sequence and returns the first entry that is both
/// inside the grid and currently solid, or `None` if the whole cast misses.
pub fn first_solid(grid: &VoxelGrid, hits: &[VoxelHit]) -> Option<VoxelHit> {
    hits.iter().find(|hit| grid.is_opaque(hit.position)).copied()
}
