//! Integration tests for placement resolution: dominant-axis face inference
//! from the incidence point's offset off the hit voxel's center.

use cgmath::{Point3, Vector3};
use voxel_sandbox::engine_state::interaction::placement::build_position;
use voxel_sandbox::{VoxelHit, VoxelPosition};

/// Builds a hit whose incidence sits at the given offset from the voxel
/// center.
fn hit_with_local_offset(local: Vector3<f32>) -> VoxelHit {
    let position = VoxelPosition::new(10, 10, 10);
    VoxelHit {
        position,
        incidence: Point3::new(
            position.x as f32 + 0.5 + local.x,
            position.y as f32 + 0.5 + local.y,
            position.z as f32 + 0.5 + local.z,
        ),
    }
}

#[test]
fn test_x_dominant_positive_offset_builds_on_plus_x() {
    let hit = hit_with_local_offset(Vector3::new(0.6, 0.1, 0.1));
    assert_eq!(build_position(&hit), VoxelPosition::new(11, 10, 10));
}

#[test]
fn test_x_dominant_negative_offset_builds_on_minus_x() {
    let hit = hit_with_local_offset(Vector3::new(-0.6, 0.1, 0.1));
    assert_eq!(build_position(&hit), VoxelPosition::new(9, 10, 10));
}

#[test]
fn test_y_dominant_offset_builds_vertically() {
    let up = hit_with_local_offset(Vector3::new(0.1, 0.6, 0.1));
    assert_eq!(build_position(&up), VoxelPosition::new(10, 11, 10));

    let down = hit_with_local_offset(Vector3::new(0.1, -0.6, 0.1));
    assert_eq!(build_position(&down), VoxelPosition::new(10, 9, 10));
}

#[test]
fn test_z_dominant_negative_offset_builds_on_minus_z() {
    let hit = hit_with_local_offset(Vector3::new(0.1, 0.1, -0.6));
    assert_eq!(build_position(&hit), VoxelPosition::new(10, 10, 9));
}

#[test]
fn test_equal_y_and_z_magnitudes_resolve_to_z() {
    let hit = hit_with_local_offset(Vector3::new(0.1, 0.5, 0.5));
    assert_eq!(build_position(&hit), VoxelPosition::new(10, 10, 11));

    let negative = hit_with_local_offset(Vector3::new(0.1, 0.5, -0.5));
    assert_eq!(build_position(&negative), VoxelPosition::new(10, 10, 9));
}

#[test]
fn test_equal_x_and_z_magnitudes_resolve_to_z() {
    let hit = hit_with_local_offset(Vector3::new(0.5, 0.1, 0.5));
    assert_eq!(build_position(&hit), VoxelPosition::new(10, 10, 11));
}

#[test]
fn test_result_can_be_out_of_range_and_needs_revalidation() {
    // A hit on a boundary voxel can point the build position outside the
    // grid; the resolver reports it as-is and leaves validation to callers
    let position = VoxelPosition::new(0, 10, 10);
    let hit = VoxelHit {
        position,
        incidence: Point3::new(0.1, 10.5, 10.5),
    };

    let build = build_position(&hit);
    assert_eq!(build, VoxelPosition::new(-1, 10, 10));
    assert!(!build.is_valid());
}
