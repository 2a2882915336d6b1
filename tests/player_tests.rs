//! Integration tests for the player simulation: gravity and ground
//! snapping, jumping, camera-relative movement, look clamping, and aim
//! resolution.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use cgmath::{InnerSpace, Point3, Rad, Vector2};
use voxel_sandbox::engine_state::player_state::Player;
use voxel_sandbox::engine_state::voxels::block::BlockKind;
use voxel_sandbox::engine_state::PlayerAction;
use voxel_sandbox::{EngineConfig, VoxelGrid, VoxelPosition};

const DT: Duration = Duration::from_millis(16);

fn dt_secs() -> f32 {
    DT.as_secs_f32()
}

fn assert_close(a: f32, b: f32, context: &str) {
    assert!((a - b).abs() < 1e-5, "{context}: {a} vs {b}");
}

/// A grid with a single solid voxel under the given feet position.
fn grid_with_floor_at(feet: VoxelPosition) -> VoxelGrid {
    let mut grid = VoxelGrid::empty();
    grid.set(feet.x, feet.y, feet.z, BlockKind::Stone.id());
    grid
}

#[test]
fn test_grounded_player_snaps_to_the_voxel_top_exactly() {
    let grid = grid_with_floor_at(VoxelPosition::new(5, 10, 5));
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    player.update(&grid, &PlayerAction::default(), &config, DT);

    assert_eq!(player.position.y, 11.0, "snap lands exactly on the surface");
    assert_eq!(player.vertical_velocity, 0.0);
}

#[test]
fn test_jump_sets_the_configured_impulse_instead_of_snapping() {
    let grid = grid_with_floor_at(VoxelPosition::new(5, 10, 5));
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        jump: true,
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);

    assert_eq!(player.vertical_velocity, config.jump_impulse);
    assert_ne!(player.position.y, 11.0, "a jump frame does not snap");
}

#[test]
fn test_default_jump_impulse_is_half_of_gravity() {
    let config = EngineConfig::default();
    assert_eq!(config.jump_impulse, config.gravity / 2.0);
}

#[test]
fn test_unsupported_player_accelerates_downward() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    player.update(&grid, &PlayerAction::default(), &config, DT);

    let expected_velocity = -config.gravity * dt_secs();
    assert_close(player.vertical_velocity, expected_velocity, "fall velocity");
    assert_close(
        player.position.y,
        10.5 + expected_velocity * dt_secs(),
        "fall distance",
    );
}

#[test]
fn test_forward_movement_follows_the_yaw_basis() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        move_forward: true,
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);

    // Looking along -Z at yaw 0: forward movement decreases z only
    assert_close(player.position.x, 5.5, "x stays");
    assert_close(
        player.position.z,
        5.5 - config.move_speed * dt_secs(),
        "forward displacement",
    );
}

#[test]
fn test_strafe_left_at_zero_yaw_decreases_x() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        move_left: true,
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);

    assert_close(
        player.position.x,
        5.5 - config.move_speed * dt_secs(),
        "strafe displacement",
    );
    assert_close(player.position.z, 5.5, "z stays");
}

#[test]
fn test_diagonal_movement_is_normalized() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        move_forward: true,
        move_left: true,
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);

    let planar = Vector2::new(player.position.x - 5.5, player.position.z - 5.5);
    assert_close(
        planar.magnitude(),
        config.move_speed * dt_secs(),
        "diagonal speed matches the single-axis speed",
    );
}

#[test]
fn test_sprint_scales_the_movement_vector() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        move_forward: true,
        sprint: true,
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);

    assert_close(
        player.position.z,
        5.5 - config.move_speed * config.sprint_multiplier * dt_secs(),
        "sprint displacement",
    );
}

#[test]
fn test_look_delta_accumulates_scaled_angles() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        look_delta: Some((100.0, 50.0)),
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);

    assert_close(
        player.yaw.0,
        100.0 * config.look_sensitivity * dt_secs(),
        "yaw from horizontal delta",
    );
    assert_close(
        player.pitch.0,
        50.0 * config.look_sensitivity * dt_secs(),
        "pitch from vertical delta",
    );
}

#[test]
fn test_pitch_clamps_at_ninety_degrees_and_yaw_does_not() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let mut player = Player::new(Point3::new(5.5, 10.5, 5.5));

    let actions = PlayerAction {
        look_delta: Some((1.0e6, 1.0e6)),
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);
    assert_eq!(player.pitch, Rad(FRAC_PI_2));
    assert!(player.yaw.0 > FRAC_PI_2, "yaw is unbounded");

    let actions = PlayerAction {
        look_delta: Some((0.0, -1.0e7)),
        ..PlayerAction::default()
    };
    player.update(&grid, &actions, &config, DT);
    assert_eq!(player.pitch, Rad(-FRAC_PI_2));
}

#[test]
fn test_aim_resolution_finds_the_wall_ahead() {
    let mut grid = VoxelGrid::empty();
    grid.set(5, 5, 1, BlockKind::Stone.id());
    let config = EngineConfig::default();
    let player = Player::new(Point3::new(5.5, 5.5, 5.5));

    let aim = player.resolve_aim(&grid, &config);

    let target = aim.target.expect("the wall is within reach");
    assert_eq!(target.position, VoxelPosition::new(5, 5, 1));
    assert!(
        aim.build_position.is_some(),
        "a build position accompanies every target"
    );

    let incidence: [f32; 3] = target.incidence.into();
    assert!(incidence[2] >= 1.0 - 1e-5 && incidence[2] <= 2.0 + 1e-5);
}

#[test]
fn test_aim_miss_resolves_to_nothing() {
    let grid = VoxelGrid::empty();
    let config = EngineConfig::default();
    let player = Player::new(Point3::new(5.5, 5.5, 5.5));

    let aim = player.resolve_aim(&grid, &config);
    assert!(aim.target.is_none());
    assert!(aim.build_position.is_none());
}

#[test]
fn test_aim_ignores_solid_voxels_beyond_reach() {
    let mut grid = VoxelGrid::empty();
    // Reach is 5 from the player position; this wall sits one voxel past
    // the aim segment's end
    grid.set(5, 5, 6, BlockKind::Stone.id());
    let config = EngineConfig::default();
    let player = Player::new(Point3::new(5.5, 5.5, 12.5));

    let aim = player.resolve_aim(&grid, &config);
    assert!(aim.target.is_none());
}
