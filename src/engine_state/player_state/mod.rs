//! # Player State
//!
//! First-person player simulation against the voxel grid: gravity and ground
//! snapping, planar movement, look angles, and aim resolution. The player
//! owns its continuous position, a yaw/pitch pair, and a vertical velocity
//! scalar, all mutated exactly once per frame.
//!
//! Grounded-versus-falling is not a persisted mode: it is derived fresh each
//! frame from a single opacity query at the player's feet. The feet check is
//! a single-point test, not an AABB sweep.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use cgmath::{InnerSpace, Point3, Rad, Vector2, Vector3};

use super::interaction::placement::build_position;
use super::interaction::raycast::{cast_ray, first_solid, VoxelHit};
use super::voxels::grid::{VoxelGrid, WORLD_DIM};
use super::voxels::position::VoxelPosition;
use super::PlayerAction;
use crate::config::EngineConfig;

/// The aimed voxel and the adjacent build-eligible cell for one frame.
///
/// Produced fresh by [`Player::resolve_aim`] every frame and threaded
/// through the frame update; never persisted across frames.
#[derive(Debug, Clone, Copy)]
pub struct AimResolution {
    /// The first solid voxel on the aim ray, if any.
    pub target: Option<VoxelHit>,
    /// The cell adjacent to the struck face, eligible for placement. Present
    /// exactly when `target` is.
    pub build_position: Option<VoxelPosition>,
}

/// A first-person player in the voxel world.
#[derive(Debug)]
pub struct Player {
    /// The player's feet position in world space.
    pub position: Point3<f32>,
    /// Horizontal look rotation in radians; unbounded, wraps through trig.
    pub yaw: Rad<f32>,
    /// Vertical look rotation in radians, clamped to ±90°.
    pub pitch: Rad<f32>,
    /// Vertical velocity in voxels/s; negative while falling.
    pub vertical_velocity: f32,
}

impl Player {
    /// Creates a player at the given position, looking level along -Z.
    pub fn new<V: Into<Point3<f32>>>(position: V) -> Self {
        Player {
            position: position.into(),
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            vertical_velocity: 0.0,
        }
    }

    /// Creates a player at the center of the world.
    pub fn spawn_centered() -> Self {
        let center = (WORLD_DIM / 2) as f32;
        Player::new(Point3::new(center, center, center))
    }

    /// Advances the player one frame: gravity and ground contact, planar
    /// movement, then look angles.
    pub fn update(
        &mut self,
        grid: &VoxelGrid,
        actions: &PlayerAction,
        config: &EngineConfig,
        dt: Duration,
    ) {
        let dt = dt.as_secs_f32();

        // Gravity and ground contact. The feet voxel is sampled before the
        // fall step so one frame of gravity cannot tunnel the snap target.
        let feet = VoxelPosition::from_continuous(self.position);
        self.vertical_velocity -= config.gravity * dt;
        self.position.y += self.vertical_velocity * dt;
        if grid.is_opaque(feet) {
            if actions.jump {
                self.vertical_velocity = config.jump_impulse;
            } else {
                self.position.y = (feet.y + 1) as f32;
                self.vertical_velocity = 0.0;
            }
        }

        // Planar movement, camera-relative.
        let mut movement_input = Vector2::new(
            if actions.move_left {
                1.0
            } else if actions.move_right {
                -1.0
            } else {
                0.0
            },
            if actions.move_forward {
                1.0
            } else if actions.move_backward {
                -1.0
            } else {
                0.0
            },
        );
        if movement_input.magnitude() > 1.0 {
            movement_input = movement_input.normalize();
        }
        if actions.sprint {
            movement_input *= config.sprint_multiplier;
        }

        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let forward = Vector3::new(yaw_sin, 0.0, -yaw_cos);
        let leftward = Vector3::new(-yaw_cos, 0.0, -yaw_sin);
        self.position +=
            (forward * movement_input.y + leftward * movement_input.x) * config.move_speed * dt;

        // Look angles.
        if let Some((delta_x, delta_y)) = actions.look_delta {
            self.yaw += Rad(delta_x as f32 * config.look_sensitivity * dt);
            self.pitch += Rad(delta_y as f32 * config.look_sensitivity * dt);
        }

        if self.pitch < -Rad(FRAC_PI_2) {
            self.pitch = -Rad(FRAC_PI_2);
        } else if self.pitch > Rad(FRAC_PI_2) {
            self.pitch = Rad(FRAC_PI_2);
        }
    }

    /// The eye position the aim ray is cast from.
    pub fn eye_position(&self, config: &EngineConfig) -> Point3<f32> {
        self.position + Vector3::unit_y() * config.eye_height
    }

    /// Casts the aim ray for the current frame and resolves the aimed voxel
    /// and its adjacent build position.
    ///
    /// The ray runs from the eye to an endpoint `aim_reach` along the look
    /// direction from the player position (not the eye). A cast that never
    /// touches a solid voxel is a normal miss and yields an empty resolution.
    pub fn resolve_aim(&self, grid: &VoxelGrid, config: &EngineConfig) -> AimResolution {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        let aim_direction = Vector3::new(pitch_cos * yaw_sin, -pitch_sin, -pitch_cos * yaw_cos);

        let eye = self.eye_position(config);
        let endpoint = self.position + aim_direction * config.aim_reach;

        let hits = cast_ray(eye, endpoint);
        let target = first_solid(grid, &hits);
        let build_position = target.as_ref().map(build_position);

        AimResolution {
            target,
            build_position,
        }
    }
}
