//! # Engine State
//!
//! The main engine components: world voxel data, interaction (raycast and
//! placement), the player simulation, and mesh generation, coordinated by
//! [`EngineState`] in a strict once-per-frame update.
//!
//! ## Frame Order
//!
//! 1. Translate the processed input snapshot into a [`PlayerAction`]
//! 2. Player update: gravity/ground contact, planar movement, look angles
//! 3. Aim resolution: raycast from the eye, placement inference
//! 4. Edit application: break/place on the press transition, each followed
//!    by a full synchronous mesh rebuild
//!
//! The rebuild blocks the frame by design: edits are rare, user-triggered
//! events, and the renderer must never observe a mesh that disagrees with
//! the grid.

use std::time::{Duration, Instant};

use cgmath::Point3;
use log::{debug, info};

use crate::application_state::input_state::{Key, MouseButton, ProcessedInputState};
use crate::config::EngineConfig;
use crate::engine_state::rendering::atlas::TextureAtlas;
use crate::engine_state::rendering::meshing::WorldMesh;
use crate::engine_state::voxels::block::AIR;
use crate::engine_state::voxels::generation::WorldGenerator;
use crate::engine_state::voxels::grid::VoxelGrid;
use crate::engine_state::voxels::position::VoxelPosition;
use self::player_state::Player;

pub mod interaction;
pub mod player_state;
pub mod rendering;
pub mod voxels;

/// Represents player actions derived from one frame of input.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerAction {
    /// Move toward the look direction - true if pressed or held
    pub move_forward: bool,
    /// Move away from the look direction - true if pressed or held
    pub move_backward: bool,
    /// Strafe left - true if pressed or held
    pub move_left: bool,
    /// Strafe right - true if pressed or held
    pub move_right: bool,

    /// Jump while grounded - true if pressed or held
    pub jump: bool,
    /// Sprint modifier - true if pressed or held
    pub sprint: bool,

    /// Mouse delta driving the look angles this frame
    pub look_delta: Option<(f64, f64)>,

    /// Break the aimed voxel - true only on the press transition
    pub break_block: bool,
    /// Place at the aimed build position - true only on the press transition
    pub place_block: bool,

    /// Exit request - true while the exit key is down
    pub exit: bool,
}

/// What one frame update produced, for the host to consume.
///
/// Aim state is returned here instead of being persisted on the engine, so a
/// frame where no raycast connected cannot leak a stale target into the next.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    /// The solid voxel currently under the crosshair, if any.
    pub aimed_voxel: Option<VoxelPosition>,
    /// The cell a place action would write to, if a voxel is aimed at.
    pub aimed_build_voxel: Option<VoxelPosition>,
    /// The exact aim-ray point of incidence on the aimed voxel, for the
    /// host's aim indicator.
    pub aim_incidence: Option<Point3<f32>>,
    /// Whether an edit triggered a mesh rebuild this frame.
    pub mesh_rebuilt: bool,
    /// Whether the exit key is down.
    pub exit_requested: bool,
}

/// Owns the world grid, the generated mesh, and the player, and advances
/// them one frame at a time.
pub struct EngineState {
    world: VoxelGrid,
    mesh: WorldMesh,
    atlas: TextureAtlas,
    player: Player,
    config: EngineConfig,
}

impl EngineState {
    /// Creates an engine with a freshly generated world and its initial mesh.
    ///
    /// # Arguments
    /// * `atlas` - Texture atlas dimensions for UV generation
    /// * `config` - Engine tuning constants
    /// * `generator` - Initial world state generator
    pub fn new(atlas: TextureAtlas, config: EngineConfig, generator: &dyn WorldGenerator) -> Self {
        let world = VoxelGrid::from_generator(generator);
        let mesh = WorldMesh::build(&world, &atlas);
        info!(
            "world initialized: {} solid voxels, {} visible faces",
            world.solid_count(),
            mesh.face_count()
        );

        EngineState {
            world,
            mesh,
            atlas,
            player: Player::spawn_centered(),
            config,
        }
    }

    /// Advances the engine by one frame.
    ///
    /// # Arguments
    /// * `input` - The processed input snapshot for this frame
    /// * `dt` - Time elapsed since the last frame
    ///
    /// # Returns
    /// A [`FrameOutput`] describing the aim state and any side effects.
    pub fn update(&mut self, input: ProcessedInputState, dt: Duration) -> FrameOutput {
        let actions = Self::translate_processed_input(&input);

        self.player.update(&self.world, &actions, &self.config, dt);
        let aim = self.player.resolve_aim(&self.world, &self.config);

        let mut mesh_rebuilt = false;
        if let Some(target) = aim.target {
            if actions.break_block {
                self.world
                    .set(target.position.x, target.position.y, target.position.z, AIR);
                self.rebuild_mesh();
                mesh_rebuilt = true;
            } else if actions.place_block {
                if let Some(build) = aim.build_position {
                    // The placement heuristic can point at an occupied or
                    // out-of-range cell; re-check right before writing.
                    if self.world.voxel_at(build) == Some(AIR) {
                        self.world.set(build.x, build.y, build.z, self.config.placed_block);
                        self.rebuild_mesh();
                        mesh_rebuilt = true;
                    }
                }
            }
        }

        FrameOutput {
            aimed_voxel: aim.target.map(|hit| hit.position),
            aimed_build_voxel: aim.build_position,
            aim_incidence: aim.target.map(|hit| hit.incidence),
            mesh_rebuilt,
            exit_requested: actions.exit,
        }
    }

    fn rebuild_mesh(&mut self) {
        let started = Instant::now();
        self.mesh = WorldMesh::build(&self.world, &self.atlas);
        debug!(
            "world mesh rebuilt: {} faces in {:?}",
            self.mesh.face_count(),
            started.elapsed()
        );
    }

    /// The current world mesh, always consistent with the grid.
    pub fn mesh(&self) -> &WorldMesh {
        &self.mesh
    }

    /// Read access to the world grid.
    pub fn world(&self) -> &VoxelGrid {
        &self.world
    }

    /// Read access to the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Translates the processed input state into player actions.
    ///
    /// Movement, jump, sprint, and exit respond to pressed-or-held keys;
    /// the edit actions fire only on the press transition.
    fn translate_processed_input(input: &ProcessedInputState) -> PlayerAction {
        PlayerAction {
            move_forward: input.get_key_state(Key::Forward).is_active(),
            move_backward: input.get_key_state(Key::Backward).is_active(),
            move_left: input.get_key_state(Key::Left).is_active(),
            move_right: input.get_key_state(Key::Right).is_active(),
            jump: input.get_key_state(Key::Jump).is_active(),
            sprint: input.get_key_state(Key::Sprint).is_active(),
            look_delta: input.get_mouse_delta(),
            break_block: input
                .get_mouse_button_state(MouseButton::Left)
                .is_just_pressed(),
            place_block: input
                .get_mouse_button_state(MouseButton::Right)
                .is_just_pressed(),
            exit: input.get_key_state(Key::Exit).is_active(),
        }
    }
}
