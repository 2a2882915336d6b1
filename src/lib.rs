#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! # Voxel Sandbox
//!
//! A minimal voxel-world engine: a fixed-size 3D grid of typed voxels, a mesh
//! generator that turns the grid into renderable triangle geometry, a
//! ray-based voxel picker for breaking and placing blocks, and grid-aware
//! player physics.
//!
//! The engine deliberately stops at the vertex buffer. Rendering, windowing,
//! and texture loading belong to the host application; the contract with them
//! is:
//!
//! * the host supplies the atlas pixel dimensions ([`TextureAtlas`]) and the
//!   per-frame input state (via [`InputManager`]),
//! * the engine produces a flat vertex list plus a visible-face count
//!   ([`WorldMesh`]) and a per-frame [`FrameOutput`] describing the aimed
//!   voxel, the eligible build position, and whether the mesh was rebuilt.
//!
//! ## Key Modules
//!
//! * `application_state` - Input state tracking and per-frame transition
//!   classification
//! * `engine_state` - The world grid, meshing, raycasting, placement, and
//!   player simulation
//! * `config` - Engine tuning constants, optionally loaded from JSON
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use voxel_sandbox::{EngineState, EngineConfig, InputManager, TextureAtlas};
//! use voxel_sandbox::engine_state::voxels::generation::ScatteredTerrain;
//!
//! let atlas = TextureAtlas::new(1024, 2048);
//! let mut engine = EngineState::new(atlas, EngineConfig::default(), &ScatteredTerrain::default());
//! let mut input = InputManager::new();
//!
//! let output = engine.update(input.get_and_reset_processed_input(), Duration::from_millis(16));
//! let triangles = engine.mesh().triangle_count();
//! # let _ = (output, triangles);
//! ```
//!
//! The frame loop is strictly single-threaded: the grid, the mesh, and the
//! player are owned by [`EngineState`], every edit rebuilds the whole mesh
//! before the update returns, and nothing is shared across threads.

pub mod application_state;
pub mod config;
pub mod engine_state;

pub use application_state::input_manager::InputManager;
pub use application_state::input_state::{Key, MouseButton, ProcessedInputState, RawInputState};
pub use config::EngineConfig;
pub use engine_state::interaction::raycast::{cast_ray, first_solid, VoxelHit};
pub use engine_state::rendering::atlas::TextureAtlas;
pub use engine_state::rendering::meshing::WorldMesh;
pub use engine_state::rendering::vertex::Vertex;
pub use engine_state::voxels::grid::{VoxelGrid, WORLD_DIM};
pub use engine_state::voxels::position::VoxelPosition;
pub use engine_state::{EngineState, FrameOutput};
