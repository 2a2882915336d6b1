//! # Voxel Sandbox Demo
//!
//! Headless demonstration driver: builds a world, then steps the engine
//! through a scripted sequence of frames (walk, sprint, look around, break a
//! block, place a block) and logs what each stage produced. A real host
//! would replace the script with window events feeding the same
//! `InputManager`.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- [config.json]
//! ```

use std::time::Duration;

use log::{info, warn};
use voxel_sandbox::engine_state::voxels::generation::ScatteredTerrain;
use voxel_sandbox::{EngineConfig, EngineState, InputManager, Key, MouseButton, TextureAtlas};

const FRAME_TIME: Duration = Duration::from_millis(16);

fn load_config() -> EngineConfig {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match EngineConfig::from_json_str(&json) {
                Ok(config) => {
                    info!("loaded config from {path}");
                    config
                }
                Err(err) => {
                    warn!("config {path} did not parse ({err}); using defaults");
                    EngineConfig::default()
                }
            },
            Err(err) => {
                warn!("could not read {path} ({err}); using defaults");
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    }
}

fn main() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = load_config();
    let atlas = TextureAtlas::new(1024, 2048);
    let mut engine = EngineState::new(atlas, config, &ScatteredTerrain::default());
    let mut input = InputManager::new();

    for frame in 0u32..240 {
        // Scripted input: walk forward, sprint partway, swing the camera
        // down toward the ground, then break and place once each.
        input.intake_key(Key::Forward, (10..70).contains(&frame));
        input.intake_key(Key::Sprint, (40..70).contains(&frame));
        if (80..110).contains(&frame) {
            input.intake_mouse_motion((0.0, 160.0));
        }
        input.intake_mouse_button(MouseButton::Left, frame == 140);
        input.intake_mouse_button(MouseButton::Right, frame == 180);

        let output = engine.update(input.get_and_reset_processed_input(), FRAME_TIME);

        if output.mesh_rebuilt {
            info!(
                "frame {frame}: mesh rebuilt, {} triangles, aimed at {:?}",
                engine.mesh().triangle_count(),
                output.aimed_voxel
            );
        }
        if output.exit_requested {
            info!("frame {frame}: exit requested");
            break;
        }
    }

    let player = engine.player();
    info!(
        "demo finished: player at ({:.2}, {:.2}, {:.2}), {} solid voxels, {} visible faces",
        player.position.x,
        player.position.y,
        player.position.z,
        engine.world().solid_count(),
        engine.mesh().face_count()
    );
}
