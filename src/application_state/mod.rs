//! # Application State
//!
//! Input-facing half of the engine: the windowing collaborator feeds raw
//! key/button/mouse state into [`input_manager::InputManager`] as events
//! arrive, and once per frame the engine consumes a
//! [`input_state::ProcessedInputState`] snapshot with per-input transition
//! classification.

pub mod input_manager;
pub mod input_state;
