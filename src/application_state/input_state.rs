//! # Input State
//!
//! This module defines the input state types used by the input manager.
//! Inputs are identified by logical action rather than physical key code;
//! mapping scancodes to these actions is the windowing collaborator's job.

use std::collections::HashMap;

/// Logical keyboard inputs tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move toward the look direction
    Forward,
    /// Move away from the look direction
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
    /// Jump while grounded
    Jump,
    /// Sprint modifier
    Sprint,
    /// Request application exit
    Exit,
}

/// Logical mouse buttons tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Break the aimed voxel
    Left,
    /// Place a voxel at the aimed build position
    Right,
}

/// Represents the state of a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInputState {
    /// Key/button is not pressed
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl Default for RawInputState {
    fn default() -> Self {
        Self::NotPressed
    }
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Determines if the input was just pressed this frame
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    /// Determines if the input was just released this frame
    pub fn is_just_released(&self) -> bool {
        matches!(self, RawInputState::Released)
    }

    /// Classifies the transition between the previous and current raw states
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// A snapshot of the processed input states with state transitions.
///
/// This struct provides access to the processed state of all tracked inputs,
/// with key and button states translated into [`RawInputState`] values.
pub struct ProcessedInputState {
    /// Current state of all tracked keys
    pub key_states: HashMap<Key, RawInputState>,

    /// Current state of mouse buttons
    pub mouse_button_states: HashMap<MouseButton, RawInputState>,

    /// Mouse movement delta since the last frame (x, y), after the host
    /// recentered the cursor
    pub mouse_delta: Option<(f64, f64)>,
}

impl ProcessedInputState {
    /// Gets the state of a key
    pub fn get_key_state(&self, key: Key) -> RawInputState {
        self.key_states.get(&key).copied().unwrap_or_default()
    }

    /// Gets the state of a mouse button
    pub fn get_mouse_button_state(&self, button: MouseButton) -> RawInputState {
        self.mouse_button_states.get(&button).copied().unwrap_or_default()
    }

    /// Gets the mouse movement delta since the last frame
    pub fn get_mouse_delta(&self) -> Option<(f64, f64)> {
        self.mouse_delta
    }
}
