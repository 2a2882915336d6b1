//! # Input Manager
//!
//! Tracks the previous-frame and current-frame boolean state of every
//! tracked input. The pair is what makes edge-triggered actions possible:
//! a break or place fires only on the released-to-pressed transition, so the
//! old states must be advanced exactly once per frame.

use std::collections::HashMap;

use super::input_state::{Key, MouseButton, ProcessedInputState, RawInputState};

const TRACKED_KEYS: [Key; 7] = [
    Key::Forward,
    Key::Backward,
    Key::Left,
    Key::Right,
    Key::Jump,
    Key::Sprint,
    Key::Exit,
];

const TRACKED_BUTTONS: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];

/// Manages the state of all tracked inputs between the windowing
/// collaborator and the engine.
///
/// The host calls the `intake_*` methods as events arrive; the engine calls
/// [`InputManager::get_and_reset_processed_input`] once per frame.
pub struct InputManager {
    /// Previous state of all tracked keys
    pub keyboard_inputs_old: HashMap<Key, bool>,
    /// Current state of all tracked keys
    pub keyboard_inputs_new: HashMap<Key, bool>,

    /// Previous state of each mouse button
    pub mouse_button_inputs_old: HashMap<MouseButton, bool>,
    /// Current state of each mouse button
    pub mouse_button_inputs_new: HashMap<MouseButton, bool>,

    /// Mouse movement delta since the last frame (x, y)
    mouse_delta: Option<(f64, f64)>,
}

impl InputManager {
    /// Creates a new `InputManager` with every tracked input released.
    pub fn new() -> Self {
        let mut keyboard_inputs_old = HashMap::new();
        let mut keyboard_inputs_new = HashMap::new();
        for key in TRACKED_KEYS {
            keyboard_inputs_old.insert(key, false);
            keyboard_inputs_new.insert(key, false);
        }

        let mut mouse_button_inputs_old = HashMap::new();
        let mut mouse_button_inputs_new = HashMap::new();
        for button in TRACKED_BUTTONS {
            mouse_button_inputs_old.insert(button, false);
            mouse_button_inputs_new.insert(button, false);
        }

        Self {
            keyboard_inputs_old,
            keyboard_inputs_new,
            mouse_button_inputs_old,
            mouse_button_inputs_new,
            mouse_delta: None,
        }
    }

    /// Records the pressed state of a key.
    pub fn intake_key(&mut self, key: Key, pressed: bool) {
        if let Some(key_state) = self.keyboard_inputs_new.get_mut(&key) {
            *key_state = pressed;
        }
    }

    /// Records the pressed state of a mouse button.
    pub fn intake_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let Some(button_state) = self.mouse_button_inputs_new.get_mut(&button) {
            *button_state = pressed;
        }
    }

    /// Records the mouse movement delta since the last frame.
    ///
    /// The host must recenter the cursor before the next frame's delta is
    /// measured, or the deltas stop being bounded.
    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta = Some(delta);
    }

    /// Copies the current states over the old states to prepare for the next
    /// frame's transition classification.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }

        for (button, new_state) in self.mouse_button_inputs_new.iter() {
            if let Some(old_state) = self.mouse_button_inputs_old.get_mut(button) {
                *old_state = *new_state;
            }
        }
    }

    /// Creates a processed input state from the current raw boolean states.
    pub fn create_processed_input_state(&self) -> ProcessedInputState {
        let mut key_states = HashMap::new();
        let mut mouse_button_states = HashMap::new();

        for (key, &new_state) in self.keyboard_inputs_new.iter() {
            let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
            key_states.insert(*key, RawInputState::from_raw_states(old_state, new_state));
        }

        for (button, &new_state) in self.mouse_button_inputs_new.iter() {
            let old_state = self
                .mouse_button_inputs_old
                .get(button)
                .copied()
                .unwrap_or(false);
            mouse_button_states.insert(*button, RawInputState::from_raw_states(old_state, new_state));
        }

        ProcessedInputState {
            key_states,
            mouse_button_states,
            mouse_delta: self.mouse_delta,
        }
    }

    /// Returns the processed input state and advances the internal state for
    /// the next frame.
    ///
    /// Call exactly once per frame; calling it twice in a frame turns every
    /// `Pressed` into `Held` early and edge-triggered actions are lost.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let processed_input = self.create_processed_input_state();
        self.move_old_states();
        self.mouse_delta = None;
        processed_input
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
