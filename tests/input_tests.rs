//! Integration tests for input state tracking and per-frame transition
//! classification.

use voxel_sandbox::{InputManager, Key, MouseButton, RawInputState};

#[test]
fn test_transition_classification_covers_all_state_pairs() {
    assert_eq!(
        RawInputState::from_raw_states(false, true),
        RawInputState::Pressed
    );
    assert_eq!(
        RawInputState::from_raw_states(true, true),
        RawInputState::Held
    );
    assert_eq!(
        RawInputState::from_raw_states(true, false),
        RawInputState::Released
    );
    assert_eq!(
        RawInputState::from_raw_states(false, false),
        RawInputState::NotPressed
    );

    assert!(RawInputState::Pressed.is_just_pressed());
    assert!(!RawInputState::Held.is_just_pressed());
    assert!(RawInputState::Pressed.is_active());
    assert!(RawInputState::Held.is_active());
    assert!(RawInputState::Released.is_just_released());
}

#[test]
fn test_held_button_is_pressed_for_exactly_one_frame() {
    let mut input = InputManager::new();

    input.intake_mouse_button(MouseButton::Left, true);
    let first = input.get_and_reset_processed_input();
    assert_eq!(
        first.get_mouse_button_state(MouseButton::Left),
        RawInputState::Pressed
    );

    // No release in between: subsequent frames see Held, never Pressed
    let second = input.get_and_reset_processed_input();
    assert_eq!(
        second.get_mouse_button_state(MouseButton::Left),
        RawInputState::Held
    );
    let third = input.get_and_reset_processed_input();
    assert_eq!(
        third.get_mouse_button_state(MouseButton::Left),
        RawInputState::Held
    );

    input.intake_mouse_button(MouseButton::Left, false);
    let fourth = input.get_and_reset_processed_input();
    assert_eq!(
        fourth.get_mouse_button_state(MouseButton::Left),
        RawInputState::Released
    );
    let fifth = input.get_and_reset_processed_input();
    assert_eq!(
        fifth.get_mouse_button_state(MouseButton::Left),
        RawInputState::NotPressed
    );
}

#[test]
fn test_keys_follow_the_same_transitions() {
    let mut input = InputManager::new();

    input.intake_key(Key::Jump, true);
    let snapshot = input.get_and_reset_processed_input();
    assert_eq!(snapshot.get_key_state(Key::Jump), RawInputState::Pressed);
    assert_eq!(
        snapshot.get_key_state(Key::Forward),
        RawInputState::NotPressed
    );

    let snapshot = input.get_and_reset_processed_input();
    assert_eq!(snapshot.get_key_state(Key::Jump), RawInputState::Held);
}

#[test]
fn test_mouse_delta_is_consumed_once_per_frame() {
    let mut input = InputManager::new();

    input.intake_mouse_motion((12.0, -4.0));
    let snapshot = input.get_and_reset_processed_input();
    assert_eq!(snapshot.get_mouse_delta(), Some((12.0, -4.0)));

    // The delta does not carry into the next frame
    let snapshot = input.get_and_reset_processed_input();
    assert_eq!(snapshot.get_mouse_delta(), None);
}
