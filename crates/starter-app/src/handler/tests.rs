//! Tests for the update function

use super::*;
use crate::input_key::InputKey;
use crate::process::process_message;
use crate::selection::SELECTION_KEY;
use crate::state::AppState;
use serde_json::json;
use starter_core::{catalog, ImageHandle, STARTERS};

#[test]
fn test_quit_message() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_key_produces_follow_up_message() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(result.message, Some(Message::SelectIndex(1)));
}

#[test]
fn test_select_index_produces_select() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::SelectIndex(2));
    assert_eq!(result.message, Some(Message::Select(STARTERS[2].clone())));
}

#[test]
fn test_select_index_out_of_range_is_ignored() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::SelectIndex(7));
    assert!(result.message.is_none());
    assert_eq!(state.current(), &STARTERS[0]);
}

#[test]
fn test_select_then_current_for_all_starters() {
    let mut state = AppState::new();
    for starter in catalog() {
        update(&mut state, Message::Select(starter.clone()));
        assert_eq!(state.current(), starter);
    }
}

#[test]
fn test_select_next_wraps() {
    let mut state = AppState::new();

    process_message(&mut state, Message::SelectNext);
    assert_eq!(state.current(), &STARTERS[1]);

    process_message(&mut state, Message::SelectNext);
    process_message(&mut state, Message::SelectNext);
    assert_eq!(state.current(), &STARTERS[0]);
}

#[test]
fn test_select_previous_wraps() {
    let mut state = AppState::new();

    process_message(&mut state, Message::SelectPrevious);
    assert_eq!(state.current(), &STARTERS[2]);

    process_message(&mut state, Message::SelectPrevious);
    assert_eq!(state.current(), &STARTERS[1]);
}

#[test]
fn test_keyboard_selection_flow() {
    let mut state = AppState::new();

    process_message(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(state.current().name(), "Charmander");

    process_message(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.current().name(), "Squirtle");
}

#[test]
fn test_configuration_change_preserves_selection() {
    let mut state = AppState::new();
    process_message(&mut state, Message::Select(STARTERS[2].clone()));

    process_message(
        &mut state,
        Message::ConfigurationChanged {
            width: 40,
            height: 60,
        },
    );

    assert_eq!(state.current(), &STARTERS[2]);
    assert_eq!(state.screen.generation, 2);
}

#[test]
fn test_configuration_change_restores_from_saved_tuple() {
    let mut state = AppState::new();
    state.registry.save(
        SELECTION_KEY,
        vec![json!("Squirtle"), json!(ImageHandle::SQUIRTLE.raw())],
    );

    process_message(
        &mut state,
        Message::ConfigurationChanged {
            width: 120,
            height: 30,
        },
    );

    assert_eq!(state.current(), &STARTERS[2]);
    assert_ne!(state.current(), &STARTERS[0]);
}

#[test]
fn test_configuration_change_requests_render() {
    let mut state = AppState::new();
    state.take_needs_render();

    process_message(
        &mut state,
        Message::ConfigurationChanged {
            width: 80,
            height: 24,
        },
    );

    assert!(state.take_needs_render());
}
