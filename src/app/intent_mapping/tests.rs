use crate::app::state::EditorMode;
use crate::app::{AppCommand, AppIntent, AppState, EditorKey, PointerButton};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_in(mode: EditorMode) -> AppState {
    let mut state = AppState::new();
    state.interaction.mode = mode;
    state
}

fn set_mode(mode: EditorMode) -> AppCommand {
    AppCommand::SetEditorMode { mode }
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands, vec![AppCommand::SaveFile { path: None }]);
}

#[test]
fn drag_start_in_idle_enters_dragging() {
    let state = state_in(EditorMode::Idle);
    let world_pos = Vec2::new(3.0, 4.0);

    let commands = map_intent_to_commands(&state, AppIntent::DragStarted { world_pos });

    assert_eq!(
        commands,
        vec![
            AppCommand::BeginDrag { world_pos },
            set_mode(EditorMode::Dragging)
        ]
    );
}

#[test]
fn drag_events_outside_dragging_are_ignored() {
    let state = state_in(EditorMode::Grabbing);

    assert!(map_intent_to_commands(
        &state,
        AppIntent::DragStarted {
            world_pos: Vec2::ZERO
        }
    )
    .is_empty());
    assert!(map_intent_to_commands(
        &state,
        AppIntent::DragMoved {
            world_pos: Vec2::ZERO
        }
    )
    .is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::DragEnded).is_empty());
}

#[test]
fn drag_end_returns_to_idle() {
    let state = state_in(EditorMode::Dragging);

    let commands = map_intent_to_commands(&state, AppIntent::DragEnded);

    assert_eq!(commands, vec![AppCommand::EndDrag, set_mode(EditorMode::Idle)]);
}

#[test]
fn click_in_idle_depends_on_button() {
    let state = state_in(EditorMode::Idle);
    let world_pos = Vec2::new(7.0, 8.0);

    let primary = map_intent_to_commands(
        &state,
        AppIntent::Clicked {
            world_pos,
            button: PointerButton::Primary,
        },
    );
    let secondary = map_intent_to_commands(
        &state,
        AppIntent::Clicked {
            world_pos,
            button: PointerButton::Secondary,
        },
    );

    assert_eq!(primary, vec![AppCommand::ToggleSelectionAt { world_pos }]);
    assert_eq!(secondary, vec![AppCommand::AddNodeAtPosition { world_pos }]);
}

#[test]
fn click_while_grabbing_deselects_and_suppresses_click() {
    let state = state_in(EditorMode::Grabbing);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::Clicked {
            world_pos: Vec2::ZERO,
            button: PointerButton::Secondary,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::ClearSelection, set_mode(EditorMode::Idle)]
    );
}

#[test]
fn click_while_dragging_only_leaves_the_gesture() {
    let state = state_in(EditorMode::Dragging);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::Clicked {
            world_pos: Vec2::ZERO,
            button: PointerButton::Primary,
        },
    );

    assert_eq!(commands, vec![AppCommand::EndDrag, set_mode(EditorMode::Idle)]);
}

#[test]
fn pointer_move_while_grabbing_translates_by_delta() {
    let mut state = state_in(EditorMode::Grabbing);
    state.interaction.last_pointer = Some(Vec2::new(10.0, 10.0));
    let world_pos = Vec2::new(15.0, 7.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { world_pos });

    assert_eq!(
        commands,
        vec![
            AppCommand::MoveSelectedNodes {
                delta: Vec2::new(5.0, -3.0)
            },
            AppCommand::RecordPointer { world_pos }
        ]
    );
}

#[test]
fn pointer_move_without_baseline_only_records() {
    let state = state_in(EditorMode::Grabbing);
    let world_pos = Vec2::new(1.0, 1.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { world_pos });

    assert_eq!(commands, vec![AppCommand::RecordPointer { world_pos }]);
}

#[test]
fn connect_key_requires_exactly_two_selected() {
    let mut state = AppState::new();
    let ids = state
        .graph
        .add_nodes([Vec2::ZERO, Vec2::new(60.0, 0.0), Vec2::new(0.0, 60.0)]);

    state.graph.toggle_selection(ids[0]);
    let one = map_intent_to_commands(
        &state,
        AppIntent::KeyPressed {
            key: EditorKey::Connect,
        },
    );
    state.graph.toggle_selection(ids[1]);
    let two = map_intent_to_commands(
        &state,
        AppIntent::KeyPressed {
            key: EditorKey::Connect,
        },
    );
    state.graph.toggle_selection(ids[2]);
    let three = map_intent_to_commands(
        &state,
        AppIntent::KeyPressed {
            key: EditorKey::Disconnect,
        },
    );

    assert!(one.is_empty());
    assert_eq!(
        two,
        vec![AppCommand::ConnectSelectedNodes, AppCommand::ClearSelection]
    );
    assert!(three.is_empty());
}

#[test]
fn select_all_toggle_depends_on_full_selection() {
    let mut state = AppState::new();
    state.graph.add_nodes([Vec2::ZERO, Vec2::new(50.0, 0.0)]);
    let key = AppIntent::KeyPressed {
        key: EditorKey::SelectAllToggle,
    };

    assert_eq!(
        map_intent_to_commands(&state, key.clone()),
        vec![AppCommand::SelectAllNodes]
    );

    state.graph.select_all();
    assert_eq!(
        map_intent_to_commands(&state, key),
        vec![AppCommand::ClearSelection]
    );
}

#[test]
fn grab_key_enters_grabbing_from_any_state() {
    for mode in [EditorMode::Idle, EditorMode::Grabbing] {
        let commands = map_intent_to_commands(
            &state_in(mode),
            AppIntent::KeyPressed {
                key: EditorKey::Grab,
            },
        );
        assert_eq!(commands, vec![set_mode(EditorMode::Grabbing)]);
    }

    let commands = map_intent_to_commands(
        &state_in(EditorMode::Dragging),
        AppIntent::KeyPressed {
            key: EditorKey::Grab,
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::EndDrag, set_mode(EditorMode::Grabbing)]
    );
}
