//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeiger- und Tastatur-Intents bilden die Interaktions-Zustandsmaschine:
//! der neue Modus steckt in `AppCommand::SetEditorMode`, alle übrigen
//! Commands sind die Effekte des Übergangs. Die Funktion liest den
//! Zustand nur und ist ohne UI-Toolkit testbar.

use super::events::{EditorKey, PointerButton};
use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let mode = state.interaction.mode;

    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::NewDocumentRequested => vec![AppCommand::NewDocument],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::ExportSceneRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportScenePathSelected { path } => vec![AppCommand::ExportScene { path }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::GenerateTemplateRequested { template } => {
            vec![AppCommand::GenerateTemplate { template }]
        }

        AppIntent::PointerDown { world_pos, .. } => vec![AppCommand::RecordPointer { world_pos }],
        AppIntent::PointerUp { .. } => vec![],
        AppIntent::PointerMoved { world_pos } => match (mode, state.interaction.last_pointer) {
            (EditorMode::Grabbing, Some(previous)) => vec![
                AppCommand::MoveSelectedNodes {
                    delta: world_pos - previous,
                },
                AppCommand::RecordPointer { world_pos },
            ],
            _ => vec![AppCommand::RecordPointer { world_pos }],
        },

        AppIntent::DragStarted { world_pos } => match mode {
            EditorMode::Idle => vec![
                AppCommand::BeginDrag { world_pos },
                AppCommand::SetEditorMode {
                    mode: EditorMode::Dragging,
                },
            ],
            _ => vec![],
        },
        AppIntent::DragMoved { world_pos } => match mode {
            EditorMode::Dragging => vec![AppCommand::DragTargetTo { world_pos }],
            _ => vec![],
        },
        AppIntent::DragEnded => match mode {
            EditorMode::Dragging => vec![
                AppCommand::EndDrag,
                AppCommand::SetEditorMode {
                    mode: EditorMode::Idle,
                },
            ],
            _ => vec![],
        },

        AppIntent::Clicked { world_pos, button } => match mode {
            EditorMode::Idle => match button {
                PointerButton::Primary => vec![AppCommand::ToggleSelectionAt { world_pos }],
                PointerButton::Secondary => vec![AppCommand::AddNodeAtPosition { world_pos }],
            },
            // Klick beendet die Geste, ohne Klick-Semantik
            EditorMode::Grabbing => vec![
                AppCommand::ClearSelection,
                AppCommand::SetEditorMode {
                    mode: EditorMode::Idle,
                },
            ],
            EditorMode::Dragging => vec![
                AppCommand::EndDrag,
                AppCommand::SetEditorMode {
                    mode: EditorMode::Idle,
                },
            ],
        },

        AppIntent::KeyPressed { key } => map_key(state, key),
    }
}

fn map_key(state: &AppState, key: EditorKey) -> Vec<AppCommand> {
    match key {
        EditorKey::Connect | EditorKey::Disconnect => {
            let selected = state.graph.selected_count();
            if selected != 2 {
                log::debug!("{:?} ignoriert: {} statt 2 Knoten selektiert", key, selected);
                return vec![];
            }
            let command = if key == EditorKey::Connect {
                AppCommand::ConnectSelectedNodes
            } else {
                AppCommand::DisconnectSelectedNodes
            };
            vec![command, AppCommand::ClearSelection]
        }
        EditorKey::SelectAllToggle => {
            if state.graph.is_selection_full() {
                vec![AppCommand::ClearSelection]
            } else {
                vec![AppCommand::SelectAllNodes]
            }
        }
        EditorKey::Delete => vec![AppCommand::DeleteSelectedNodes],
        EditorKey::Grab => {
            let mut commands = Vec::with_capacity(2);
            if state.interaction.mode == EditorMode::Dragging {
                commands.push(AppCommand::EndDrag);
            }
            commands.push(AppCommand::SetEditorMode {
                mode: EditorMode::Grabbing,
            });
            commands
        }
    }
}

#[cfg(test)]
mod tests;
