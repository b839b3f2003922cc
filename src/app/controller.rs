//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Interaktion ===
            AppCommand::SetEditorMode { mode } => handlers::interaction::set_mode(state, mode),
            AppCommand::BeginDrag { world_pos } => handlers::interaction::begin_drag(state, world_pos),
            AppCommand::DragTargetTo { world_pos } => {
                handlers::interaction::drag_to(state, world_pos)
            }
            AppCommand::EndDrag => handlers::interaction::end_drag(state),
            AppCommand::RecordPointer { world_pos } => {
                handlers::interaction::record_pointer(state, world_pos)
            }

            // === Selektion ===
            AppCommand::ToggleSelectionAt { world_pos } => {
                handlers::selection::toggle_at(state, world_pos)
            }
            AppCommand::MoveSelectedNodes { delta } => {
                handlers::selection::move_selected(state, delta)
            }
            AppCommand::SelectAllNodes => handlers::selection::select_all(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::AddNodeAtPosition { world_pos } => {
                handlers::editing::add_node(state, world_pos)
            }
            AppCommand::ConnectSelectedNodes => handlers::editing::connect_selected(state),
            AppCommand::DisconnectSelectedNodes => handlers::editing::disconnect_selected(state),
            AppCommand::DeleteSelectedNodes => handlers::editing::delete_selected(state),
            AppCommand::GenerateTemplate { template } => {
                handlers::editing::generate_template(state, template)
            }

            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::dialog::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::dialog::request_save(state),
            AppCommand::RequestExportDialog => handlers::dialog::request_export(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::ExportScene { path } => handlers::file_io::export_scene(state, path)?,
            AppCommand::NewDocument => handlers::file_io::new_document(state),
            AppCommand::SaveOptions => handlers::file_io::save_options(state)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
