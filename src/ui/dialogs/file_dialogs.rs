use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Graph XML", &["xml"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path.to_string_lossy().to_string(),
            });
        }
    }

    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let mut dialog = rfd::FileDialog::new().add_filter("Graph XML", &["xml"]);
        if let Some(current) = &ui_state.current_file_path {
            if let Some(name) = std::path::Path::new(current).file_name() {
                dialog = dialog.set_file_name(name.to_string_lossy());
            }
        } else {
            dialog = dialog.set_file_name("graph.xml");
        }

        if let Some(path) = dialog.save_file() {
            events.push(AppIntent::SaveFilePathSelected {
                path: path.to_string_lossy().to_string(),
            });
        }
    }

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("scene.json")
            .save_file()
        {
            events.push(AppIntent::ExportScenePathSelected {
                path: path.to_string_lossy().to_string(),
            });
        }
    }

    events
}
