//! Statusleiste am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Statusleiste
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Knoten: {}", state.node_count()));
            ui.separator();
            ui.label(format!("Kanten: {}", state.edge_count()));
            ui.separator();
            ui.label(format!("Selektiert: {}", state.selected_count()));
            ui.separator();
            ui.label(format!("Modus: {}", state.interaction.mode.label()));

            if let Some(path) = &state.ui.current_file_path {
                ui.separator();
                ui.label(format!("Datei: {}", path));
            }

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
