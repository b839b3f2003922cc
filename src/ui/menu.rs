//! Top-Menü (Datei, Erzeugen, Bearbeiten).

use crate::app::{AppIntent, AppState, EditorKey, TemplateDraft};
use crate::core::GraphTemplate;

/// Rendert die Menü-Leiste.
///
/// Die Größenparameter der Vorlagen werden direkt im `TemplateDraft`
/// editiert, alles andere läuft über Intents.
pub fn render_menu(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Neu").clicked() {
                    events.push(AppIntent::NewDocumentRequested);
                    ui.close();
                }

                if ui.button("Öffnen...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Speichern unter...").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Szene als JSON exportieren...").clicked() {
                    events.push(AppIntent::ExportSceneRequested);
                    ui.close();
                }

                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                let has_pair = state.selected_count() == 2;
                let editor_buttons = [
                    ("Verbinden (C)", EditorKey::Connect, has_pair),
                    ("Trennen (X)", EditorKey::Disconnect, has_pair),
                    ("Alle / keine auswählen (A)", EditorKey::SelectAllToggle, true),
                    ("Greifen (G)", EditorKey::Grab, true),
                    ("Löschen (Entf)", EditorKey::Delete, state.selected_count() > 0),
                ];
                for (label, key, enabled) in editor_buttons {
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        events.push(AppIntent::KeyPressed { key });
                        ui.close();
                    }
                }
            });

            ui.menu_button("Erzeugen", |ui| {
                render_template_rows(ui, &mut state.ui.template_draft, &mut events);
            });
        });
    });

    events
}

fn render_template_rows(ui: &mut egui::Ui, draft: &mut TemplateDraft, events: &mut Vec<AppIntent>) {
    let mut generated: Option<GraphTemplate> = None;

    egui::Grid::new("template_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.add(egui::DragValue::new(&mut draft.complete_n).range(1..=64).prefix("n = "));
            if ui.button("Vollständiger Graph").clicked() {
                generated = Some(draft.complete());
            }
            ui.end_row();

            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut draft.bipartite_left).range(1..=32));
                ui.label("×");
                ui.add(egui::DragValue::new(&mut draft.bipartite_right).range(1..=32));
            });
            if ui.button("Vollständig bipartit").clicked() {
                generated = Some(draft.bipartite());
            }
            ui.end_row();

            ui.add(egui::DragValue::new(&mut draft.cycle_n).range(3..=128).prefix("n = "));
            if ui.button("Kreis").clicked() {
                generated = Some(draft.cycle());
            }
            ui.end_row();

            ui.add(egui::DragValue::new(&mut draft.star_n).range(4..=128).prefix("n = "));
            if ui.button("Stern").clicked() {
                generated = Some(draft.star());
            }
            ui.end_row();

            ui.add(egui::DragValue::new(&mut draft.wheel_n).range(4..=128).prefix("n = "));
            if ui.button("Rad").clicked() {
                generated = Some(draft.wheel());
            }
            ui.end_row();

            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut draft.grid_columns).range(1..=32));
                ui.label("×");
                ui.add(egui::DragValue::new(&mut draft.grid_rows).range(1..=32));
            });
            if ui.button("Gitter").clicked() {
                generated = Some(draft.grid());
            }
            ui.end_row();
        });

    if let Some(template) = generated {
        events.push(AppIntent::GenerateTemplateRequested { template });
        ui.close();
    }
}
