//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::render_scene;
use crate::app::AppState;
use crate::core::Graph;
use crate::shared::EditorOptions;
use anyhow::Context;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Öffnet den Export-Dialog über UI-State.
pub fn request_export_file(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Das Dokument wird nur bei Erfolg ersetzt; bei Fehlern bleibt der
/// vorherige Graph unverändert.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let graph = crate::xml::load_graph_file(&path)
        .with_context(|| format!("Datei konnte nicht geladen werden: {}", path))?;

    replace_document(state, graph);
    state.ui.status_message = Some(format!("Geladen: {}", path));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Ersetzt das Dokument durch ein leeres.
pub fn new_document(state: &mut AppState) {
    replace_document(state, Graph::new());
    state.ui.current_file_path = None;
    state.ui.status_message = Some("Neues Dokument".to_string());
    log::info!("Neues Dokument begonnen");
}

fn replace_document(state: &mut AppState, graph: Graph) {
    state.graph = graph;
    state.interaction.reset();
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_graph_to_file(state, &path)?;
        Ok(())
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
        Ok(())
    }
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_graph_to_file(state, &path)?;
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => save_file_as(state, path),
        None => save_current_file(state),
    }
}

fn write_graph_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    crate::xml::save_graph_file(path, &state.graph)
        .with_context(|| format!("Datei konnte nicht gespeichert werden: {}", path))?;
    state.ui.status_message = Some(format!("Gespeichert: {}", path));
    Ok(())
}

/// Schreibt die aktuelle Render-Szene als JSON.
pub fn export_scene(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let scene = render_scene::build(state);
    let json = scene.to_json().context("Render-Szene nicht serialisierbar")?;
    crate::xml::write_atomically(std::path::Path::new(&path), json.as_bytes())
        .with_context(|| format!("Export fehlgeschlagen: {}", path))?;

    log::info!(
        "Render-Szene exportiert: {} ({} Knoten, {} Kanten)",
        path,
        scene.node_count,
        scene.edge_count
    );
    state.ui.status_message = Some(format!("Exportiert: {}", path));
    Ok(())
}

/// Persistiert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
