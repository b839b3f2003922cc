//! Handler für Datei-Operationen (Öffnen, Speichern, Export).

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt ein Graph-Dokument aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}

/// Speichert das Dokument.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save(state, path)
}

/// Exportiert die Render-Szene als JSON.
pub fn export_scene(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::export_scene(state, path)
}

pub fn new_document(state: &mut AppState) {
    use_cases::file_io::new_document(state);
}

/// Schreibt die Optionen in die Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_options(state)
}
