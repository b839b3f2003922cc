//! Use-Case: Graph-Vorlage an das Dokument anhängen.

use crate::app::AppState;
use crate::core::{templates, GraphTemplate};

/// Erzeugt die Vorlage an der konfigurierten Position.
///
/// Ungültige Größen werden geloggt und als Statusmeldung angezeigt, das
/// Dokument bleibt unverändert.
pub fn generate_template(state: &mut AppState, template: GraphTemplate) {
    let layout = state.options.template_layout();
    match templates::generate(&mut state.graph, template, layout) {
        Ok(ids) => {
            state.ui.status_message = Some(format!("{}: {} Knoten erzeugt", template.label(), ids.len()));
        }
        Err(e) => {
            log::warn!("Vorlage nicht erzeugt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}
