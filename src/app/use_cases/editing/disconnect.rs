//! Use-Case: Kante zwischen zwei selektierten Knoten entfernen.

use super::selected_pair;
use crate::app::AppState;

/// Trennt die beiden selektierten Knoten. Sicher, wenn keine Kante besteht.
pub fn disconnect_selected_nodes(state: &mut AppState) {
    let Some((a, b)) = selected_pair(state) else {
        log::debug!(
            "Trennen ignoriert: {} Knoten selektiert",
            state.graph.selected_count()
        );
        return;
    };

    if state.graph.disconnect(a, b) {
        log::info!("Kante {}–{} entfernt", a, b);
    } else {
        log::debug!("Keine Kante zwischen {} und {} gefunden", a, b);
    }
}
