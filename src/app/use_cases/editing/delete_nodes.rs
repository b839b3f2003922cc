//! Use-Case: Selektierte Knoten löschen.

use crate::app::AppState;

/// Löscht alle selektierten Knoten samt Nachbar-Einträgen und Kanten.
///
/// War das Drag-Ziel betroffen, wird es vergessen.
pub fn delete_selected_nodes(state: &mut AppState) {
    let ids = state.graph.selection().to_vec();
    if ids.is_empty() {
        return;
    }

    let removed = state.graph.remove_nodes(&ids);

    if let Some(target) = state.interaction.drag_target {
        if !state.graph.contains(target) {
            state.interaction.drag_target = None;
        }
    }

    log::info!(
        "{} Knoten gelöscht, verbleibend: {} Knoten, {} Kanten",
        removed,
        state.graph.node_count(),
        state.graph.edge_count()
    );
}
