//! Use-Case: Verschieben selektierter Knoten.

use crate::app::AppState;

/// Verschiebt alle selektierten Knoten um den gegebenen Offset.
pub fn move_selected_nodes(state: &mut AppState, delta: glam::Vec2) {
    if delta == glam::Vec2::ZERO || state.graph.selection().is_empty() {
        return;
    }

    let ids = state.graph.selection().to_vec();
    state.graph.translate_nodes(&ids, delta);
}
