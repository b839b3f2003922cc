//! Handler für Editing-Operationen (Knoten, Kanten, Vorlagen).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GraphTemplate;

/// Fügt einen neuen Knoten an der Canvas-Position hinzu.
pub fn add_node(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::add_node_at_position(state, world_pos);
}

/// Verbindet die zwei selektierten Knoten.
pub fn connect_selected(state: &mut AppState) {
    use_cases::editing::connect_selected_nodes(state);
}

/// Trennt die zwei selektierten Knoten.
pub fn disconnect_selected(state: &mut AppState) {
    use_cases::editing::disconnect_selected_nodes(state);
}

/// Löscht alle selektierten Knoten.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_nodes(state);
}

pub fn generate_template(state: &mut AppState, template: GraphTemplate) {
    use_cases::editing::generate_template(state, template);
}
