//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die Selektion des Knotens unter dem Zeiger um.
pub fn toggle_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::toggle_selection_at(state, world_pos);
}

/// Verschiebt alle selektierten Knoten.
pub fn move_selected(state: &mut AppState, delta: glam::Vec2) {
    use_cases::selection::move_selected_nodes(state, delta);
}

pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
