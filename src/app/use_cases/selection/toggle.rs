//! Use-Case: Selektion per Klick umschalten.

use crate::app::AppState;

/// Schaltet die Selektion des ersten Knotens unter dem Zeiger um.
/// Ohne Treffer passiert nichts.
pub fn toggle_selection_at(state: &mut AppState, world_pos: glam::Vec2) {
    let Some(id) = state.graph.hit_test(world_pos, state.options.pick_radius) else {
        log::debug!("Kein Knoten unter {:?}", world_pos);
        return;
    };
    if let Some(selected) = state.graph.toggle_selection(id) {
        log::debug!("Knoten {} selektiert: {}", id, selected);
    }
}

pub fn select_all(state: &mut AppState) {
    state.graph.select_all();
}

pub fn clear_selection(state: &mut AppState) {
    state.graph.deselect_all();
}
