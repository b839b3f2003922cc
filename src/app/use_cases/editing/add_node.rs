//! Use-Case: Neuen Knoten an einer Canvas-Position anlegen.

use crate::app::AppState;

/// Legt einen unselektierten Knoten ohne Nachbarn an `world_pos` an.
pub fn add_node_at_position(state: &mut AppState, world_pos: glam::Vec2) {
    let id = state.graph.add_node(world_pos);
    log::info!("Knoten {} angelegt bei ({:.1}, {:.1})", id, world_pos.x, world_pos.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn new_node_is_unselected_and_isolated() {
        let mut state = AppState::new();

        add_node_at_position(&mut state, Vec2::new(12.0, 34.0));

        let node = state.graph.nodes().next().expect("Knoten erwartet");
        assert_eq!(node.position(), Vec2::new(12.0, 34.0));
        assert!(!node.is_selected());
        assert!(node.neighbors().is_empty());
        assert_eq!(state.selected_count(), 0);
    }
}
