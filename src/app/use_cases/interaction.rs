//! Use-Case-Funktionen der Zeiger-Gesten (Drag und Grab).

use crate::app::state::EditorMode;
use crate::app::AppState;

/// Wechselt den Modus der Zustandsmaschine.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    if state.interaction.mode != mode {
        log::debug!("Modus: {:?} → {:?}", state.interaction.mode, mode);
        state.interaction.mode = mode;
    }
}

/// Merkt den Knoten unter dem Zeiger als Drag-Ziel. Ohne Treffer bleibt das
/// Ziel leer und die Geste verschiebt nichts.
pub fn begin_drag(state: &mut AppState, world_pos: glam::Vec2) {
    state.interaction.drag_target = state.graph.hit_test(world_pos, state.options.pick_radius);
    state.interaction.last_pointer = Some(world_pos);
}

/// Setzt den Mittelpunkt des Drag-Ziels auf die Zeigerposition.
pub fn drag_target_to(state: &mut AppState, world_pos: glam::Vec2) {
    state.interaction.last_pointer = Some(world_pos);
    let Some(target) = state.interaction.drag_target else {
        return;
    };
    if !state.graph.set_node_position(target, world_pos) {
        // Ziel wurde während der Geste gelöscht
        state.interaction.drag_target = None;
    }
}

pub fn end_drag(state: &mut AppState) {
    state.interaction.drag_target = None;
}

pub fn record_pointer(state: &mut AppState, world_pos: glam::Vec2) {
    state.interaction.last_pointer = Some(world_pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn drag_moves_node_center_to_pointer() {
        let mut state = AppState::new();
        let id = state.graph.add_node(Vec2::new(100.0, 100.0));

        begin_drag(&mut state, Vec2::new(110.0, 95.0));
        drag_target_to(&mut state, Vec2::new(200.0, 50.0));

        assert_eq!(state.interaction.drag_target, Some(id));
        assert_eq!(
            state.graph.node(id).map(|n| n.position()),
            Some(Vec2::new(200.0, 50.0))
        );
    }

    #[test]
    fn drag_without_target_changes_nothing() {
        let mut state = AppState::new();
        let id = state.graph.add_node(Vec2::new(100.0, 100.0));

        begin_drag(&mut state, Vec2::new(300.0, 300.0));
        drag_target_to(&mut state, Vec2::new(0.0, 0.0));

        assert_eq!(state.interaction.drag_target, None);
        assert_eq!(
            state.graph.node(id).map(|n| n.position()),
            Some(Vec2::new(100.0, 100.0))
        );
    }

    #[test]
    fn deleted_drag_target_is_forgotten() {
        let mut state = AppState::new();
        let id = state.graph.add_node(Vec2::ZERO);
        begin_drag(&mut state, Vec2::ZERO);
        state.graph.remove_node(id);

        drag_target_to(&mut state, Vec2::new(5.0, 5.0));

        assert_eq!(state.interaction.drag_target, None);
    }
}
