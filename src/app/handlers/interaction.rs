//! Handler für die Zeiger-Gesten der Zustandsmaschine.

use crate::app::state::EditorMode;
use crate::app::use_cases;
use crate::app::AppState;

pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::interaction::set_editor_mode(state, mode);
}

/// Beginnt eine Drag-Geste am Knoten unter dem Zeiger.
pub fn begin_drag(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::interaction::begin_drag(state, world_pos);
}

/// Zieht das Drag-Ziel auf die Zeigerposition.
pub fn drag_to(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::interaction::drag_target_to(state, world_pos);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::interaction::end_drag(state);
}

/// Merkt die Zeigerposition als Grab-Basis.
pub fn record_pointer(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::interaction::record_pointer(state, world_pos);
}
