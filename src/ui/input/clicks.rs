use super::screen_pos_to_world;
use crate::app::{AppIntent, PointerButton};

/// Klicks ohne Drag: links Selektion, rechts neuer Knoten.
pub(super) fn collect_clicks(response: &egui::Response, events: &mut Vec<AppIntent>) {
    let Some(pointer_pos) = response.interact_pointer_pos() else {
        return;
    };
    let world_pos = screen_pos_to_world(pointer_pos, response);

    if response.clicked_by(egui::PointerButton::Primary) {
        events.push(AppIntent::Clicked {
            world_pos,
            button: PointerButton::Primary,
        });
    }
    if response.clicked_by(egui::PointerButton::Secondary) {
        events.push(AppIntent::Clicked {
            world_pos,
            button: PointerButton::Secondary,
        });
    }
}
