//! Drag-Lebenszyklus der primären Maustaste.

use super::screen_pos_to_world;
use crate::app::AppIntent;

pub(super) fn collect_drag_lifecycle(
    ui: &egui::Ui,
    response: &egui::Response,
    events: &mut Vec<AppIntent>,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        // Startpunkt ist die Press-Position, nicht die Position nach Überschreiten der Drag-Schwelle
        let start = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(start) = start {
            events.push(AppIntent::DragStarted {
                world_pos: screen_pos_to_world(start, response),
            });
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::DragMoved {
                world_pos: screen_pos_to_world(pointer_pos, response),
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        events.push(AppIntent::DragEnded);
    }
}
