//! Canvas-Input: übersetzt egui-Zeigerereignisse und Tastatur in `AppIntent`s.
//!
//! Reihenfolge pro Frame: Tastatur, Zeiger (Down/Move), Drag-Lebenszyklus,
//! Klicks, Loslassen. Koordinaten werden relativ zur Canvas-Ecke geliefert.

mod clicks;
mod drag_primary;
mod pointer;

use crate::app::AppIntent;

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub fn screen_pos_to_world(pointer_pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}

/// Sammelt alle Intents des Canvas für den aktuellen Frame.
pub fn collect_canvas_intents(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut events = super::keyboard::collect_keyboard_intents(ui);

    pointer::collect_pointer_down(ui, response, &mut events);
    pointer::collect_pointer_moved(ui, response, &mut events);
    drag_primary::collect_drag_lifecycle(ui, response, &mut events);
    clicks::collect_clicks(response, &mut events);
    pointer::collect_pointer_up(ui, response, &mut events);

    events
}
