//! Rohe Zeigerereignisse: Drücken, Bewegen, Loslassen.

use super::screen_pos_to_world;
use crate::app::{AppIntent, PointerButton};

pub(super) fn collect_pointer_down(
    ui: &egui::Ui,
    response: &egui::Response,
    events: &mut Vec<AppIntent>,
) {
    if !response.hovered() {
        return;
    }

    let (primary, secondary, pointer_pos) = ui.input(|i| {
        (
            i.pointer.button_pressed(egui::PointerButton::Primary),
            i.pointer.button_pressed(egui::PointerButton::Secondary),
            i.pointer.interact_pos(),
        )
    });
    let Some(pointer_pos) = pointer_pos else {
        return;
    };

    let world_pos = screen_pos_to_world(pointer_pos, response);
    if primary {
        events.push(AppIntent::PointerDown {
            world_pos,
            button: PointerButton::Primary,
        });
    }
    if secondary {
        events.push(AppIntent::PointerDown {
            world_pos,
            button: PointerButton::Secondary,
        });
    }
}

/// Meldet jede Zeigerbewegung über dem Canvas (nötig für den Greifen-Modus).
pub(super) fn collect_pointer_moved(
    ui: &egui::Ui,
    response: &egui::Response,
    events: &mut Vec<AppIntent>,
) {
    let (delta, hover_pos) = ui.input(|i| (i.pointer.delta(), i.pointer.hover_pos()));
    if delta == egui::Vec2::ZERO {
        return;
    }
    let Some(hover_pos) = hover_pos else {
        return;
    };
    if !response.rect.contains(hover_pos) {
        return;
    }

    events.push(AppIntent::PointerMoved {
        world_pos: screen_pos_to_world(hover_pos, response),
    });
}

pub(super) fn collect_pointer_up(
    ui: &egui::Ui,
    response: &egui::Response,
    events: &mut Vec<AppIntent>,
) {
    let (released, pointer_pos) =
        ui.input(|i| (i.pointer.any_released(), i.pointer.interact_pos()));
    if !released {
        return;
    }
    if let Some(pointer_pos) = pointer_pos {
        events.push(AppIntent::PointerUp {
            world_pos: screen_pos_to_world(pointer_pos, response),
        });
    }
}
