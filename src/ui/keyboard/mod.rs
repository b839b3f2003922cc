//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Ob ein Editor-Befehl greift (z.B. genau zwei selektierte Knoten),
//! entscheidet die Zustandsmaschine, nicht die UI.

use crate::app::{AppIntent, EditorKey};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Fokussierte Eingabefelder (z.B. DragValue im Menü) behalten ihre Tasten
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Shift+Ctrl+S (Speichern unter), Ctrl+N (Neu)
    let (modifiers, key_o_pressed, key_s_pressed, key_n_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::N),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewDocumentRequested);
    }

    // Editor-Befehle: C, X, A, G, Entf/Backspace
    let (key_c_pressed, key_x_pressed, key_a_pressed, key_g_pressed, key_del_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::X),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            )
        });

    if modifiers.command {
        return events;
    }

    let editor_keys = [
        (key_c_pressed, EditorKey::Connect),
        (key_x_pressed, EditorKey::Disconnect),
        (key_a_pressed, EditorKey::SelectAllToggle),
        (key_g_pressed, EditorKey::Grab),
        (key_del_pressed, EditorKey::Delete),
    ];
    events.extend(
        editor_keys
            .into_iter()
            .filter(|(pressed, _)| *pressed)
            .map(|(_, key)| AppIntent::KeyPressed { key }),
    );

    events
}
