//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Verwaltet das Dokument, die Interaktions-Zustandsmaschine und den UI-Zustand.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditorKey, PointerButton};
pub use intent_mapping::map_intent_to_commands;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorMode, InteractionState, TemplateDraft, UiState};
