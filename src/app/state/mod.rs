//! Application State: zentrale Datenhaltung einer Editor-Sitzung.

mod app_state;
mod interaction;
mod ui;

pub use app_state::AppState;
pub use interaction::{EditorMode, InteractionState};
pub use ui::{TemplateDraft, UiState};
