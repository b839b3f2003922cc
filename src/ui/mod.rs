//! UI-Layer mit egui: Canvas, Menü, Statusleiste, Input-Handling, Dialoge.
//!
//! Die UI mutiert den AppState nicht direkt, sondern liefert `AppIntent`s.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;

pub use canvas::paint_scene;
pub use dialogs::handle_file_dialogs;
pub use input::collect_canvas_intents;
pub use menu::render_menu;
pub use status::render_status_bar;
