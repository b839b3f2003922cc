//! Use-Case-Funktionen für Knoten-Selektion.
//!
//! - `toggle`: Einzelklick-Selektion und Alles/Nichts
//! - `move_nodes`: Verschieben selektierter Knoten (Grab)

mod move_nodes;
mod toggle;

pub use move_nodes::move_selected_nodes;
pub use toggle::{clear_selection, select_all, toggle_selection_at};
