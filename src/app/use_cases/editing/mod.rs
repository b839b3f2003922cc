//! Use-Case-Funktionen für Knoten- und Kanten-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Neuen Knoten anlegen
//! - `connect` / `disconnect`: Kante zwischen zwei selektierten Knoten
//! - `delete_nodes`: Selektierte Knoten löschen
//! - `templates`: Graph-Vorlagen anhängen

mod add_node;
mod connect;
mod delete_nodes;
mod disconnect;
mod templates;

pub use add_node::add_node_at_position;
pub use connect::connect_selected_nodes;
pub use delete_nodes::delete_selected_nodes;
pub use disconnect::disconnect_selected_nodes;
pub use templates::generate_template;

use crate::app::AppState;
use crate::core::NodeId;

/// Liefert das selektierte Paar, wenn genau zwei Knoten selektiert sind.
fn selected_pair(state: &AppState) -> Option<(NodeId, NodeId)> {
    let selection = state.graph.selection();
    if selection.len() != 2 {
        return None;
    }
    let mut ids = selection.iter();
    Some((ids.next()?, ids.next()?))
}
