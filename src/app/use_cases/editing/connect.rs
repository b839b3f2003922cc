//! Use-Case: Zwei selektierte Knoten verbinden.

use super::selected_pair;
use crate::app::AppState;

/// Verbindet die beiden selektierten Knoten.
///
/// Andere Selektionsgrößen und bereits bestehende Kanten sind ein No-op.
pub fn connect_selected_nodes(state: &mut AppState) {
    let Some((a, b)) = selected_pair(state) else {
        log::debug!(
            "Verbinden ignoriert: {} Knoten selektiert",
            state.graph.selected_count()
        );
        return;
    };

    if state.graph.connect(a, b) {
        log::info!("Kante {}–{} erstellt", a, b);
    } else {
        log::debug!("Kante {}–{} existiert bereits", a, b);
    }
}
