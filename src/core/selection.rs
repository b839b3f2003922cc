//! Selektionsmenge, synchron gehalten mit den `selected`-Flags der Knoten.

use super::{GraphNode, NodeId};
use indexmap::{IndexMap, IndexSet};

/// Geordnete Menge selektierter Knoten (Reihenfolge = Selektionsreihenfolge).
///
/// Jeder Mutator bekommt den Node-Pool mit und setzt das Flag des
/// betroffenen Knotens im selben Schritt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: IndexSet<NodeId>,
}

impl SelectionSet {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Selektierte IDs in Selektionsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    /// Kopie der IDs als Vec (für Mutationen am Pool während der Iteration).
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.ids.iter().copied().collect()
    }

    /// `true`, wenn jeder Knoten des Pools selektiert ist.
    pub fn is_full(&self, node_count: usize) -> bool {
        self.ids.len() == node_count
    }

    /// Schaltet die Selektion eines Knotens um.
    ///
    /// Gibt den neuen Zustand zurück, `None` wenn der Knoten nicht existiert.
    pub(crate) fn toggle(
        &mut self,
        nodes: &mut IndexMap<NodeId, GraphNode>,
        id: NodeId,
    ) -> Option<bool> {
        let node = nodes.get_mut(&id)?;
        if node.selected {
            node.selected = false;
            self.ids.shift_remove(&id);
        } else {
            node.selected = true;
            self.ids.insert(id);
        }
        Some(node.selected)
    }

    /// Selektiert alle Knoten in Pool-Reihenfolge.
    pub(crate) fn select_all(&mut self, nodes: &mut IndexMap<NodeId, GraphNode>) {
        self.ids.clear();
        for (id, node) in nodes.iter_mut() {
            node.selected = true;
            self.ids.insert(*id);
        }
    }

    /// Hebt jede Selektion auf.
    pub(crate) fn deselect_all(&mut self, nodes: &mut IndexMap<NodeId, GraphNode>) {
        for node in nodes.values_mut() {
            node.selected = false;
        }
        self.ids.clear();
    }

    /// Entfernt einen (bereits aus dem Pool gelöschten) Knoten aus der Menge.
    pub(crate) fn forget(&mut self, id: NodeId) {
        self.ids.shift_remove(&id);
    }
}
