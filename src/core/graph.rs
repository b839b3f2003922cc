//! Das Graph-Dokument: Node-Pool, Nachbarlisten, Selektion und Hit-Test-Index.

use super::{GraphEdge, GraphNode, NodeId, SelectionSet, SpatialIndex};
use glam::Vec2;
use indexmap::IndexMap;
use std::cell::OnceCell;
use std::collections::HashSet;

/// Vollständiges Graph-Dokument einer Editor-Sitzung.
///
/// Einzige Quelle der Wahrheit für die Topologie sind die Nachbarlisten der
/// Knoten. Die Kantenliste wird daraus abgeleitet, gecacht und bei jeder
/// Topologie-Änderung verworfen.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node-Pool in Einfüge-Reihenfolge (bestimmt Hit-Test-Priorität)
    nodes: IndexMap<NodeId, GraphNode>,
    selection: SelectionSet,
    next_id: u64,
    /// Abgeleitete, nach kanonischem Paar sortierte Kanten
    edges: OnceCell<Vec<GraphEdge>>,
    spatial_index: SpatialIndex,
}

impl Graph {
    /// Erstellt ein leeres Dokument.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            selection: SelectionSet::new(),
            next_id: 1,
            edges: OnceCell::new(),
            spatial_index: SpatialIndex::empty(),
        }
    }

    // ── Knoten ──────────────────────────────────────────────────────

    /// Legt einen unselektierten Knoten ohne Nachbarn an.
    pub fn add_node(&mut self, position: Vec2) -> NodeId {
        let id = NodeId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.nodes.insert(id, GraphNode::new(id, position));
        self.rebuild_spatial_index();
        id
    }

    /// Legt mehrere Knoten an und baut den Hit-Test-Index nur einmal auf.
    pub fn add_nodes(&mut self, positions: impl IntoIterator<Item = Vec2>) -> Vec<NodeId> {
        let ids: Vec<NodeId> = positions
            .into_iter()
            .map(|position| {
                let id = NodeId(self.next_id.max(1));
                self.next_id = id.0 + 1;
                self.nodes.insert(id, GraphNode::new(id, position));
                id
            })
            .collect();
        if !ids.is_empty() {
            self.rebuild_spatial_index();
        }
        ids
    }

    /// Entfernt einen Knoten samt Nachbar-Einträgen, Kanten und Selektion.
    pub fn remove_node(&mut self, id: NodeId) -> Option<GraphNode> {
        let removed = self.detach_and_remove(id)?;
        self.invalidate_edges();
        self.rebuild_spatial_index();
        Some(removed)
    }

    /// Entfernt mehrere Knoten in einem Schritt. Gibt die Anzahl entfernter Knoten zurück.
    pub fn remove_nodes(&mut self, ids: &[NodeId]) -> usize {
        let removed = ids
            .iter()
            .filter(|id| self.detach_and_remove(**id).is_some())
            .count();
        if removed > 0 {
            self.invalidate_edges();
            self.rebuild_spatial_index();
        }
        removed
    }

    fn detach_and_remove(&mut self, id: NodeId) -> Option<GraphNode> {
        let removed = self.nodes.shift_remove(&id)?;
        for neighbor in &removed.neighbors {
            if let Some(node) = self.nodes.get_mut(neighbor) {
                node.remove_neighbor(id);
            }
        }
        self.selection.forget(id);
        Some(removed)
    }

    /// Leert das Dokument. Bereits vergebene IDs werden nicht wiederverwendet.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.selection = SelectionSet::new();
        self.invalidate_edges();
        self.rebuild_spatial_index();
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Alle Knoten in Pool-Reihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Setzt den Mittelpunkt eines Knotens. `false`, wenn der Knoten fehlt.
    pub fn set_node_position(&mut self, id: NodeId, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        if node.position != position {
            node.position = position;
            self.rebuild_spatial_index();
        }
        true
    }

    /// Verschiebt die angegebenen Knoten um `delta`. Unbekannte IDs werden übersprungen.
    pub fn translate_nodes(&mut self, ids: &[NodeId], delta: Vec2) -> usize {
        if delta == Vec2::ZERO {
            return 0;
        }
        let mut moved = 0;
        for id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                node.position += delta;
                moved += 1;
            }
        }
        if moved > 0 {
            self.rebuild_spatial_index();
        }
        moved
    }

    // ── Nachbarschaft ───────────────────────────────────────────────

    /// Verbindet zwei Knoten symmetrisch.
    ///
    /// No-op (Rückgabe `false`) bei `a == b`, unbekannten IDs oder bereits
    /// bestehender Verbindung.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || !self.contains(a) || !self.contains(b) || self.are_connected(a, b) {
            return false;
        }
        self.link(a, b);
        true
    }

    /// Trägt beide Richtungen ein, auch wenn eine davon schon existiert.
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId) {
        let mut changed = false;
        if let Some(node) = self.nodes.get_mut(&a) {
            changed |= node.add_neighbor(b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            changed |= node.add_neighbor(a);
        }
        if changed {
            self.invalidate_edges();
        }
    }

    /// Trennt zwei Knoten. Sicher aufrufbar, wenn keine Verbindung besteht.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut changed = false;
        if let Some(node) = self.nodes.get_mut(&a) {
            changed |= node.remove_neighbor(b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            changed |= node.remove_neighbor(a);
        }
        if changed {
            self.invalidate_edges();
        }
        changed
    }

    /// Prüft, ob `a` und `b` benachbart sind.
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes.get(&a).is_some_and(|node| node.has_neighbor(b))
    }

    /// Nachbarn eines Knotens; leer für unbekannte IDs.
    pub fn neighbors_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map_or(&[], |node| node.neighbors())
    }

    // ── Kanten (abgeleitet) ─────────────────────────────────────────

    /// Kantenliste, sortiert nach kanonischem Paar `(min, max)`.
    ///
    /// Aufbau: jede Nachbarliste in Pool-Reihenfolge durchlaufen, jedes
    /// ungeordnete Paar genau einmal aufnehmen. Das Ergebnis ist bis zur
    /// nächsten Topologie-Änderung gecacht.
    pub fn edges(&self) -> &[GraphEdge] {
        self.edges.get_or_init(|| derive_edges(&self.nodes))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    fn invalidate_edges(&mut self) {
        self.edges.take();
    }

    // ── Selektion ───────────────────────────────────────────────────

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Schaltet die Selektion um. `None` für unbekannte IDs.
    pub fn toggle_selection(&mut self, id: NodeId) -> Option<bool> {
        self.selection.toggle(&mut self.nodes, id)
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&mut self.nodes);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all(&mut self.nodes);
    }

    /// `true`, wenn jeder Knoten selektiert ist (auch für ein leeres Dokument).
    pub fn is_selection_full(&self) -> bool {
        self.selection.is_full(self.nodes.len())
    }

    // ── Hit-Test ────────────────────────────────────────────────────

    /// Erster Knoten in Pool-Reihenfolge, dessen Mittelpunkt in beiden Achsen
    /// strikt innerhalb von `pick_radius` um `position` liegt.
    pub fn hit_test(&self, position: Vec2, pick_radius: f32) -> Option<NodeId> {
        self.spatial_index
            .within_square(position, pick_radius)
            .first()
            .map(|m| m.node_id)
    }

    fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_nodes(&self.nodes);
    }
}

fn derive_edges(nodes: &IndexMap<NodeId, GraphNode>) -> Vec<GraphEdge> {
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();

    for node in nodes.values() {
        for neighbor in &node.neighbors {
            if *neighbor == node.id || !nodes.contains_key(neighbor) {
                continue;
            }
            let edge = GraphEdge::canonical(node.id, *neighbor);
            if seen.insert(edge.canonical_key()) {
                edges.push(edge);
            }
        }
    }

    // Stabil: gleiche Paare bleiben in Entdeckungsreihenfolge zusammenhängend
    edges.sort_by_key(|edge| edge.canonical_key());
    edges
}

#[cfg(test)]
mod tests;
