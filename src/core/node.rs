//! Graph-Knoten und ihre Identität.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabile Knoten-ID, gültig für die gesamte Lebensdauer des Knotens.
///
/// IDs werden vom [`Graph`](super::Graph) vergeben und nach dem Löschen
/// eines Knotens nicht wiederverwendet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Knoten im Node-Pool.
///
/// Die Nachbarliste enthält nur IDs; aufgelöst wird immer über den Pool.
/// Mutationen laufen ausschließlich über den `Graph`, damit Symmetrie der
/// Nachbarlisten und Selektions-Flag konsistent bleiben.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub(crate) id: NodeId,
    pub(crate) position: Vec2,
    pub(crate) selected: bool,
    pub(crate) neighbors: Vec<NodeId>,
}

impl GraphNode {
    pub(crate) fn new(id: NodeId, position: Vec2) -> Self {
        Self {
            id,
            position,
            selected: false,
            neighbors: Vec::new(),
        }
    }

    /// ID des Knotens
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Mittelpunkt in Canvas-Koordinaten
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Ob der Knoten aktuell selektiert ist
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Nachbarn in Einfüge-Reihenfolge
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Prüft, ob `other` in der Nachbarliste steht.
    pub fn has_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Hängt `other` an, falls noch nicht vorhanden. Gibt `true` bei Änderung zurück.
    pub(crate) fn add_neighbor(&mut self, other: NodeId) -> bool {
        if self.has_neighbor(other) {
            return false;
        }
        self.neighbors.push(other);
        true
    }

    /// Entfernt `other` aus der Nachbarliste. Gibt `true` bei Änderung zurück.
    pub(crate) fn remove_neighbor(&mut self, other: NodeId) -> bool {
        let before = self.neighbors.len();
        self.neighbors.retain(|n| *n != other);
        self.neighbors.len() != before
    }
}
