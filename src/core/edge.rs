//! Ungerichtete Kanten, abgeleitet aus den Nachbarlisten.

use super::NodeId;
use std::hash::{Hash, Hasher};

/// Ungeordnetes Knotenpaar.
///
/// Zwei Kanten sind gleich, wenn ihre Paare unabhängig von der Reihenfolge
/// übereinstimmen. Abgeleitete Kanten liegen immer in kanonischer
/// Orientierung vor (`node1 < node2`).
#[derive(Debug, Clone, Copy, Eq)]
pub struct GraphEdge {
    pub node1: NodeId,
    pub node2: NodeId,
}

impl GraphEdge {
    /// Erstellt eine Kante in der übergebenen Orientierung.
    pub fn new(node1: NodeId, node2: NodeId) -> Self {
        Self { node1, node2 }
    }

    /// Erstellt eine Kante in kanonischer Orientierung.
    pub fn canonical(a: NodeId, b: NodeId) -> Self {
        let (node1, node2) = if a <= b { (a, b) } else { (b, a) };
        Self { node1, node2 }
    }

    /// Sortier- und Gleichheitsschlüssel `(min, max)`.
    pub fn canonical_key(&self) -> (NodeId, NodeId) {
        if self.node1 <= self.node2 {
            (self.node1, self.node2)
        } else {
            (self.node2, self.node1)
        }
    }

    /// Prüft, ob die Kante den Knoten berührt.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node1 == id || self.node2 == id
    }
}

impl PartialEq for GraphEdge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Hash for GraphEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

/// Vergibt Kurvenindizes `0, 1, 2, …` innerhalb jeder zusammenhängenden
/// Folge gleicher Knotenpaare.
///
/// Erwartet eine nach [`GraphEdge::canonical_key`] sortierte Liste, wie sie
/// `Graph::edges()` liefert.
pub fn curve_indices(edges: &[GraphEdge]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(edges.len());
    let mut counter = 0usize;
    for (i, edge) in edges.iter().enumerate() {
        if i > 0 && edges[i - 1] == *edge {
            counter += 1;
        } else {
            counter = 0;
        }
        indices.push(counter);
    }
    indices
}
