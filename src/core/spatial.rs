//! Spatial-Index (KD-Tree) für Hit-Tests auf dem Canvas.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashMap;

use super::{GraphNode, NodeId};

const QUERY_PADDING: f64 = 1e-3;

/// Treffer einer Bereichsabfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialMatch {
    /// ID des gefundenen Knotens
    pub node_id: NodeId,
    /// Position des Knotens im Node-Pool zum Zeitpunkt des Index-Aufbaus
    pub pool_index: usize,
}

/// Read-only Spatial-Index über alle Knoten eines Graphen.
///
/// Der KD-Tree enthält jede Position nur einmal (KD-Item = Slot). Knoten
/// auf derselben Position teilen sich einen Slot. Wird nach jeder
/// Positions- oder Pool-Änderung komplett neu aufgebaut.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    node_ids: Vec<NodeId>,
    /// Position je Slot
    slot_positions: Vec<Vec2>,
    /// Pool-Indizes je Slot, aufsteigend
    slot_members: Vec<Vec<usize>>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            node_ids: Vec::new(),
            slot_positions: Vec::new(),
            slot_members: Vec::new(),
        }
    }

    /// Baut den Index in Pool-Reihenfolge auf.
    ///
    /// Der KD-Tree kann nur begrenzt viele Einträge mit exakt gleichen
    /// Koordinaten aufnehmen, daher wird vorher nach Position gruppiert.
    pub fn from_nodes(nodes: &IndexMap<NodeId, GraphNode>) -> Self {
        let node_ids: Vec<NodeId> = nodes.keys().copied().collect();

        let mut slot_of: HashMap<(u32, u32), usize> = HashMap::new();
        let mut slot_positions: Vec<Vec2> = Vec::new();
        let mut slot_members: Vec<Vec<usize>> = Vec::new();

        for (pool_index, node) in nodes.values().enumerate() {
            // -0.0 und 0.0 sind für den Baum dieselbe Koordinate
            let position = node.position + Vec2::ZERO;
            let key = (position.x.to_bits(), position.y.to_bits());
            let slot = *slot_of.entry(key).or_insert_with(|| {
                slot_positions.push(position);
                slot_members.push(Vec::new());
                slot_positions.len() - 1
            });
            slot_members[slot].push(pool_index);
        }

        let entries: Vec<[f64; 2]> = slot_positions
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            node_ids,
            slot_positions,
            slot_members,
        }
    }

    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Findet alle Knoten, deren Mittelpunkt in beiden Achsen strikt weniger
    /// als `half_extent` von `center` entfernt ist (achsparalleles Quadrat).
    ///
    /// KD-Tree-Vorfilter über den Umkreis des Quadrats, danach exakte Prüfung.
    /// Ergebnis ist nach Pool-Index sortiert.
    pub fn within_square(&self, center: Vec2, half_extent: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || half_extent <= 0.0 {
            return Vec::new();
        }

        let radius = std::f64::consts::SQRT_2 * half_extent as f64 + QUERY_PADDING;
        let radius_sq = radius * radius;

        let mut matches: Vec<SpatialMatch> = self
            .tree
            .within::<SquaredEuclidean>(&[center.x as f64, center.y as f64], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let slot = entry.item as usize;
                let d = (*self.slot_positions.get(slot)? - center).abs();
                (d.x < half_extent && d.y < half_extent).then_some(slot)
            })
            .flat_map(|slot| self.slot_members[slot].iter().copied())
            .filter_map(|pool_index| {
                Some(SpatialMatch {
                    node_id: *self.node_ids.get(pool_index)?,
                    pool_index,
                })
            })
            .collect();

        matches.sort_unstable_by_key(|m| m.pool_index);
        matches
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
