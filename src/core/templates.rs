//! Graph-Vorlagen: vollständige, bipartite, Kreis-, Stern-, Rad- und Gittergraphen.
//!
//! Jede Vorlage hängt einen neuen Teilgraphen an das bestehende Dokument an.
//! Ungültige Größen werden vor jeder Mutation abgelehnt.

use super::{Graph, NodeId};
use glam::Vec2;
use std::f32::consts::TAU;

/// Auswählbare Vorlage inklusive Größenparameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphTemplate {
    /// Vollständiger Graph K_n auf einem Kreis
    Complete { n: usize },
    /// Vollständig bipartiter Graph K_{a,b} in zwei Reihen
    BipartiteComplete { left: usize, right: usize },
    /// Kreisgraph C_n
    Cycle { n: usize },
    /// Sterngraph mit n Knoten (n−1 Blätter + Zentrum)
    Star { n: usize },
    /// Radgraph mit n Knoten (Kreis aus n−1 + Zentrum)
    Wheel { n: usize },
    /// Gitter mit `columns × rows` Knoten
    Grid { columns: usize, rows: usize },
}

impl GraphTemplate {
    /// Anzeigename für Menüs und Logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete { .. } => "Vollständiger Graph",
            Self::BipartiteComplete { .. } => "Vollständig bipartit",
            Self::Cycle { .. } => "Kreis",
            Self::Star { .. } => "Stern",
            Self::Wheel { .. } => "Rad",
            Self::Grid { .. } => "Gitter",
        }
    }

    /// Anzahl Knoten, die die Vorlage erzeugt.
    pub fn node_count(&self) -> usize {
        match *self {
            Self::Complete { n } | Self::Cycle { n } | Self::Star { n } | Self::Wheel { n } => n,
            Self::BipartiteComplete { left, right } => left + right,
            Self::Grid { columns, rows } => columns * rows,
        }
    }

    fn validate(&self) -> Result<(), TemplateError> {
        let check = |value: usize, minimum: usize| {
            if value < minimum {
                Err(TemplateError::TooSmall {
                    template: self.label(),
                    minimum,
                    actual: value,
                })
            } else {
                Ok(())
            }
        };
        match *self {
            Self::Complete { n } => check(n, 1),
            Self::Cycle { n } => check(n, 3),
            Self::Star { n } | Self::Wheel { n } => check(n, 4),
            Self::BipartiteComplete { left, right } => {
                check(left, 1)?;
                check(right, 1)
            }
            Self::Grid { columns, rows } => {
                check(columns, 1)?;
                check(rows, 1)
            }
        }
    }
}

/// Platzierung der Vorlage auf dem Canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateLayout {
    /// Mittelpunkt (Kreis-/Stern-Zentrum, Gitter-Ursprung)
    pub center: Vec2,
    /// Kreisradius bzw. Reihen-/Gitterabstand
    pub radius: f32,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            center: Vec2::new(400.0, 300.0),
            radius: 100.0,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("{template}: mindestens {minimum} benötigt, {actual} angegeben")]
    TooSmall {
        template: &'static str,
        minimum: usize,
        actual: usize,
    },
}

/// Erzeugt die Vorlage im Graphen und gibt die neuen Knoten-IDs in
/// Erzeugungsreihenfolge zurück.
pub fn generate(
    graph: &mut Graph,
    template: GraphTemplate,
    layout: TemplateLayout,
) -> Result<Vec<NodeId>, TemplateError> {
    template.validate()?;

    let ids = match template {
        GraphTemplate::Complete { n } => {
            let ids = add_circle(graph, n, layout);
            for (i, a) in ids.iter().enumerate() {
                for b in &ids[i + 1..] {
                    graph.connect(*a, *b);
                }
            }
            ids
        }
        GraphTemplate::BipartiteComplete { left, right } => {
            let top = add_row(graph, left, layout.center.y - layout.radius, layout);
            let bottom = add_row(graph, right, layout.center.y + layout.radius, layout);
            for a in &top {
                for b in &bottom {
                    graph.connect(*a, *b);
                }
            }
            top.into_iter().chain(bottom).collect()
        }
        GraphTemplate::Cycle { n } => {
            let ids = add_circle(graph, n, layout);
            connect_ring(graph, &ids);
            ids
        }
        GraphTemplate::Star { n } => {
            let mut ids = add_circle(graph, n - 1, layout);
            let center = graph.add_node(layout.center);
            for leaf in &ids {
                graph.connect(center, *leaf);
            }
            ids.push(center);
            ids
        }
        GraphTemplate::Wheel { n } => {
            let mut ids = add_circle(graph, n - 1, layout);
            connect_ring(graph, &ids);
            let hub = graph.add_node(layout.center);
            for rim in &ids {
                graph.connect(hub, *rim);
            }
            ids.push(hub);
            ids
        }
        GraphTemplate::Grid { columns, rows } => add_grid(graph, columns, rows, layout),
    };

    log::info!(
        "Vorlage '{}' erzeugt: {} Knoten",
        template.label(),
        ids.len()
    );
    Ok(ids)
}

fn add_circle(graph: &mut Graph, n: usize, layout: TemplateLayout) -> Vec<NodeId> {
    graph.add_nodes((0..n).map(|i| {
        let angle = TAU * i as f32 / n as f32;
        layout.center + layout.radius * Vec2::new(angle.cos(), angle.sin())
    }))
}

/// Knoten einer Reihe, abwechselnd rechts/links der Mitte aufgefüllt.
fn add_row(graph: &mut Graph, n: usize, y: f32, layout: TemplateLayout) -> Vec<NodeId> {
    (0..n)
        .map(|i| {
            let step = ((i + 1) / 2) as f32;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            graph.add_node(Vec2::new(layout.center.x + sign * step * layout.radius, y))
        })
        .collect()
}

fn connect_ring(graph: &mut Graph, ids: &[NodeId]) {
    for (i, a) in ids.iter().enumerate() {
        graph.connect(*a, ids[(i + 1) % ids.len()]);
    }
}

/// Gitter ab `layout.center` nach rechts unten; zuerst Zeilen-, dann Spaltenkanten.
fn add_grid(graph: &mut Graph, columns: usize, rows: usize, layout: TemplateLayout) -> Vec<NodeId> {
    let positions = (0..columns).flat_map(|i| {
        (0..rows).map(move |j| layout.center + Vec2::new(i as f32, j as f32) * layout.radius)
    });
    let ids = graph.add_nodes(positions);

    let at = |i: usize, j: usize| ids[i * rows + j];
    for i in 0..columns {
        for j in 0..rows.saturating_sub(1) {
            graph.connect(at(i, j), at(i, j + 1));
        }
    }
    for i in 0..columns.saturating_sub(1) {
        for j in 0..rows {
            graph.connect(at(i, j), at(i + 1, j));
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn build(template: GraphTemplate) -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::new();
        let ids = generate(&mut graph, template, TemplateLayout::default())
            .expect("Vorlage sollte erzeugt werden");
        (graph, ids)
    }

    #[test]
    fn complete_graph_connects_every_pair() {
        let (graph, ids) = build(GraphTemplate::Complete { n: 5 });

        assert_eq!(ids.len(), 5);
        assert_eq!(graph.edge_count(), 10);
        for id in &ids {
            assert_eq!(graph.neighbors_of(*id).len(), 4);
        }
    }

    #[test]
    fn single_node_complete_graph_has_no_edges() {
        let (graph, _) = build(GraphTemplate::Complete { n: 1 });
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn bipartite_rows_and_edges() {
        let (graph, ids) = build(GraphTemplate::BipartiteComplete { left: 2, right: 3 });

        assert_eq!(ids.len(), 5);
        assert_eq!(graph.edge_count(), 6);
        let top = graph.node(ids[0]).map(|n| n.position().y);
        let bottom = graph.node(ids[4]).map(|n| n.position().y);
        assert_eq!(top, Some(200.0));
        assert_eq!(bottom, Some(400.0));
        assert!(!graph.are_connected(ids[0], ids[1]));
    }

    #[test]
    fn cycle_has_degree_two_everywhere() {
        let (graph, ids) = build(GraphTemplate::Cycle { n: 6 });

        assert_eq!(graph.edge_count(), 6);
        assert!(ids.iter().all(|id| graph.neighbors_of(*id).len() == 2));
        let first = graph.node(ids[0]).map(|n| n.position()).unwrap_or_default();
        assert_relative_eq!(first.x, 500.0);
        assert_relative_eq!(first.y, 300.0);
    }

    #[test]
    fn star_connects_leaves_to_center_only() {
        let (graph, ids) = build(GraphTemplate::Star { n: 5 });

        let center = *ids.last().expect("Zentrum erwartet");
        assert_eq!(graph.node(center).map(|n| n.position()), Some(Vec2::new(400.0, 300.0)));
        assert_eq!(graph.neighbors_of(center).len(), 4);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn wheel_combines_rim_and_spokes() {
        let (graph, ids) = build(GraphTemplate::Wheel { n: 5 });

        assert_eq!(ids.len(), 5);
        assert_eq!(graph.edge_count(), 8);
        let hub = *ids.last().expect("Nabe erwartet");
        assert_eq!(graph.neighbors_of(hub).len(), 4);
    }

    #[test]
    fn grid_has_row_and_column_edges() {
        let (graph, ids) = build(GraphTemplate::Grid { columns: 3, rows: 2 });

        assert_eq!(ids.len(), 6);
        // 3 Spalten × 1 vertikale + 2 × 2 horizontale Kanten
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(
            graph.node(ids[5]).map(|n| n.position()),
            Some(Vec2::new(600.0, 400.0))
        );
    }

    #[test]
    fn templates_append_to_existing_document() {
        let mut graph = Graph::new();
        let existing = graph.add_node(Vec2::ZERO);

        let ids = generate(&mut graph, GraphTemplate::Cycle { n: 3 }, TemplateLayout::default())
            .expect("Vorlage sollte erzeugt werden");

        assert_eq!(graph.node_count(), 4);
        assert!(!ids.contains(&existing));
        assert!(graph.neighbors_of(existing).is_empty());
    }

    #[test]
    fn too_small_sizes_are_rejected_without_mutation() {
        let mut graph = Graph::new();
        let cases = [
            GraphTemplate::Complete { n: 0 },
            GraphTemplate::Cycle { n: 2 },
            GraphTemplate::Star { n: 3 },
            GraphTemplate::Wheel { n: 3 },
            GraphTemplate::BipartiteComplete { left: 1, right: 0 },
            GraphTemplate::Grid { columns: 0, rows: 4 },
        ];

        for template in cases {
            let result = generate(&mut graph, template, TemplateLayout::default());
            assert!(matches!(result, Err(TemplateError::TooSmall { .. })));
        }
        assert!(graph.is_empty());
    }
}
