//! Writer für Graph-Dokumente.

use super::error::SCHEMA_VERSION;
use super::ROOT_TAG;
use crate::core::{Graph, NodeId};
use std::collections::HashMap;

/// Serialisiert den Graphen als XML-Dokument.
///
/// IDs werden in Pool-Reihenfolge lückenlos ab 1 neu vergeben. Jede
/// Nachbarschaft steht symmetrisch in beiden Nachbarlisten. Die Selektion
/// wird nicht gespeichert.
pub fn write_graph_document(graph: &Graph) -> String {
    // Renumbering: interne IDs → 1-basierte Datei-IDs
    let id_remap: HashMap<NodeId, u64> = graph
        .nodes()
        .enumerate()
        .map(|(i, node)| (node.id(), (i + 1) as u64))
        .collect();

    let mut ids_text = Vec::with_capacity(graph.node_count());
    let mut xs_text = Vec::with_capacity(graph.node_count());
    let mut ys_text = Vec::with_capacity(graph.node_count());
    let mut neighbors_text = Vec::with_capacity(graph.node_count());

    for node in graph.nodes() {
        ids_text.push(id_remap[&node.id()].to_string());
        xs_text.push(format_float(node.position().x));
        ys_text.push(format_float(node.position().y));

        let neighbors: Vec<u64> = node
            .neighbors()
            .iter()
            .filter_map(|neighbor| id_remap.get(neighbor).copied())
            .collect();
        neighbors_text.push(join_ids(&neighbors));
    }

    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str(&format!(
        "<{} schema=\"{}\">\n",
        ROOT_TAG, SCHEMA_VERSION
    ));
    output.push_str("    <nodes>\n");
    output.push_str(&format!("        <id>{}</id>\n", ids_text.join(",")));
    output.push_str(&format!("        <x>{}</x>\n", xs_text.join(",")));
    output.push_str(&format!("        <y>{}</y>\n", ys_text.join(",")));
    output.push_str(&format!(
        "        <neighbors>{}</neighbors>\n",
        neighbors_text.join(";")
    ));
    output.push_str("    </nodes>\n");
    output.push_str(&format!("</{}>\n", ROOT_TAG));

    output
}

/// Leere Listen werden als `-1` geschrieben, damit `;;` nicht mit einem
/// fehlenden Eintrag verwechselt wird.
fn join_ids(ids: &[u64]) -> String {
    if ids.is_empty() {
        return "-1".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// Kürzeste Darstellung, die beim Parsen exakt denselben `f32` ergibt.
fn format_float(value: f32) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_format_float_is_exact_and_short() {
        assert_eq!(format_float(100.0), "100");
        assert_eq!(format_float(-0.5), "-0.5");
        for value in [123.456_79_f32, 0.1234, -50.123_456, 1.0e-7, 3.0e7] {
            assert_eq!(format_float(value).parse::<f32>(), Ok(value));
        }
    }

    #[test]
    fn test_fractional_positions_survive_write_and_parse() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(123.456_79, 0.1234));
        let b = graph.add_node(Vec2::new(-17.333_334, 988.125_06));
        graph.connect(a, b);

        let loaded = crate::xml::parse_graph_document(&write_graph_document(&graph))
            .expect("Parsen sollte gelingen");

        let positions: Vec<Vec2> = loaded.nodes().map(|node| node.position()).collect();
        assert_eq!(
            positions,
            vec![Vec2::new(123.456_79, 0.1234), Vec2::new(-17.333_334, 988.125_06)]
        );
    }

    #[test]
    fn test_empty_neighbor_list_is_written_as_marker() {
        assert_eq!(join_ids(&[]), "-1");
        assert_eq!(join_ids(&[3, 1]), "3,1");
    }

    #[test]
    fn test_ids_are_renumbered_in_pool_order() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(10.0, 0.0));
        let c = graph.add_node(Vec2::new(20.0, 5.5));
        graph.remove_node(a);
        graph.connect(b, c);

        let xml = write_graph_document(&graph);

        assert!(xml.contains("<GraphTool schema=\"1\">"));
        assert!(xml.contains("<id>1,2</id>"));
        assert!(xml.contains("<x>10,20</x>"));
        assert!(xml.contains("<y>0,5.5</y>"));
        assert!(xml.contains("<neighbors>2;1</neighbors>"));
    }

    #[test]
    fn test_selection_is_not_persisted() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::ZERO);
        graph.toggle_selection(a);

        let xml = write_graph_document(&graph);

        assert!(!xml.contains("selected"));
        assert!(xml.contains("<neighbors>-1</neighbors>"));
    }

    #[test]
    fn test_empty_graph_writes_empty_lists() {
        let xml = write_graph_document(&Graph::new());
        assert!(xml.contains("<id></id>"));
        assert!(xml.contains("<neighbors></neighbors>"));
    }
}
