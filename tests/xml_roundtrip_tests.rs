use graph_tool_editor::{
    load_graph_file, parse_graph_document, save_graph_file, write_graph_document, GraphFileError,
};

#[test]
fn test_fixture_parses_with_deduplicated_edges() {
    let xml_content = include_str!("fixtures/simple_graph.xml");

    let graph = parse_graph_document(xml_content).expect("Fixture sollte parsebar sein");

    assert_eq!(graph.node_count(), 5);
    // 1-2, 1-4, 2-3, 2-4; Knoten 5 ist isoliert
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.selected_count(), 0);

    let isolated = graph
        .nodes()
        .find(|node| node.position() == glam::Vec2::new(500.0, 400.0))
        .expect("Isolierter Knoten erwartet");
    assert!(isolated.neighbors().is_empty());
}

#[test]
fn test_xml_roundtrip_preserves_counts_positions_and_adjacency() {
    let xml_content = include_str!("fixtures/simple_graph.xml");
    let original = parse_graph_document(xml_content).expect("Fixture sollte parsebar sein");

    let written = write_graph_document(&original);
    let reparsed = parse_graph_document(&written).expect("Geschriebenes XML sollte parsebar sein");

    assert_eq!(reparsed.node_count(), original.node_count());
    assert_eq!(reparsed.edge_count(), original.edge_count());

    let degrees = |graph: &graph_tool_editor::Graph| -> Vec<(glam::Vec2, usize)> {
        graph
            .nodes()
            .map(|node| (node.position(), node.neighbors().len()))
            .collect()
    };
    assert_eq!(degrees(&reparsed), degrees(&original));
}

#[test]
fn test_save_and_load_through_filesystem() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte angelegt werden");
    let path = dir.path().join("graph.xml");
    let original = parse_graph_document(include_str!("fixtures/simple_graph.xml"))
        .expect("Fixture sollte parsebar sein");

    save_graph_file(&path, &original).expect("Speichern sollte gelingen");
    let loaded = load_graph_file(&path).expect("Laden sollte gelingen");

    assert_eq!(loaded.node_count(), 5);
    assert_eq!(loaded.edge_count(), 4);
}

#[test]
fn test_garbage_file_is_deserialization_error() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte angelegt werden");
    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "das ist kein Graph").expect("Testdatei sollte geschrieben werden");

    let err = load_graph_file(&path).expect_err("Laden sollte scheitern");

    assert!(err.is_deserialization());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte angelegt werden");

    let err = load_graph_file(dir.path().join("fehlt.xml")).expect_err("Laden sollte scheitern");

    assert!(matches!(err, GraphFileError::Io(_)));
    assert!(!err.is_deserialization());
}

#[test]
fn test_fractional_positions_roundtrip_exactly() {
    let mut graph = graph_tool_editor::Graph::new();
    let positions = [
        glam::Vec2::new(123.456_79, 0.1234),
        glam::Vec2::new(-0.333_333_34, 1.0e6 + 0.5),
        glam::Vec2::new(7.000_001, -250.062_5),
    ];
    let ids = graph.add_nodes(positions);
    graph.connect(ids[0], ids[2]);

    let reparsed = parse_graph_document(&write_graph_document(&graph))
        .expect("Geschriebenes XML sollte parsebar sein");

    let loaded: Vec<glam::Vec2> = reparsed.nodes().map(|node| node.position()).collect();
    assert_eq!(loaded, positions.to_vec());
    assert_eq!(reparsed.edge_count(), 1);
}
