use super::*;

fn two_nodes() -> (Graph, NodeId, NodeId) {
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.0, 0.0));
    let b = graph.add_node(Vec2::new(60.0, 0.0));
    (graph, a, b)
}

#[test]
fn add_node_creates_unselected_isolated_node() {
    let mut graph = Graph::new();
    let id = graph.add_node(Vec2::new(12.0, 34.0));

    let node = graph.node(id).expect("Knoten erwartet");
    assert_eq!(node.position(), Vec2::new(12.0, 34.0));
    assert!(!node.is_selected());
    assert!(node.neighbors().is_empty());
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn node_ids_are_not_reused_after_removal() {
    let (mut graph, _a, b) = two_nodes();
    graph.remove_node(b);
    let c = graph.add_node(Vec2::ZERO);

    assert_ne!(b, c);
}

#[test]
fn connect_is_symmetric_and_creates_exactly_one_edge() {
    let (mut graph, a, b) = two_nodes();

    assert!(graph.connect(a, b));

    assert_eq!(graph.neighbors_of(a), &[b]);
    assert_eq!(graph.neighbors_of(b), &[a]);
    assert_eq!(graph.edges(), &[GraphEdge::new(a, b)]);
}

#[test]
fn duplicate_connect_keeps_single_edge() {
    let (mut graph, a, b) = two_nodes();

    assert!(graph.connect(a, b));
    assert!(!graph.connect(a, b));
    assert!(!graph.connect(b, a));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors_of(a).len(), 1);
}

#[test]
fn connect_to_self_or_unknown_node_is_noop() {
    let (mut graph, a, _b) = two_nodes();

    assert!(!graph.connect(a, a));
    assert!(!graph.connect(a, NodeId(999)));
    assert!(graph.neighbors_of(a).is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn disconnect_restores_pre_connect_state() {
    let (mut graph, a, b) = two_nodes();
    let c = graph.add_node(Vec2::new(0.0, 60.0));
    graph.connect(a, c);
    let neighbors_a = graph.neighbors_of(a).to_vec();
    let edges_before = graph.edges().to_vec();

    graph.connect(a, b);
    assert!(graph.disconnect(b, a));

    assert_eq!(graph.neighbors_of(a), neighbors_a.as_slice());
    assert!(graph.neighbors_of(b).is_empty());
    assert_eq!(graph.edges(), edges_before.as_slice());
}

#[test]
fn disconnect_without_connection_is_safe() {
    let (mut graph, a, b) = two_nodes();

    assert!(!graph.disconnect(a, b));
    assert!(!graph.disconnect(a, NodeId(42)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn remove_node_cleans_neighbors_edges_and_selection() {
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.0, 0.0));
    let b = graph.add_node(Vec2::new(100.0, 0.0));
    let c = graph.add_node(Vec2::new(0.0, 100.0));
    graph.connect(a, b);
    graph.connect(a, c);
    graph.connect(b, c);
    graph.toggle_selection(a);
    graph.toggle_selection(b);

    let removed = graph.remove_node(a).expect("Knoten erwartet");

    assert_eq!(removed.id(), a);
    assert!(!graph.contains(a));
    assert_eq!(graph.neighbors_of(b), &[c]);
    assert_eq!(graph.neighbors_of(c), &[b]);
    assert!(graph.edges().iter().all(|edge| !edge.contains(a)));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.selection().to_vec(), vec![b]);
}

#[test]
fn remove_nodes_handles_batches_and_unknown_ids() {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..4)
        .map(|i| graph.add_node(Vec2::new(i as f32 * 50.0, 0.0)))
        .collect();
    for pair in ids.windows(2) {
        graph.connect(pair[0], pair[1]);
    }

    let removed = graph.remove_nodes(&[ids[1], ids[2], NodeId(999)]);

    assert_eq!(removed, 2);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors_of(ids[0]).is_empty());
    assert!(graph.neighbors_of(ids[3]).is_empty());
}

#[test]
fn edges_are_sorted_by_canonical_pair() {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..4)
        .map(|i| graph.add_node(Vec2::new(i as f32 * 50.0, 0.0)))
        .collect();
    graph.connect(ids[3], ids[0]);
    graph.connect(ids[2], ids[1]);
    graph.connect(ids[1], ids[0]);

    let keys: Vec<(NodeId, NodeId)> = graph.edges().iter().map(|e| e.canonical_key()).collect();

    assert_eq!(
        keys,
        vec![(ids[0], ids[1]), (ids[0], ids[3]), (ids[1], ids[2])]
    );
    for edge in graph.edges() {
        assert!(edge.node1 < edge.node2);
    }
}

#[test]
fn edges_cache_follows_topology_changes() {
    let (mut graph, a, b) = two_nodes();
    assert_eq!(graph.edge_count(), 0);

    graph.connect(a, b);
    assert_eq!(graph.edge_count(), 1);

    graph.disconnect(a, b);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn edges_are_derived_once_from_asymmetric_links() {
    let (mut graph, a, b) = two_nodes();
    if let Some(node) = graph.nodes.get_mut(&a) {
        node.add_neighbor(b);
    }
    graph.link(a, b);

    assert_eq!(graph.neighbors_of(a), &[b]);
    assert_eq!(graph.neighbors_of(b), &[a]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn toggle_selection_keeps_flags_in_lockstep() {
    let (mut graph, a, b) = two_nodes();

    assert_eq!(graph.toggle_selection(a), Some(true));
    assert_eq!(graph.toggle_selection(b), Some(true));
    assert_eq!(graph.toggle_selection(a), Some(false));
    assert_eq!(graph.toggle_selection(NodeId(77)), None);

    assert_eq!(graph.selection().to_vec(), vec![b]);
    for node in graph.nodes() {
        assert_eq!(node.is_selected(), graph.selection().contains(node.id()));
    }
}

#[test]
fn select_all_and_deselect_all() {
    let mut graph = Graph::new();
    for i in 0..4 {
        graph.add_node(Vec2::new(i as f32 * 40.0, 0.0));
    }

    graph.select_all();
    assert_eq!(graph.selected_count(), 4);
    assert!(graph.is_selection_full());
    assert!(graph.nodes().all(|n| n.is_selected()));

    graph.deselect_all();
    assert_eq!(graph.selected_count(), 0);
    assert!(!graph.is_selection_full());
    assert!(graph.nodes().all(|n| !n.is_selected()));
}

#[test]
fn empty_graph_counts_as_fully_selected() {
    let graph = Graph::new();
    assert!(graph.is_selection_full());
}

#[test]
fn hit_test_uses_square_region_and_pool_order() {
    let mut graph = Graph::new();
    let first = graph.add_node(Vec2::new(100.0, 100.0));
    let second = graph.add_node(Vec2::new(110.0, 100.0));

    // Ecke des Quadrats liegt außerhalb eines Kreises mit gleichem Radius
    assert_eq!(graph.hit_test(Vec2::new(114.0, 114.0), 15.0), Some(first));
    assert_eq!(graph.hit_test(Vec2::new(105.0, 100.0), 15.0), Some(first));
    assert_eq!(graph.hit_test(Vec2::new(124.0, 100.0), 15.0), Some(second));
    assert_eq!(graph.hit_test(Vec2::new(125.0, 100.0), 15.0), None);
    assert_eq!(graph.hit_test(Vec2::new(300.0, 300.0), 15.0), None);
}

#[test]
fn hit_test_follows_moved_nodes() {
    let (mut graph, a, b) = two_nodes();

    assert!(graph.set_node_position(a, Vec2::new(500.0, 500.0)));
    assert_eq!(graph.hit_test(Vec2::new(500.0, 500.0), 15.0), Some(a));

    graph.translate_nodes(&[b], Vec2::new(0.0, 200.0));
    assert_eq!(graph.hit_test(Vec2::new(60.0, 200.0), 15.0), Some(b));
    assert_eq!(graph.hit_test(Vec2::new(60.0, 0.0), 15.0), None);
}

#[test]
fn many_stacked_nodes_far_from_origin_stay_pickable() {
    let mut graph = Graph::new();
    let ids = graph.add_nodes((0..64).map(|_| Vec2::new(1.0e6, 1.0e6)));
    let far = graph.add_node(Vec2::new(-1.0e6, 1.0e6));

    assert_eq!(graph.node_count(), 65);
    assert_eq!(graph.hit_test(Vec2::new(1.0e6, 1.0e6), 15.0), Some(ids[0]));
    assert_eq!(graph.hit_test(Vec2::new(-1.0e6, 1.0e6), 15.0), Some(far));

    // Stapel auflösen und wieder bilden
    graph.translate_nodes(&ids[..32], Vec2::new(-2.0e6, 0.0));
    assert_eq!(graph.hit_test(Vec2::new(-1.0e6, 1.0e6), 15.0), Some(ids[0]));
}

#[test]
fn translate_nodes_moves_only_given_nodes() {
    let (mut graph, a, b) = two_nodes();

    let moved = graph.translate_nodes(&[a, NodeId(999)], Vec2::new(5.0, -5.0));

    assert_eq!(moved, 1);
    assert_eq!(graph.node(a).map(|n| n.position()), Some(Vec2::new(5.0, -5.0)));
    assert_eq!(graph.node(b).map(|n| n.position()), Some(Vec2::new(60.0, 0.0)));
}

#[test]
fn clear_empties_document() {
    let (mut graph, a, b) = two_nodes();
    graph.connect(a, b);
    graph.select_all();

    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.selected_count(), 0);
    assert_eq!(graph.hit_test(Vec2::ZERO, 15.0), None);
}
