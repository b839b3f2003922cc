#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Darf nie paniken; gelingt das Parsen, muss der Graph symmetrisch sein
    if let Ok(graph) = graph_tool_editor::parse_graph_document(text) {
        for node in graph.nodes() {
            for neighbor in node.neighbors() {
                assert!(graph.are_connected(*neighbor, node.id()));
            }
        }
        assert_eq!(graph.selected_count(), 0);
    }
});
