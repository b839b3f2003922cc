//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{control_point_with_spacing, curve_indices};
use crate::shared::{EdgeRenderRecord, NodeRenderRecord, RenderScene, RenderStyle};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let graph = &state.graph;
    let dragged = state.interaction.drag_target;

    let nodes: Vec<NodeRenderRecord> = graph
        .nodes()
        .map(|node| NodeRenderRecord {
            id: node.id().0,
            x: node.position().x,
            y: node.position().y,
            selected: node.is_selected(),
            dragged: dragged == Some(node.id()),
        })
        .collect();

    let edges = graph.edges();
    let indices = curve_indices(edges);
    let edges: Vec<EdgeRenderRecord> = edges
        .iter()
        .zip(indices)
        .filter_map(|(edge, curve_index)| {
            let start = graph.node(edge.node1)?.position();
            let end = graph.node(edge.node2)?.position();
            let control =
                control_point_with_spacing(start, end, curve_index, state.options.curve_spacing);
            Some(EdgeRenderRecord {
                node1: edge.node1.0,
                node2: edge.node2.0,
                x1: start.x,
                y1: start.y,
                x2: end.x,
                y2: end.y,
                curve_index,
                control_x: control.x,
                control_y: control.y,
            })
        })
        .collect();

    RenderScene {
        node_count: nodes.len(),
        edge_count: edges.len(),
        selected_count: graph.selected_count(),
        nodes,
        edges,
        style: RenderStyle::from_options(&state.options),
    }
}
