//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reihenfolge: Hintergrund, Kanten, Knoten. Gerade Kanten als Linie,
//! Mehrfachkanten als quadratische Bézierkurve über den Kontrollpunkt.

use crate::shared::{EdgeRenderRecord, NodeRenderRecord, RenderScene, RenderStyle};
use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Pos2, Rect, Stroke};

/// Zeichnet die Szene in `rect`. Szene-Koordinaten sind relativ zu `rect.min`.
pub fn paint_scene(ui: &egui::Ui, rect: Rect, scene: &RenderScene) {
    let painter = ui.painter_at(rect);
    let style = &scene.style;

    painter.rect_filled(rect, 0.0, to_color(style.background_color));

    let edge_stroke = Stroke::new(style.edge_thickness, to_color(style.edge_color));
    for edge in &scene.edges {
        paint_edge(&painter, rect, edge, edge_stroke);
    }

    for node in &scene.nodes {
        paint_node(&painter, rect, node, style);
    }

    if scene.nodes.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Rechtsklick legt einen Knoten an",
            egui::FontId::proportional(16.0),
            Color32::from_gray(200),
        );
    }
}

fn paint_edge(painter: &egui::Painter, rect: Rect, edge: &EdgeRenderRecord, stroke: Stroke) {
    let start = to_screen(rect, edge.x1, edge.y1);
    let end = to_screen(rect, edge.x2, edge.y2);

    if edge.is_straight() {
        painter.line_segment([start, end], stroke);
        return;
    }

    let control = to_screen(rect, edge.control_x, edge.control_y);
    painter.add(QuadraticBezierShape::from_points_stroke(
        [start, control, end],
        false,
        Color32::TRANSPARENT,
        stroke,
    ));
}

fn paint_node(painter: &egui::Painter, rect: Rect, node: &NodeRenderRecord, style: &RenderStyle) {
    let center = to_screen(rect, node.x, node.y);
    let color = if node.selected {
        style.node_color_selected
    } else {
        style.node_color
    };

    painter.circle_filled(center, style.node_radius, to_color(color));

    if node.selected || node.dragged {
        painter.circle_stroke(
            center,
            style.node_radius * style.selection_halo_factor,
            Stroke::new(2.0, to_color(style.node_color_selected)),
        );
    }
}

fn to_screen(rect: Rect, x: f32, y: f32) -> Pos2 {
    rect.min + egui::vec2(x, y)
}

fn to_color(rgba: [f32; 4]) -> Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
