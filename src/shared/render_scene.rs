//! Render-Szene als expliziter Übergabevertrag zwischen App und Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use serde::Serialize;

/// Zeichenanweisung für einen Knoten (Kreis um den Mittelpunkt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeRenderRecord {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub selected: bool,
    /// Knoten wird gerade gezogen
    pub dragged: bool,
}

/// Zeichenanweisung für eine Kante.
///
/// Bei `curve_index == 0` liegt der Kontrollpunkt auf der Streckenmitte,
/// die Kante ist also gerade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRenderRecord {
    pub node1: u64,
    pub node2: u64,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub curve_index: usize,
    pub control_x: f32,
    pub control_y: f32,
}

impl EdgeRenderRecord {
    pub fn is_straight(&self) -> bool {
        self.curve_index == 0
    }
}

/// Darstellungsparameter, aus den `EditorOptions` übernommen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderStyle {
    pub node_radius: f32,
    pub selection_halo_factor: f32,
    pub edge_thickness: f32,
    pub node_color: [f32; 4],
    pub node_color_selected: [f32; 4],
    pub edge_color: [f32; 4],
    pub background_color: [f32; 4],
}

impl RenderStyle {
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            node_radius: options.node_radius,
            selection_halo_factor: options.selection_halo_factor,
            edge_thickness: options.edge_thickness,
            node_color: options.node_color,
            node_color_selected: options.node_color_selected,
            edge_color: options.edge_color,
            background_color: options.background_color,
        }
    }
}

/// Read-only Daten für einen Render-Frame.
///
/// Knoten in Pool-Reihenfolge, Kanten in der sortierten Reihenfolge des
/// Graphen. Zeichenreihenfolge: Hintergrund, Kanten, Knoten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderScene {
    pub nodes: Vec<NodeRenderRecord>,
    pub edges: Vec<EdgeRenderRecord>,
    pub node_count: usize,
    pub edge_count: usize,
    pub selected_count: usize,
    pub style: RenderStyle,
}

impl RenderScene {
    /// Maschinenlesbarer Export der Zeichenanweisungen.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
