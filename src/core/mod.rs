//! Core-Domänentypen: Knoten, Kanten, Graph-Dokument, Selektion, Spatial-Index.
//!
//! Unabhängig von egui; vollständig headless testbar.

pub mod edge;
pub mod geometry;
pub mod graph;
pub mod node;
pub mod selection;
pub mod spatial;
pub mod templates;

pub use edge::{curve_indices, GraphEdge};
pub use geometry::{control_point, control_point_with_spacing, curve_offset, CURVE_SPACING};
pub use graph::Graph;
pub use node::{GraphNode, NodeId};
pub use selection::SelectionSet;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use templates::{GraphTemplate, TemplateError, TemplateLayout};
