//! GraphTool Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;
pub mod xml;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorKey, EditorMode, PointerButton, UiState,
};
pub use core::{
    control_point, GraphEdge, GraphNode, GraphTemplate, NodeId, SelectionSet, TemplateLayout,
};
pub use core::Graph;
pub use shared::{EditorOptions, RenderScene};
pub use xml::{
    load_graph_file, parse_graph_document, save_graph_file, write_graph_document, GraphFileError,
};
