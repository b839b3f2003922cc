//! Persistenz-Adapter: Graph-Dokumente als XML lesen und schreiben.
//!
//! Das Format nutzt parallele Listen ("Structure of Arrays") unter
//! `<GraphTool schema="1"><nodes>…</nodes></GraphTool>`.

pub mod error;
pub mod file;
pub mod parser;
pub mod writer;

pub use error::{GraphFileError, SCHEMA_VERSION};
pub use file::{load_graph_file, save_graph_file, write_atomically};
pub use parser::parse_graph_document;
pub use writer::write_graph_document;

/// Name des Wurzelelements.
pub const ROOT_TAG: &str = "GraphTool";
