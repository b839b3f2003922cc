//! Datei-Zugriff für Graph-Dokumente mit atomarem Schreiben.

use super::error::GraphFileError;
use super::{parse_graph_document, write_graph_document};
use crate::core::Graph;
use std::io::Write;
use std::path::Path;

/// Liest und parsed eine Graph-Datei.
pub fn load_graph_file(path: impl AsRef<Path>) -> Result<Graph, GraphFileError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_graph_document(&content)
}

/// Schreibt den Graphen atomar nach `path`.
pub fn save_graph_file(path: impl AsRef<Path>, graph: &Graph) -> Result<(), GraphFileError> {
    let xml = write_graph_document(graph);
    write_atomically(path.as_ref(), xml.as_bytes())?;
    log::info!(
        "Graph gespeichert: {} ({} Knoten, {} Kanten)",
        path.as_ref().display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Schreibt `bytes` in eine Temp-Datei im Zielverzeichnis und ersetzt
/// danach das Ziel in einem Schritt. Bei Fehlern bleibt die alte Datei
/// unverändert.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
