use crate::app::CommandLog;
use crate::core::Graph;
use crate::shared::EditorOptions;

use super::{InteractionState, UiState};

/// Hauptzustand der Anwendung: genau eine Editor-Sitzung.
///
/// Graph-Modell, Selektion und Interaktions-Zustand teilen sich dieses eine
/// Dokument. Mutiert wird ausschließlich über den `AppController`.
pub struct AppState {
    /// Aktuelles Dokument (inkl. Selektion)
    pub graph: Graph,
    /// Zustand der Interaktions-Zustandsmaschine
    pub interaction: InteractionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Pick-Radius)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt eine Sitzung mit leerem Dokument
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            graph: Graph::new(),
            interaction: InteractionState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Knoten zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn selected_count(&self) -> usize {
        self.graph.selected_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
