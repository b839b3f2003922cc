use crate::core::GraphTemplate;

/// Parameter der Vorlagen im "Erzeugen"-Menü.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDraft {
    pub complete_n: usize,
    pub bipartite_left: usize,
    pub bipartite_right: usize,
    pub cycle_n: usize,
    pub star_n: usize,
    pub wheel_n: usize,
    pub grid_columns: usize,
    pub grid_rows: usize,
}

impl Default for TemplateDraft {
    fn default() -> Self {
        Self {
            complete_n: 5,
            bipartite_left: 3,
            bipartite_right: 3,
            cycle_n: 6,
            star_n: 6,
            wheel_n: 7,
            grid_columns: 4,
            grid_rows: 3,
        }
    }
}

impl TemplateDraft {
    pub fn complete(&self) -> GraphTemplate {
        GraphTemplate::Complete { n: self.complete_n }
    }

    pub fn bipartite(&self) -> GraphTemplate {
        GraphTemplate::BipartiteComplete {
            left: self.bipartite_left,
            right: self.bipartite_right,
        }
    }

    pub fn cycle(&self) -> GraphTemplate {
        GraphTemplate::Cycle { n: self.cycle_n }
    }

    pub fn star(&self) -> GraphTemplate {
        GraphTemplate::Star { n: self.star_n }
    }

    pub fn wheel(&self) -> GraphTemplate {
        GraphTemplate::Wheel { n: self.wheel_n }
    }

    pub fn grid(&self) -> GraphTemplate {
        GraphTemplate::Grid {
            columns: self.grid_columns,
            rows: self.grid_rows,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Datei-Öffnen-Dialog angezeigt werden soll
    pub show_file_dialog: bool,
    /// Ob der Datei-Speichern-Dialog angezeigt werden soll
    pub show_save_file_dialog: bool,
    /// Ob der Szene-Export-Dialog angezeigt werden soll
    pub show_export_dialog: bool,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<String>,
    /// Letzte Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
    pub template_draft: TemplateDraft,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
