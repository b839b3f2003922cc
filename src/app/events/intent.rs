use crate::core::GraphTemplate;

/// Maustaste eines Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Links: Knoten-Selektion umschalten
    Primary,
    /// Rechts: neuen Knoten anlegen
    Secondary,
}

/// Editor-Befehle per Tastatur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Connect,
    Disconnect,
    SelectAllToggle,
    Delete,
    Grab,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Leeres Dokument beginnen
    NewDocumentRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei im Öffnen-Dialog gewählt
    FileSelected { path: String },
    /// Zielpfad im Speichern-Dialog gewählt
    SaveFilePathSelected { path: String },
    /// Render-Szene als JSON exportieren (zeigt Dateidialog)
    ExportSceneRequested,
    /// Zielpfad für den Szene-Export gewählt
    ExportScenePathSelected { path: String },
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
    /// Vorlage an das Dokument anhängen
    GenerateTemplateRequested { template: GraphTemplate },

    // ── Zeiger & Tastatur (Canvas-Koordinaten) ──────────────────
    /// Maustaste gedrückt
    PointerDown {
        world_pos: glam::Vec2,
        button: PointerButton,
    },
    /// Maustaste losgelassen
    PointerUp { world_pos: glam::Vec2 },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { world_pos: glam::Vec2 },
    /// Drag-Geste beginnt
    DragStarted { world_pos: glam::Vec2 },
    /// Drag-Geste läuft
    DragMoved { world_pos: glam::Vec2 },
    /// Drag-Geste endet
    DragEnded,
    /// Klick ohne Drag
    Clicked {
        world_pos: glam::Vec2,
        button: PointerButton,
    },
    /// Editor-Befehl per Tastatur
    KeyPressed { key: EditorKey },
}
