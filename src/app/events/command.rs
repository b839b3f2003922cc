use super::super::state::EditorMode;
use crate::core::GraphTemplate;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Interaktion ─────────────────────────────────────────────
    /// Modus der Zustandsmaschine wechseln
    SetEditorMode { mode: EditorMode },
    /// Knoten unter dem Zeiger als Drag-Ziel merken (kann leer bleiben)
    BeginDrag { world_pos: glam::Vec2 },
    /// Drag-Ziel auf die Zeigerposition setzen
    DragTargetTo { world_pos: glam::Vec2 },
    /// Drag-Ziel vergessen
    EndDrag,
    /// Zeigerposition als Basis für Grab-Deltas merken
    RecordPointer { world_pos: glam::Vec2 },

    // ── Selektion ───────────────────────────────────────────────
    /// Selektion des Knotens unter dem Zeiger umschalten
    ToggleSelectionAt { world_pos: glam::Vec2 },
    /// Alle selektierten Knoten verschieben
    MoveSelectedNodes { delta: glam::Vec2 },
    SelectAllNodes,
    ClearSelection,

    // ── Editing ─────────────────────────────────────────────────
    /// Neuen Knoten an Canvas-Position anlegen
    AddNodeAtPosition { world_pos: glam::Vec2 },
    /// Genau zwei selektierte Knoten verbinden
    ConnectSelectedNodes,
    /// Genau zwei selektierte Knoten trennen
    DisconnectSelectedNodes,
    /// Selektierte Knoten samt Kanten löschen
    DeleteSelectedNodes,
    /// Vorlage an das Dokument anhängen
    GenerateTemplate { template: GraphTemplate },

    // ── Datei & Anwendung ───────────────────────────────────────
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Szene-Export-Dialog anfordern
    RequestExportDialog,
    /// Dokument aus Datei laden
    LoadFile { path: String },
    /// Dokument speichern (`None` = aktueller Pfad)
    SaveFile { path: Option<String> },
    /// Render-Szene als JSON schreiben
    ExportScene { path: String },
    /// Leeres Dokument beginnen
    NewDocument,
    /// Optionen speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
