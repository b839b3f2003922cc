use crate::core::NodeId;
use glam::Vec2;

/// Modus der Interaktions-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Keine laufende Geste
    #[default]
    Idle,
    /// Ein einzelner Knoten folgt dem Zeiger, solange die Maustaste gehalten wird
    Dragging,
    /// Die gesamte Selektion folgt jeder Zeigerbewegung, bis geklickt wird
    Grabbing,
}

impl EditorMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Bereit",
            Self::Dragging => "Ziehen",
            Self::Grabbing => "Greifen",
        }
    }
}

/// Zustand der laufenden Zeiger-Geste.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub mode: EditorMode,
    /// Knoten unter dem Zeiger bei Drag-Beginn (kann `None` sein)
    pub drag_target: Option<NodeId>,
    /// Letzte bekannte Zeigerposition (Basis für Grab-Deltas)
    pub last_pointer: Option<Vec2>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Geste zurück (nach Laden oder neuem Dokument).
    pub fn reset(&mut self) {
        self.mode = EditorMode::Idle;
        self.drag_target = None;
    }
}
