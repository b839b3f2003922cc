//! Fehlertypen des Persistenz-Adapters.

use std::fmt::Display;

/// Schema-Version, die dieser Editor schreibt und liest.
pub const SCHEMA_VERSION: &str = "1";

/// Fehler beim Lesen oder Schreiben einer Graph-Datei.
#[derive(Debug, thiserror::Error)]
pub enum GraphFileError {
    /// Dateisystem-Fehler (Lesen, Temp-Datei, atomares Ersetzen)
    #[error("Dateizugriff fehlgeschlagen: {0}")]
    Io(#[from] std::io::Error),
    /// Inhalt ist kein gültiges Graph-Dokument
    #[error("Ungültige Graph-Datei: {reason}")]
    Malformed { reason: String },
    /// Schema-Tag fehlt oder wird nicht unterstützt
    #[error("Nicht unterstützte Schema-Version: {}", found.as_deref().unwrap_or("<fehlt>"))]
    UnsupportedSchema { found: Option<String> },
}

impl GraphFileError {
    pub(crate) fn malformed(reason: impl Display) -> Self {
        Self::Malformed {
            reason: reason.to_string(),
        }
    }

    /// `true` für Fehler im Dateiinhalt (im Gegensatz zu I/O-Fehlern).
    pub fn is_deserialization(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
