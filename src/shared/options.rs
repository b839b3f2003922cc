//! Zentrale Konfiguration für den GraphTool-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TemplateLayout;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Knoten ──────────────────────────────────────────────────────────

/// Zeichen-Radius eines Knotens in Canvas-Pixeln.
pub const NODE_RADIUS: f32 = 15.0;
/// Farbe normaler Knoten (RGBA: Weiß).
pub const NODE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe selektierter Knoten (RGBA: Rot).
pub const NODE_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Selektion ───────────────────────────────────────────────────────

/// Halbe Kantenlänge des Pick-Quadrats um den Knotenmittelpunkt.
pub const PICK_RADIUS: f32 = 15.0;
/// Größenfaktor des Halos um selektierte Knoten.
pub const SELECTION_HALO_FACTOR: f32 = 1.5;

// ── Kanten ──────────────────────────────────────────────────────────

/// Abstand paralleler Kurven (siehe `core::control_point_with_spacing`).
pub const CURVE_SPACING: f32 = crate::core::CURVE_SPACING;
/// Linienstärke der Kanten in Canvas-Pixeln.
pub const EDGE_THICKNESS: f32 = 3.0;
/// Kantenfarbe (RGBA: Türkis).
pub const EDGE_COLOR: [f32; 4] = [0.25, 0.88, 0.82, 1.0];

// ── Canvas ──────────────────────────────────────────────────────────

/// Hintergrundfarbe (RGBA: Grau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

// ── Vorlagen ────────────────────────────────────────────────────────

/// Mittelpunkt neu erzeugter Vorlagen.
pub const TEMPLATE_CENTER: [f32; 2] = [400.0, 300.0];
/// Kreisradius bzw. Raster-Abstand neu erzeugter Vorlagen.
pub const TEMPLATE_RADIUS: f32 = 100.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_tool_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Knoten ──────────────────────────────────────────────────
    /// Zeichen-Radius eines Knotens
    pub node_radius: f32,
    /// Farbe normaler Knoten
    pub node_color: [f32; 4],
    /// Farbe selektierter Knoten
    pub node_color_selected: [f32; 4],

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius (halbe Kantenlänge des Pick-Quadrats)
    pub pick_radius: f32,
    /// Halo-Faktor für selektierte Knoten
    pub selection_halo_factor: f32,

    // ── Kanten ──────────────────────────────────────────────────
    pub curve_spacing: f32,
    pub edge_thickness: f32,
    pub edge_color: [f32; 4],

    // ── Canvas ──────────────────────────────────────────────────
    pub background_color: [f32; 4],

    // ── Vorlagen ────────────────────────────────────────────────
    /// Mittelpunkt neu erzeugter Vorlagen
    pub template_center: [f32; 2],
    /// Kreisradius bzw. Raster-Abstand
    pub template_radius: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            node_radius: NODE_RADIUS,
            node_color: NODE_COLOR,
            node_color_selected: NODE_COLOR_SELECTED,

            pick_radius: PICK_RADIUS,
            selection_halo_factor: SELECTION_HALO_FACTOR,

            curve_spacing: CURVE_SPACING,
            edge_thickness: EDGE_THICKNESS,
            edge_color: EDGE_COLOR,

            background_color: BACKGROUND_COLOR,

            template_center: TEMPLATE_CENTER,
            template_radius: TEMPLATE_RADIUS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei (atomar).
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        crate::xml::write_atomically(path, content.as_bytes())?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_tool_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_tool_editor.toml")
    }

    /// Platzierung für neu erzeugte Graph-Vorlagen.
    pub fn template_layout(&self) -> TemplateLayout {
        TemplateLayout {
            center: Vec2::from_array(self.template_center),
            radius: self.template_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions =
            toml::from_str("pick_radius = 20.0\n").expect("TOML sollte parsebar sein");

        assert_eq!(opts.pick_radius, 20.0);
        assert_eq!(opts.node_radius, NODE_RADIUS);
        assert_eq!(opts.curve_spacing, CURVE_SPACING);
    }

    #[test]
    fn options_round_trip_through_file() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis erwartet");
        let path = dir.path().join("graph_tool_editor.toml");
        let opts = EditorOptions {
            edge_thickness: 5.0,
            template_center: [10.0, 20.0],
            ..EditorOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern sollte gelingen");
        let loaded = EditorOptions::load_from_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn broken_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis erwartet");
        let path = dir.path().join("kaputt.toml");
        std::fs::write(&path, "pick_radius = [").expect("Schreiben erwartet");

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn template_layout_uses_configured_center() {
        let layout = EditorOptions::default().template_layout();
        assert_eq!(layout.center, Vec2::new(400.0, 300.0));
        assert_eq!(layout.radius, 100.0);
    }
}
