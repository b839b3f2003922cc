//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{CURVE_SPACING, PICK_RADIUS};
pub use render_scene::{EdgeRenderRecord, NodeRenderRecord, RenderScene, RenderStyle};
