//! Kurven-Geometrie für parallele Kanten.
//!
//! Mehrere Kanten zwischen demselben Knotenpaar werden als quadratische
//! Bézier-Kurven gezeichnet, deren Kontrollpunkt abwechselnd auf beiden
//! Seiten der Verbindungslinie liegt.

use glam::Vec2;

/// Standard-Abstand (Canvas-Einheiten) zwischen zwei benachbarten Kurven.
pub const CURVE_SPACING: f32 = 30.0;

/// Signierter Versatz der `curve_index`-ten Kurve senkrecht zur Verbindungslinie.
///
/// Folge für `spacing = 30`: `0, -30, +30, -60, +60, …`
/// Index 0 ist die gerade Kante; die ersten gebogenen Kurven 1 und 2 liegen
/// auf gegenüberliegenden Seiten.
pub fn curve_offset(curve_index: usize, spacing: f32) -> f32 {
    let magnitude = spacing * ((curve_index + 1) / 2) as f32;
    if curve_index % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Kontrollpunkt mit dem Standard-Kurvenabstand.
pub fn control_point(start: Vec2, end: Vec2, curve_index: usize) -> Vec2 {
    control_point_with_spacing(start, end, curve_index, CURVE_SPACING)
}

/// Berechnet den Kontrollpunkt einer quadratischen Kurve von `start` nach `end`.
///
/// Der Punkt liegt auf der Mittelsenkrechten der Strecke, im Abstand
/// `|curve_offset(curve_index)|` vom Mittelpunkt. Die Seite hängt vom
/// Vorzeichen des Versatzes und von der Richtung `start → end` ab.
///
/// Sonderfälle:
/// - gleiche y-Koordinate (waagrechte Strecke, auch deckungsgleiche
///   Endpunkte): Versatz rein vertikal, `(mid.x, mid.y + offset)`
/// - gleiche x-Koordinate (senkrechte Strecke): Versatz rein horizontal
pub fn control_point_with_spacing(
    start: Vec2,
    end: Vec2,
    curve_index: usize,
    spacing: f32,
) -> Vec2 {
    let mid = (start + end) * 0.5;
    let offset = curve_offset(curve_index, spacing);
    if offset == 0.0 {
        return mid;
    }

    let dy = start.y - end.y;
    if dy == 0.0 {
        return Vec2::new(mid.x, mid.y + offset);
    }

    // Steigung der Mittelsenkrechten; Länge des Versatzvektors bleibt |offset|
    let ortho_slope = (end.x - start.x) / dy;
    let w = offset / (1.0 + ortho_slope * ortho_slope).sqrt();
    Vec2::new(mid.x + w, mid.y + ortho_slope * w)
}
