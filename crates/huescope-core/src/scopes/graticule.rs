//! Vectorscope graticule: target rings, crosshair, and hue labels.

use glam::Vec2;
use palette::Srgba;

use crate::config::REFERENCE_SIZE;
use crate::surface::ScopeSurface;

/// Ring radii as fractions of the half-size.
const RING_FRACTIONS: [f32; 3] = [0.25, 0.5, 0.75];
/// Ring and crosshair colour (white, 0.2 alpha).
const LINE_COLOR: Srgba<u8> = Srgba::new(255, 255, 255, 51);
/// Label colour (white, 0.5 alpha).
const LABEL_COLOR: Srgba<u8> = Srgba::new(255, 255, 255, 128);

/// Hue target labels and their baseline-left positions on a 256 px scope.
pub const TARGET_LABELS: [(&str, [f32; 2]); 6] = [
    ("R", [135.0, 30.0]),
    ("Mg", [215.0, 75.0]),
    ("B", [225.0, 175.0]),
    ("Cy", [115.0, 230.0]),
    ("G", [20.0, 175.0]),
    ("Yl", [25.0, 75.0]),
];

/// Draw the graticule over whatever is already on `surface`.
///
/// Idempotent in shape but not in pixels: drawing twice without a
/// clear doubles the overlay's opacity.
pub fn draw_graticule<S: ScopeSurface + ?Sized>(surface: &mut S, size: u32) {
    let extent = size as f32;
    let half = extent / 2.0;
    let center = Vec2::splat(half);

    for fraction in RING_FRACTIONS {
        surface.stroke_circle(center, half * fraction, LINE_COLOR);
    }

    surface.stroke_line(Vec2::new(0.0, half), Vec2::new(extent, half), LINE_COLOR);
    surface.stroke_line(Vec2::new(half, 0.0), Vec2::new(half, extent), LINE_COLOR);

    let ratio = extent / REFERENCE_SIZE as f32;
    let glyph_scale = (ratio.round() as u32).max(1);
    for (text, [x, y]) in TARGET_LABELS {
        surface.fill_text(text, Vec2::new(x, y) * ratio, glyph_scale, LABEL_COLOR);
    }
}
