//! Drawing surfaces the scope renders onto.
//!
//! The scope only needs a handful of primitives, so any backend (a
//! software raster, a GPU texture, a browser canvas) can stand in by
//! implementing [`ScopeSurface`].

mod glyphs;
pub mod raster;
pub mod recording;

pub use raster::RasterSurface;
pub use recording::{DisplayList, DrawCommand};

use glam::Vec2;
use palette::Srgba;

/// A square drawing target, `size` pixels on each side, with the origin
/// at the top-left corner and y growing downward.
///
/// Colours are straight-alpha sRGB. Every drawing call composites
/// source-over onto what is already there; nothing is ever read back by
/// the scope.
pub trait ScopeSurface {
    /// Side length in pixels.
    fn size(&self) -> u32;

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// One pixel wide circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Srgba<u8>);

    /// One pixel wide straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Srgba<u8>);

    /// Short label whose left edge starts at `origin.x` and whose
    /// baseline sits on `origin.y`. `scale` multiplies the glyph cell.
    fn fill_text(&mut self, text: &str, origin: Vec2, scale: u32, color: Srgba<u8>);

    /// Composite a single pixel. Callers guarantee `x, y < size`.
    fn plot(&mut self, x: u32, y: u32, color: Srgba<u8>);
}
