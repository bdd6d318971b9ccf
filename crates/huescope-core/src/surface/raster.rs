//! Software raster backend on top of an `image::RgbaImage`.

use glam::Vec2;
use image::{Pixel, Rgba, RgbaImage};
use palette::Srgba;

use super::ScopeSurface;
use super::glyphs::{GLYPH_ADVANCE, GLYPH_ASCENT, GLYPH_WIDTH, glyph};
use crate::error::ScopeError;

/// Largest surface side accepted by [`RasterSurface::new`].
pub const MAX_SURFACE_SIZE: u32 = 8192;

/// CPU-side scope surface. Pixels are straight-alpha RGBA8.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocate a transparent `size` x `size` surface.
    pub fn new(size: u32) -> Result<Self, ScopeError> {
        if size == 0 {
            return Err(ScopeError::SurfaceUnavailable {
                size,
                reason: "zero-sized surface",
            });
        }
        if size > MAX_SURFACE_SIZE {
            return Err(ScopeError::SurfaceUnavailable {
                size,
                reason: "surface exceeds the maximum side length",
            });
        }
        Ok(Self {
            image: RgbaImage::new(size, size),
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Composite onto `(x, y)` if it lies inside the surface.
    fn blend_at(&mut self, x: i64, y: i64, color: Srgba<u8>) {
        let size = i64::from(self.image.width());
        if x < 0 || y < 0 || x >= size || y >= size {
            return;
        }
        // Straight-alpha source-over.
        let (r, g, b, a) = color.into_components();
        self.image
            .get_pixel_mut(x as u32, y as u32)
            .blend(&Rgba([r, g, b, a]));
    }

    fn fill_block(&mut self, x: i64, y: i64, side: u32, color: Srgba<u8>) {
        for dy in 0..i64::from(side) {
            for dx in 0..i64::from(side) {
                self.blend_at(x + dx, y + dy, color);
            }
        }
    }
}

impl ScopeSurface for RasterSurface {
    fn size(&self) -> u32 {
        self.image.width()
    }

    fn clear(&mut self) {
        self.image.fill(0);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Srgba<u8>) {
        // Every pixel whose center lies within half a pixel of the ring.
        let reach = radius + 1.0;
        let x0 = (center.x - reach).floor() as i64;
        let x1 = (center.x + reach).ceil() as i64;
        let y0 = (center.y - reach).floor() as i64;
        let y1 = (center.y + reach).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if (pixel_center.distance(center) - radius).abs() <= 0.5 {
                    self.blend_at(x, y, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Srgba<u8>) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i64;
        let step = delta / steps as f32;
        let mut last = None;
        for i in 0..=steps {
            let p = from + step * i as f32;
            let pixel = (p.x.floor() as i64, p.y.floor() as i64);
            // Never composite the same pixel twice in one stroke.
            if last != Some(pixel) {
                self.blend_at(pixel.0, pixel.1, color);
                last = Some(pixel);
            }
        }
    }

    fn fill_text(&mut self, text: &str, origin: Vec2, scale: u32, color: Srgba<u8>) {
        let scale = scale.max(1);
        let mut pen_x = origin.x.floor() as i64;
        let top = origin.y.floor() as i64 - i64::from(GLYPH_ASCENT * scale);
        for ch in text.chars() {
            if let Some(rows) = glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        let x = pen_x + i64::from(col * scale);
                        let y = top + row as i64 * i64::from(scale);
                        self.fill_block(x, y, scale, color);
                    }
                }
            }
            pen_x += i64::from(GLYPH_ADVANCE * scale);
        }
    }

    fn plot(&mut self, x: u32, y: u32, color: Srgba<u8>) {
        self.blend_at(i64::from(x), i64::from(y), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Srgba<u8> = Srgba::new(255, 255, 255, 255);
    const HALF_BLUE: Srgba<u8> = Srgba::new(0, 0, 255, 128);

    fn opaque_count(surface: &RasterSurface) -> usize {
        surface.image().pixels().filter(|p| p[3] > 0).count()
    }

    #[test]
    fn test_zero_size_is_unavailable() {
        assert!(matches!(
            RasterSurface::new(0),
            Err(ScopeError::SurfaceUnavailable { size: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_is_unavailable() {
        assert!(RasterSurface::new(MAX_SURFACE_SIZE + 1).is_err());
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = RasterSurface::new(16).unwrap();
        assert_eq!(surface.size(), 16);
        assert_eq!(opaque_count(&surface), 0);
    }

    #[test]
    fn test_plot_then_clear() {
        let mut surface = RasterSurface::new(8).unwrap();
        surface.plot(3, 4, WHITE);
        assert_eq!(surface.image().get_pixel(3, 4).0, [255, 255, 255, 255]);
        surface.clear();
        assert_eq!(opaque_count(&surface), 0);
    }

    #[test]
    fn test_overlapping_translucent_points_brighten() {
        let mut surface = RasterSurface::new(4).unwrap();
        surface.plot(1, 1, HALF_BLUE);
        let once = surface.image().get_pixel(1, 1)[3];
        surface.plot(1, 1, HALF_BLUE);
        let twice = surface.image().get_pixel(1, 1)[3];
        assert_eq!(once, 128);
        assert!(twice > once, "{twice} should exceed {once}");
        assert!(surface.image().get_pixel(1, 1)[2] >= 254);
        assert_eq!(surface.image().get_pixel(1, 1)[0], 0);
    }

    #[test]
    fn test_blend_mixes_over_opaque_background() {
        let mut surface = RasterSurface::new(2).unwrap();
        surface.plot(0, 0, Srgba::new(255, 0, 0, 255));
        surface.plot(0, 0, HALF_BLUE);
        let px = surface.image().get_pixel(0, 0);
        assert!(px[3] >= 254, "alpha {}", px[3]);
        assert!((125..=128).contains(&px[0]), "red {}", px[0]);
        assert!((126..=129).contains(&px[2]), "blue {}", px[2]);
    }

    #[test]
    fn test_transparent_point_leaves_pixel_alone() {
        let mut surface = RasterSurface::new(2).unwrap();
        surface.plot(1, 0, WHITE);
        surface.plot(1, 0, Srgba::new(0, 0, 0, 0));
        assert_eq!(surface.image().get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_horizontal_line_covers_row_once() {
        let mut surface = RasterSurface::new(32).unwrap();
        surface.stroke_line(Vec2::new(0.0, 16.0), Vec2::new(32.0, 16.0), HALF_BLUE);
        for x in 0..32 {
            assert_eq!(surface.image().get_pixel(x, 16)[3], 128, "x = {x}");
        }
        assert_eq!(opaque_count(&surface), 32);
    }

    #[test]
    fn test_circle_pixels_sit_on_ring() {
        let mut surface = RasterSurface::new(64).unwrap();
        let center = Vec2::splat(32.0);
        surface.stroke_circle(center, 16.0, WHITE);
        assert!(opaque_count(&surface) > 64);
        for (x, y, px) in surface.image().enumerate_pixels() {
            if px[3] > 0 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                assert!((d - 16.0).abs() <= 0.5, "({x}, {y}) at distance {d}");
            }
        }
    }

    #[test]
    fn test_text_sits_above_baseline() {
        let mut surface = RasterSurface::new(32).unwrap();
        surface.fill_text("R", Vec2::new(2.0, 20.0), 1, WHITE);
        assert!(opaque_count(&surface) > 0);
        for (_, y, px) in surface.image().enumerate_pixels() {
            if px[3] > 0 {
                assert!((13..20).contains(&y), "R has no descender, got row {y}");
            }
        }
    }

    #[test]
    fn test_text_off_surface_is_clipped() {
        let mut surface = RasterSurface::new(8).unwrap();
        surface.fill_text("Mg", Vec2::new(-3.0, 30.0), 2, WHITE);
        surface.fill_text("Yl", Vec2::new(1.0, 4.0), 1, WHITE);
        assert!(opaque_count(&surface) > 0);
    }
}
