//! Recording surface that keeps draw calls instead of pixels.
//!
//! Useful for backends that cannot be driven pixel-by-pixel from the
//! scope thread: record one tick, then [`DisplayList::replay`] it onto
//! the real target.

use glam::Vec2;
use palette::Srgba;

use super::ScopeSurface;
use crate::error::ScopeError;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Srgba<u8>,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Srgba<u8>,
    },
    FillText {
        text: String,
        origin: Vec2,
        scale: u32,
        color: Srgba<u8>,
    },
    Plot {
        x: u32,
        y: u32,
        color: Srgba<u8>,
    },
}

/// Draw calls since the most recent clear.
#[derive(Debug, Clone)]
pub struct DisplayList {
    size: u32,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: u32) -> Result<Self, ScopeError> {
        if size == 0 {
            return Err(ScopeError::SurfaceUnavailable {
                size,
                reason: "zero-sized surface",
            });
        }
        Ok(Self {
            size,
            commands: Vec::new(),
        })
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Issue every recorded command, in order, against `target`.
    pub fn replay<S: ScopeSurface>(&self, target: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => target.clear(),
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    color,
                } => target.stroke_circle(*center, *radius, *color),
                DrawCommand::StrokeLine { from, to, color } => {
                    target.stroke_line(*from, *to, *color)
                }
                DrawCommand::FillText {
                    text,
                    origin,
                    scale,
                    color,
                } => target.fill_text(text, *origin, *scale, *color),
                DrawCommand::Plot { x, y, color } => target.plot(*x, *y, *color),
            }
        }
    }
}

impl ScopeSurface for DisplayList {
    fn size(&self) -> u32 {
        self.size
    }

    fn clear(&mut self) {
        // Anything drawn before is gone from the surface, so drop it.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Srgba<u8>) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Srgba<u8>) {
        self.commands.push(DrawCommand::StrokeLine { from, to, color });
    }

    fn fill_text(&mut self, text: &str, origin: Vec2, scale: u32, color: Srgba<u8>) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            origin,
            scale,
            color,
        });
    }

    fn plot(&mut self, x: u32, y: u32, color: Srgba<u8>) {
        self.commands.push(DrawCommand::Plot { x, y, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RasterSurface;

    const RED: Srgba<u8> = Srgba::new(255, 0, 0, 255);

    #[test]
    fn test_clear_discards_history() {
        let mut list = DisplayList::new(16).unwrap();
        list.plot(1, 1, RED);
        list.plot(2, 2, RED);
        list.clear();
        assert_eq!(list.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_replay_matches_direct_drawing() {
        let mut list = DisplayList::new(32).unwrap();
        let mut direct = RasterSurface::new(32).unwrap();
        for surface in [&mut list as &mut dyn ScopeSurface, &mut direct] {
            surface.clear();
            surface.stroke_circle(Vec2::splat(16.0), 8.0, RED);
            surface.stroke_line(Vec2::ZERO, Vec2::splat(32.0), RED);
            surface.fill_text("Cy", Vec2::new(4.0, 12.0), 1, RED);
            surface.plot(5, 6, RED);
        }

        let mut replayed = RasterSurface::new(32).unwrap();
        replayed.plot(0, 31, RED);
        list.replay(&mut replayed);
        assert_eq!(replayed.image(), direct.image());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(DisplayList::new(0).is_err());
    }
}
