//! Frame capture into an off-surface buffer.

use image::RgbaImage;

use crate::error::ScopeError;
use crate::video::VideoSource;

/// Owns the capture buffer and fills it from the video source.
///
/// The buffer always has the natural dimensions the source reported at
/// the most recent capture. A size change replaces the buffer outright,
/// so swapping sources back and forth never grows memory.
#[derive(Debug)]
pub struct FrameSampler {
    buffer: RgbaImage,
}

/// Read-only view of one captured frame.
#[derive(Debug, Clone, Copy)]
pub struct CapturedFrame<'a> {
    pub width: u32,
    pub height: u32,
    /// Dense row-major RGBA8, `width * height * 4` bytes.
    pub data: &'a [u8],
}

impl CapturedFrame<'_> {
    /// The frame as `[r, g, b, a]` pixels.
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(self.data)
    }
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSampler {
    pub fn new() -> Self {
        Self {
            buffer: RgbaImage::new(0, 0),
        }
    }

    /// Current capture buffer dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Capture the frame currently shown by `source`.
    ///
    /// Returns `Ok(None)` when there is nothing to sample: no source, a
    /// paused or ended source, or one that has not reported its geometry
    /// yet. Errors only come from the source failing to draw.
    pub fn capture(
        &mut self,
        source: Option<&dyn VideoSource>,
    ) -> Result<Option<CapturedFrame<'_>>, ScopeError> {
        let Some(source) = source else {
            return Ok(None);
        };
        if source.is_paused() || source.is_ended() {
            return Ok(None);
        }

        let (width, height) = source.natural_size();
        if width == 0 || height == 0 {
            return Ok(None);
        }

        if self.buffer.dimensions() != (width, height) {
            tracing::debug!(
                from = ?self.buffer.dimensions(),
                to = ?(width, height),
                "reallocating capture buffer"
            );
            self.buffer = RgbaImage::new(width, height);
        }

        source.draw_frame(&mut self.buffer)?;

        // A source that swapped the buffer for one of another size broke
        // its contract; keep the invariant by restoring the right shape.
        if self.buffer.dimensions() != (width, height) {
            let actual = self.buffer.dimensions();
            self.buffer = RgbaImage::new(width, height);
            return Err(ScopeError::CaptureSizeMismatch {
                expected: (width, height),
                actual,
            });
        }

        Ok(Some(CapturedFrame {
            width,
            height,
            data: self.buffer.as_raw(),
        }))
    }
}
