//! The video source the scope observes.

use image::RgbaImage;

use crate::error::ScopeError;

/// A live, externally owned video the scope samples once per tick.
///
/// Everything here is re-read on every tick and never cached: the
/// transport may pause, seek, end or swap its media between any two
/// refreshes. The scope only ever reads from a source.
pub trait VideoSource {
    /// Natural frame dimensions as `(width, height)`. Either may be zero
    /// until enough of the media has loaded to know its geometry.
    fn natural_size(&self) -> (u32, u32);

    fn is_paused(&self) -> bool;

    fn is_ended(&self) -> bool;

    /// Draw the frame currently on display into `target`, unscaled.
    ///
    /// `target` is already sized to [`natural_size`](Self::natural_size)
    /// and every pixel must be overwritten.
    fn draw_frame(&self, target: &mut RgbaImage) -> Result<(), ScopeError>;
}

/// An in-memory source showing a single still frame.
#[derive(Debug, Clone)]
pub struct ImageSource {
    frame: RgbaImage,
    paused: bool,
    ended: bool,
}

impl ImageSource {
    /// A playing source showing `frame`.
    pub fn new(frame: RgbaImage) -> Self {
        Self {
            frame,
            paused: false,
            ended: false,
        }
    }

    /// Swap the displayed frame. Dimensions may change.
    pub fn set_frame(&mut self, frame: RgbaImage) {
        self.frame = frame;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_ended(&mut self, ended: bool) {
        self.ended = ended;
    }
}

impl VideoSource for ImageSource {
    fn natural_size(&self) -> (u32, u32) {
        self.frame.dimensions()
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_ended(&self) -> bool {
        self.ended
    }

    fn draw_frame(&self, target: &mut RgbaImage) -> Result<(), ScopeError> {
        if target.dimensions() != self.frame.dimensions() {
            return Err(ScopeError::CaptureSizeMismatch {
                expected: target.dimensions(),
                actual: self.frame.dimensions(),
            });
        }
        target.copy_from_slice(self.frame.as_raw());
        Ok(())
    }
}
