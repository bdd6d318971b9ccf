//! Frame loading and synthetic test patterns.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// 75% amplitude bars, left to right: white, yellow, cyan, green,
/// magenta, red, blue.
const BARS_75: [[u8; 3]; 7] = [
    [191, 191, 191],
    [191, 191, 0],
    [0, 191, 191],
    [0, 191, 0],
    [191, 0, 191],
    [191, 0, 0],
    [0, 0, 191],
];

/// Load still images from disk as RGBA8 frames.
///
/// Frames may have different sizes; the scope reallocates its capture
/// buffer whenever the size changes.
pub fn load_frames(paths: &[PathBuf]) -> Result<Vec<RgbaImage>, FrameLoadError> {
    if paths.is_empty() {
        return Err(FrameLoadError::Empty);
    }
    paths.iter().map(|path| load_frame(path)).collect()
}

fn load_frame(path: &Path) -> Result<RgbaImage, FrameLoadError> {
    let img = image::open(path).map_err(|source| FrameLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded frame"
    );
    Ok(img.to_rgba8())
}

/// A clip of colour bars whose saturation ramps from 25% to 100% of
/// the 75% bar amplitude and back, so the trace pulses across the rings.
pub fn color_bar_clip(width: u32, height: u32, frames: u32) -> Vec<RgbaImage> {
    let frames = frames.max(2);
    (0..frames)
        .map(|i| {
            let phase = i as f32 / (frames - 1) as f32;
            let ramp = 1.0 - (2.0 * phase - 1.0).abs();
            color_bars(width, height, 0.25 + 0.75 * ramp)
        })
        .collect()
}

/// One frame of bars, each bar mixed toward its own grey by
/// `1 - saturation`.
pub fn color_bars(width: u32, height: u32, saturation: f32) -> RgbaImage {
    let saturation = saturation.clamp(0.0, 1.0);
    let band_width = (width / BARS_75.len() as u32).max(1);
    RgbaImage::from_fn(width, height, |x, _| {
        let band = ((x / band_width) as usize).min(BARS_75.len() - 1);
        let [r, g, b] = BARS_75[band];
        let gray = (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0;
        let mix = |c: u8| (gray + (f32::from(c) - gray) * saturation).round() as u8;
        Rgba([mix(r), mix(g), mix(b), 255])
    })
}

/// Errors that can occur while loading frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameLoadError {
    #[error("failed to decode frame {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("no frame paths given")]
    Empty,
}
