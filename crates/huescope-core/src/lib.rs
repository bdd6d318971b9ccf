//! Huescope Core — real-time vectorscope engine.
//!
//! Samples the frame a video source is showing, projects every pixel
//! onto the U/V chrominance plane, and plots the distribution over a
//! calibrated graticule once per display refresh. No windowing, GPU or
//! async runtime dependencies: hosts plug in through [`VideoSource`],
//! [`ScopeSurface`] and [`FrameScheduler`].

pub mod chroma;
pub mod component;
pub mod config;
pub mod error;
pub mod render_loop;
pub mod sampler;
pub mod scopes;
pub mod surface;
pub mod video;

// Re-exports for convenience.
pub use component::VectorscopeComponent;
pub use config::ScopeConfig;
pub use error::ScopeError;
pub use render_loop::{FrameHandle, FrameScheduler, LoopState, RenderLoop};
pub use sampler::{CapturedFrame, FrameSampler};
pub use scopes::{ScopeRenderer, TickStats};
pub use surface::{DisplayList, RasterSurface, ScopeSurface};
pub use video::{ImageSource, VideoSource};
