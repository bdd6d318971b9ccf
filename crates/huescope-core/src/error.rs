//! Error type shared by every stage of the scope pipeline.

/// Errors raised while building or running a vectorscope.
///
/// An absent, paused, ended or not-yet-loaded video source is not an
/// error: the sampler reports it as "nothing to capture".
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("scope surface unavailable (size {size}): {reason}")]
    SurfaceUnavailable { size: u32, reason: &'static str },
    #[error("surface is {actual}x{actual} but the scope is configured for {expected}x{expected}")]
    SurfaceSizeMismatch { expected: u32, actual: u32 },
    #[error("invalid scope config: {0}")]
    InvalidConfig(String),
    #[error("frame capture failed: {0}")]
    Capture(String),
    #[error("source reported {expected:?} but drew a {actual:?} frame")]
    CaptureSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
