//! Runtime configuration for the demo, read from the environment.

use std::path::PathBuf;
use std::time::Duration;

/// Default scope refresh rate (display refresh).
const DEFAULT_REFRESH_HZ: u32 = 60;
/// Default simulated video frame rate.
const DEFAULT_VIDEO_FPS: u32 = 24;
/// Default run length.
const DEFAULT_DURATION_MS: u64 = 4000;
/// Default output path for the final scope image.
const DEFAULT_OUTPUT: &str = "vectorscope.png";

/// Demo settings. Frame paths come from the command line, everything
/// else from `HUESCOPE_*` variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Scope refresh rate in Hz.
    pub refresh_hz: u32,
    /// Frame rate of the simulated video transport.
    pub video_fps: u32,
    /// How long to run before tearing down.
    pub duration: Duration,
    /// Where to write the last sampled scope image.
    pub output: PathBuf,
    /// Optional JSON `ScopeConfig` file.
    pub scope_config: Option<PathBuf>,
    /// Still images played back as the video's frames, in order.
    pub frame_paths: Vec<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_hz: env_or("HUESCOPE_REFRESH_HZ", DEFAULT_REFRESH_HZ).max(1),
            video_fps: env_or("HUESCOPE_VIDEO_FPS", DEFAULT_VIDEO_FPS).max(1),
            duration: Duration::from_millis(env_or("HUESCOPE_DURATION_MS", DEFAULT_DURATION_MS)),
            output: std::env::var_os("HUESCOPE_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            scope_config: std::env::var_os("HUESCOPE_CONFIG").map(PathBuf::from),
            frame_paths: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Environment settings plus positional frame paths.
    pub fn from_env_and_args() -> Self {
        Self {
            frame_paths: std::env::args_os().skip(1).map(PathBuf::from).collect(),
            ..Self::default()
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
