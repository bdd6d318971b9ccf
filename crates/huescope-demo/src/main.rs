//! Huescope Demo — headless vectorscope over a simulated playing video.
//!
//! Plays still frames (or synthetic colour bars) through a scripted
//! transport thread, drives the scope from a fixed-rate refresh
//! scheduler, and writes the last sampled scope image to disk.
//!
//! ```text
//! HUESCOPE_DURATION_MS=3000 huescope-demo frame1.png frame2.png
//! ```

mod config;
mod frames;
mod player;
mod scheduler;

use std::process::ExitCode;
use std::time::Instant;

use huescope_core::{RasterSurface, ScopeConfig, ScopeError, VectorscopeComponent};
use image::RgbaImage;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use frames::FrameLoadError;
use player::{PlaybackScript, SimulatedPlayer};
use scheduler::RefreshScheduler;

/// Size of the synthetic clip used when no frames are given.
const SYNTHETIC_SIZE: (u32, u32) = (640, 360);
const SYNTHETIC_FRAMES: u32 = 48;
/// Log a stats line every this many ticks.
const STATS_EVERY: u64 = 60;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(AppConfig::from_env_and_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> Result<(), DemoError> {
    let scope_config = match &config.scope_config {
        Some(path) => ScopeConfig::load(path)?,
        None => ScopeConfig::default(),
    };

    let clip = if config.frame_paths.is_empty() {
        let (width, height) = SYNTHETIC_SIZE;
        tracing::info!("no frames given, playing synthetic colour bars");
        frames::color_bar_clip(width, height, SYNTHETIC_FRAMES)
    } else {
        frames::load_frames(&config.frame_paths)?
    };
    tracing::info!(frames = clip.len(), fps = config.video_fps, "clip ready");

    let mut player = SimulatedPlayer::spawn(
        clip,
        config.video_fps,
        PlaybackScript::demo(config.duration),
    )
    .map_err(DemoError::Transport)?;
    let video = player.view();

    let surface = RasterSurface::new(scope_config.size)?;
    let mut scope = VectorscopeComponent::activate(
        surface,
        RefreshScheduler::new(config.refresh_hz),
        &scope_config,
    )?;

    let started = Instant::now();
    let mut snapshot: Option<RgbaImage> = None;
    let mut sampled_ticks = 0u64;
    while started.elapsed() < config.duration {
        let Some(handle) = scope.scheduler_mut().wait_for_frame() else {
            break;
        };
        if !scope.on_frame(handle, Some(&video)) {
            // Stale callback: nothing new was requested, so the next wait returns None.
            continue;
        }

        let stats = scope.last_stats();
        if stats.sampled {
            sampled_ticks += 1;
            snapshot = Some(scope.surface().image().clone());
        }
        if scope.ticks() % STATS_EVERY == 0 {
            tracing::info!(
                ticks = scope.ticks(),
                sampled_ticks,
                plotted = stats.plotted,
                dropped = stats.dropped,
                "scope running"
            );
        }
    }

    scope.teardown();
    player.shutdown();

    let image = snapshot.unwrap_or_else(|| scope.surface().image().clone());
    image.save(&config.output)?;
    tracing::info!(
        path = %config.output.display(),
        ticks = scope.ticks(),
        sampled_ticks,
        "wrote scope image"
    );
    Ok(())
}

/// Top-level demo failures.
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error(transparent)]
    Frames(#[from] FrameLoadError),
    #[error("failed to start transport thread: {0}")]
    Transport(std::io::Error),
    #[error("failed to write scope image: {0}")]
    Save(#[from] image::ImageError),
}
