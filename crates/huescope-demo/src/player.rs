//! Simulated video transport.
//!
//! A background thread plays a list of frames at the clip's own frame
//! rate and follows a timed script of transport events. The scope only
//! sees it through [`PlayerView`], re-reading shared state every tick,
//! exactly as it would watch a real decoder it does not control.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use huescope_core::{ScopeError, VideoSource};
use image::RgbaImage;
use parking_lot::Mutex;

/// Transport events the script can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Metadata arrived; natural size becomes known.
    LoadMetadata,
    Play,
    Pause,
    Seek(usize),
    End,
}

/// Events with their offsets from transport start, in order.
#[derive(Debug, Clone, Default)]
pub struct PlaybackScript {
    events: Vec<(Duration, PlaybackEvent)>,
}

impl PlaybackScript {
    pub fn new(mut events: Vec<(Duration, PlaybackEvent)>) -> Self {
        events.sort_by_key(|(at, _)| *at);
        Self { events }
    }

    /// Load, play, pause, resume, seek back to the start, then end.
    pub fn demo(total: Duration) -> Self {
        let at = |fraction: f64| total.mul_f64(fraction);
        Self::new(vec![
            (at(0.05), PlaybackEvent::LoadMetadata),
            (at(0.10), PlaybackEvent::Play),
            (at(0.45), PlaybackEvent::Pause),
            (at(0.60), PlaybackEvent::Play),
            (at(0.70), PlaybackEvent::Seek(0)),
            (at(0.90), PlaybackEvent::End),
        ])
    }
}

/// Transport state shared between the playback thread and the scope.
#[derive(Debug)]
pub struct PlaybackState {
    frames: Vec<RgbaImage>,
    position: usize,
    loaded: bool,
    paused: bool,
    ended: bool,
}

impl PlaybackState {
    fn new(frames: Vec<RgbaImage>) -> Self {
        Self {
            frames,
            position: 0,
            loaded: false,
            paused: true,
            ended: false,
        }
    }

    fn apply(&mut self, event: PlaybackEvent) {
        tracing::info!(?event, position = self.position, "transport");
        match event {
            PlaybackEvent::LoadMetadata => self.loaded = true,
            PlaybackEvent::Play => {
                self.paused = false;
                self.ended = false;
            }
            PlaybackEvent::Pause => self.paused = true,
            PlaybackEvent::Seek(frame) => {
                self.position = frame.min(self.frames.len().saturating_sub(1));
                self.ended = false;
            }
            PlaybackEvent::End => {
                self.ended = true;
                self.paused = true;
            }
        }
    }

    /// Step one frame forward, looping at the end of the clip.
    fn advance(&mut self) {
        if self.loaded && !self.paused && !self.ended && !self.frames.is_empty() {
            self.position = (self.position + 1) % self.frames.len();
        }
    }

    fn current(&self) -> Option<&RgbaImage> {
        if self.loaded {
            self.frames.get(self.position)
        } else {
            None
        }
    }
}

/// Read-only view of the transport handed to the scope each tick.
#[derive(Debug, Clone)]
pub struct PlayerView(Arc<Mutex<PlaybackState>>);

impl VideoSource for PlayerView {
    fn natural_size(&self) -> (u32, u32) {
        self.0
            .lock()
            .current()
            .map_or((0, 0), RgbaImage::dimensions)
    }

    fn is_paused(&self) -> bool {
        self.0.lock().paused
    }

    fn is_ended(&self) -> bool {
        self.0.lock().ended
    }

    fn draw_frame(&self, target: &mut RgbaImage) -> Result<(), ScopeError> {
        let state = self.0.lock();
        let frame = state
            .current()
            .ok_or_else(|| ScopeError::Capture("no frame loaded".into()))?;
        // The transport may have moved to a frame of another size since
        // the scope read the natural size.
        if frame.dimensions() != target.dimensions() {
            return Err(ScopeError::CaptureSizeMismatch {
                expected: target.dimensions(),
                actual: frame.dimensions(),
            });
        }
        target.copy_from_slice(frame.as_raw());
        Ok(())
    }
}

/// Owns the playback thread. Dropping it stops and joins the thread.
pub struct SimulatedPlayer {
    state: Arc<Mutex<PlaybackState>>,
    stop: Arc<AtomicBool>,
    transport: Option<JoinHandle<()>>,
}

impl SimulatedPlayer {
    /// Start the transport thread.
    pub fn spawn(frames: Vec<RgbaImage>, fps: u32, script: PlaybackScript) -> std::io::Result<Self> {
        let state = Arc::new(Mutex::new(PlaybackState::new(frames)));
        let stop = Arc::new(AtomicBool::new(false));
        let frame_interval = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));

        let transport = std::thread::Builder::new()
            .name("huescope-transport".into())
            .spawn({
                let state = Arc::clone(&state);
                let stop = Arc::clone(&stop);
                move || run_transport(&state, &stop, frame_interval, script)
            })?;

        Ok(Self {
            state,
            stop,
            transport: Some(transport),
        })
    }

    pub fn view(&self) -> PlayerView {
        PlayerView(Arc::clone(&self.state))
    }

    /// Stop the transport thread and wait for it.
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.transport.take() {
            if handle.join().is_err() {
                tracing::error!("transport thread panicked");
            }
        }
    }
}

impl Drop for SimulatedPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_transport(
    state: &Mutex<PlaybackState>,
    stop: &AtomicBool,
    frame_interval: Duration,
    script: PlaybackScript,
) {
    let started = Instant::now();
    let mut events = script.events.into_iter().peekable();
    while !stop.load(Ordering::Acquire) {
        let now = started.elapsed();
        {
            let mut state = state.lock();
            while let Some((_, event)) = events.next_if(|(at, _)| *at <= now) {
                state.apply(event);
            }
            state.advance();
        }
        std::thread::sleep(frame_interval);
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn frames(sizes: &[(u32, u32)]) -> Vec<RgbaImage> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| RgbaImage::from_pixel(w, h, Rgba([i as u8, 0, 0, 255])))
            .collect()
    }

    fn view_of(state: PlaybackState) -> PlayerView {
        PlayerView(Arc::new(Mutex::new(state)))
    }

    #[test]
    fn test_unloaded_reports_zero_size() {
        let view = view_of(PlaybackState::new(frames(&[(4, 4)])));
        assert_eq!(view.natural_size(), (0, 0));
        assert!(view.is_paused());
    }

    #[test]
    fn test_script_sequence() {
        let mut state = PlaybackState::new(frames(&[(4, 4), (4, 4), (4, 4)]));
        state.apply(PlaybackEvent::LoadMetadata);
        state.advance();
        assert_eq!(state.position, 0, "paused until play");

        state.apply(PlaybackEvent::Play);
        state.advance();
        state.advance();
        state.advance();
        assert_eq!(state.position, 0, "loops after the last frame");

        state.apply(PlaybackEvent::Seek(9));
        assert_eq!(state.position, 2);

        state.apply(PlaybackEvent::End);
        state.advance();
        assert!(state.ended && state.paused);
        assert_eq!(state.position, 2);
    }

    #[test]
    fn test_view_draws_current_frame() {
        let mut state = PlaybackState::new(frames(&[(2, 2), (3, 1)]));
        state.apply(PlaybackEvent::LoadMetadata);
        state.apply(PlaybackEvent::Seek(1));
        let view = view_of(state);

        assert_eq!(view.natural_size(), (3, 1));
        let mut target = RgbaImage::new(3, 1);
        view.draw_frame(&mut target).unwrap();
        assert!(target.pixels().all(|p| p.0 == [1, 0, 0, 255]));
    }

    #[test]
    fn test_view_rejects_stale_geometry() {
        let mut state = PlaybackState::new(frames(&[(2, 2)]));
        state.apply(PlaybackEvent::LoadMetadata);
        let view = view_of(state);
        let mut target = RgbaImage::new(5, 5);
        assert!(matches!(
            view.draw_frame(&mut target),
            Err(ScopeError::CaptureSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_script_is_sorted() {
        let script = PlaybackScript::new(vec![
            (Duration::from_millis(30), PlaybackEvent::End),
            (Duration::from_millis(10), PlaybackEvent::Play),
        ]);
        assert_eq!(script.events[0].1, PlaybackEvent::Play);
    }

    #[test]
    fn test_player_thread_stops_on_drop() {
        let script = PlaybackScript::new(vec![
            (Duration::ZERO, PlaybackEvent::LoadMetadata),
            (Duration::ZERO, PlaybackEvent::Play),
        ]);
        let player = SimulatedPlayer::spawn(frames(&[(2, 2), (2, 2)]), 200, script).unwrap();
        let view = player.view();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(view.natural_size(), (2, 2));
        assert!(!view.is_paused());
        drop(player);
        // The view outlives the player; state is frozen, not gone.
        assert_eq!(view.natural_size(), (2, 2));
    }
}
