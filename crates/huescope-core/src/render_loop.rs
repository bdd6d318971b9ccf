//! Per-refresh render loop.
//!
//! The host owns the display clock and exposes it through
//! [`FrameScheduler`]: ask for a callback before the next refresh, get a
//! handle back, cancel it if needed. [`RenderLoop`] keeps at most one
//! such request outstanding and re-arms after every tick, so it keeps
//! polling an idle or absent video until teardown.
//!
//! ```text
//!   Stopped ──start──→ Armed(h) ──fire(h)──→ Armed(h') ──→ tick
//!      ↑                  │
//!      └──────stop────────┘   (stop on Stopped is a no-op)
//! ```

use std::fmt;

use crate::error::ScopeError;

/// Opaque identifier of one scheduled refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// The host's "run once before the next refresh" primitive.
pub trait FrameScheduler {
    /// Schedule one callback for the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a callback. Must tolerate handles that already fired.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Armed(FrameHandle),
}

/// Scheduling state machine driving the scope once per refresh.
///
/// Dropping the loop stops it, so an outstanding callback is cancelled
/// on every exit path.
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    ticks: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    /// A stopped loop. Nothing is scheduled until [`start`](Self::start).
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Stopped,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, LoopState::Armed(_))
    }

    /// Ticks executed since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Arm the loop. On an armed loop this returns the outstanding handle
    /// without scheduling another.
    pub fn start(&mut self) -> FrameHandle {
        match self.state {
            LoopState::Armed(handle) => handle,
            LoopState::Stopped => {
                let handle = self.scheduler.request_frame();
                tracing::debug!(%handle, "render loop armed");
                self.state = LoopState::Armed(handle);
                handle
            }
        }
    }

    /// Entry point for a scheduled callback.
    ///
    /// Runs `tick` only if `handle` is the outstanding callback; stale
    /// handles (cancelled, superseded, or arriving after stop) return
    /// `false` untouched. The next callback is requested before `tick`
    /// runs, so the loop stays armed even if the tick fails or unwinds.
    pub fn fire<F>(&mut self, handle: FrameHandle, tick: F) -> bool
    where
        F: FnOnce() -> Result<(), ScopeError>,
    {
        if self.state != LoopState::Armed(handle) {
            tracing::trace!(%handle, state = ?self.state, "ignoring stale frame callback");
            return false;
        }

        let next = self.scheduler.request_frame();
        self.state = LoopState::Armed(next);
        self.ticks += 1;
        if let Err(err) = tick() {
            tracing::warn!(%handle, error = %err, "vectorscope tick failed");
        }
        true
    }

    /// Cancel any outstanding callback and stop. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let LoopState::Armed(handle) = self.state {
            self.scheduler.cancel_frame(handle);
            self.state = LoopState::Stopped;
            tracing::debug!(%handle, ticks = self.ticks, "render loop stopped");
        }
    }
}

impl<S: FrameScheduler> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: FrameScheduler + fmt::Debug> fmt::Debug for RenderLoop<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderLoop")
            .field("scheduler", &self.scheduler)
            .field("state", &self.state)
            .field("ticks", &self.ticks)
            .finish()
    }
}
