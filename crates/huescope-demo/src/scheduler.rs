//! Fixed-rate stand-in for a display's refresh callback queue.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use huescope_core::{FrameHandle, FrameScheduler};

/// Delivers requested callbacks one per refresh interval.
#[derive(Debug)]
pub struct RefreshScheduler {
    interval: Duration,
    next_refresh: Instant,
    next_id: u64,
    pending: VecDeque<FrameHandle>,
}

impl RefreshScheduler {
    pub fn new(refresh_hz: u32) -> Self {
        let interval = Duration::from_secs_f64(1.0 / f64::from(refresh_hz.max(1)));
        Self {
            interval,
            next_refresh: Instant::now() + interval,
            next_id: 0,
            pending: VecDeque::new(),
        }
    }

    /// Block until the next refresh and return the callback due on it.
    ///
    /// Returns `None` without waiting when nothing is scheduled.
    pub fn wait_for_frame(&mut self) -> Option<FrameHandle> {
        let handle = self.pending.pop_front()?;
        let now = Instant::now();
        if self.next_refresh > now {
            std::thread::sleep(self.next_refresh - now);
            self.next_refresh += self.interval;
        } else {
            // A long tick overran one or more refreshes; skip them rather
            // than firing a burst to catch up.
            tracing::trace!(late = ?(now - self.next_refresh), "refresh overrun");
            self.next_refresh = now + self.interval;
        }
        Some(handle)
    }
}

impl FrameScheduler for RefreshScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
