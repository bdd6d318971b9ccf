//! A mounted vectorscope: renderer plus its render loop.

use crate::config::ScopeConfig;
use crate::error::ScopeError;
use crate::render_loop::{FrameHandle, FrameScheduler, LoopState, RenderLoop};
use crate::scopes::vectorscope::{ScopeRenderer, TickStats};
use crate::surface::ScopeSurface;
use crate::video::VideoSource;

/// Vectorscope bound to a surface and a host refresh scheduler.
///
/// The host forwards each refresh callback to [`on_frame`](Self::on_frame)
/// together with whatever video is attached at that moment. Teardown is
/// explicit via [`teardown`](Self::teardown) and implicit on drop.
pub struct VectorscopeComponent<Surf: ScopeSurface, Sched: FrameScheduler> {
    // Declared first so it drops (and cancels) before the surface goes.
    render_loop: RenderLoop<Sched>,
    renderer: ScopeRenderer<Surf>,
    last_stats: TickStats,
}

impl<Surf: ScopeSurface, Sched: FrameScheduler> VectorscopeComponent<Surf, Sched> {
    /// Bind to a ready surface and arm the loop.
    ///
    /// Fails if the surface does not fit the config; nothing is scheduled
    /// in that case.
    pub fn activate(
        surface: Surf,
        scheduler: Sched,
        config: &ScopeConfig,
    ) -> Result<Self, ScopeError> {
        let renderer = ScopeRenderer::new(surface, config)?;
        let mut render_loop = RenderLoop::new(scheduler);
        let handle = render_loop.start();
        tracing::info!(
            size = config.size,
            stride = config.sample_stride,
            %handle,
            "vectorscope activated"
        );
        Ok(Self {
            render_loop,
            renderer,
            last_stats: TickStats::default(),
        })
    }

    /// Handle one refresh callback. Returns whether a tick ran.
    pub fn on_frame(&mut self, handle: FrameHandle, source: Option<&dyn VideoSource>) -> bool {
        let renderer = &mut self.renderer;
        let last_stats = &mut self.last_stats;
        self.render_loop.fire(handle, || {
            *last_stats = renderer.render_tick(source)?;
            Ok(())
        })
    }

    /// Stop rendering and cancel the outstanding callback. Idempotent.
    pub fn teardown(&mut self) {
        if self.render_loop.is_armed() {
            self.render_loop.stop();
            tracing::info!(ticks = self.render_loop.ticks(), "vectorscope torn down");
        }
    }

    pub fn state(&self) -> LoopState {
        self.render_loop.state()
    }

    pub fn ticks(&self) -> u64 {
        self.render_loop.ticks()
    }

    /// Statistics of the most recent successful tick.
    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    pub fn surface(&self) -> &Surf {
        self.renderer.surface()
    }

    pub fn renderer(&self) -> &ScopeRenderer<Surf> {
        &self.renderer
    }

    pub fn scheduler(&self) -> &Sched {
        self.render_loop.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut Sched {
        self.render_loop.scheduler_mut()
    }
}
