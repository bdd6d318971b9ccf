//! Vectorscope rendering.
//!
//! Every tick redraws the scope from scratch: clear, graticule, then one
//! translucent point per sampled pixel at `(c + U, c - V)` where `c` is
//! the surface center. Nothing carries over between ticks, so the trace
//! always shows the frame on display right now.

use palette::Srgba;

use crate::chroma;
use crate::config::ScopeConfig;
use crate::error::ScopeError;
use crate::sampler::FrameSampler;
use crate::scopes::graticule::draw_graticule;
use crate::surface::ScopeSurface;
use crate::video::VideoSource;

/// What one tick did. Purely informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Whether a frame was captured at all.
    pub sampled: bool,
    /// Points drawn onto the surface.
    pub plotted: u64,
    /// Points that fell outside the surface (over-saturated samples).
    pub dropped: u64,
}

/// Owns the visible surface and the frame sampler.
#[derive(Debug)]
pub struct ScopeRenderer<S> {
    surface: S,
    sampler: FrameSampler,
    point_color: Srgba<u8>,
    sample_stride: usize,
}

impl<S: ScopeSurface> ScopeRenderer<S> {
    /// Take ownership of `surface`, which must match `config.size`.
    pub fn new(surface: S, config: &ScopeConfig) -> Result<Self, ScopeError> {
        config.validate()?;
        if surface.size() != config.size {
            return Err(ScopeError::SurfaceSizeMismatch {
                expected: config.size,
                actual: surface.size(),
            });
        }
        Ok(Self {
            surface,
            sampler: FrameSampler::new(),
            point_color: config.point_srgba(),
            sample_stride: config.sample_stride as usize,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sampler(&self) -> &FrameSampler {
        &self.sampler
    }

    /// Redraw the scope for the frame `source` is showing now.
    ///
    /// With nothing to sample the result is a graticule-only frame.
    pub fn render_tick(
        &mut self,
        source: Option<&dyn VideoSource>,
    ) -> Result<TickStats, ScopeError> {
        let size = self.surface.size();
        self.surface.clear();
        draw_graticule(&mut self.surface, size);

        let Some(frame) = self.sampler.capture(source)? else {
            return Ok(TickStats::default());
        };

        let extent = size as f32;
        let center = extent / 2.0;
        let mut stats = TickStats {
            sampled: true,
            ..TickStats::default()
        };

        for &[r, g, b, _] in frame.pixels().iter().step_by(self.sample_stride) {
            let (u, v) = chroma::convert(r, g, b);
            let x = center + u;
            let y = center - v;
            // Off-surface points are the scope's overflow indicator: drop,
            // never clamp or wrap.
            if x < 0.0 || y < 0.0 || x >= extent || y >= extent {
                stats.dropped += 1;
                continue;
            }
            self.surface.plot(x as u32, y as u32, self.point_color);
            stats.plotted += 1;
        }

        tracing::trace!(
            width = frame.width,
            height = frame.height,
            plotted = stats.plotted,
            dropped = stats.dropped,
            "vectorscope tick"
        );
        Ok(stats)
    }
}
