//! Vectorscope drawing: the graticule overlay and the per-tick renderer.

pub mod graticule;
pub mod vectorscope;

pub use graticule::draw_graticule;
pub use vectorscope::{ScopeRenderer, TickStats};
