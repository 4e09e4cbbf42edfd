//! GPU rendering subsystem.
//!
//! The teapot renderer owns its GPU resources (buffers, textures, pipeline)
//! and its interactive orbit/zoom state. It issues commands through wgpu via
//! the `RenderCtx`/`RenderTarget` seam; frame acquisition and presentation
//! belong to the host.

mod ctx;
mod orbit;
mod teapot;

pub use ctx::{RenderCtx, RenderTarget};
pub use orbit::OrbitState;
pub use teapot::Teapot;
