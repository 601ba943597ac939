//! WebGPU rendering module
//!
//! Draws the scene's draw list as flat-colored quads.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;

use thiserror::Error;

/// Errors raised while bringing up the GPU
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no usable formats")]
    UnsupportedSurface,
}
