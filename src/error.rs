//! Startup failures
//!
//! Every error in the game happens before the first frame; once the loop
//! runs nothing in the simulation can fail.

use thiserror::Error;

use crate::assets::AssetError;
use crate::renderer::RenderError;
use crate::sim::LevelError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
