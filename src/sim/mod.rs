//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer pixel positions and velocities
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use level::{LevelError, LevelGrid};
pub use rect::Rect;
pub use state::{
    Ball, BallMode, Brick, BrickTier, EntitySizes, GameEvent, GamePhase, GameState, Paddle,
};
pub use tick::{TickInput, tick};
