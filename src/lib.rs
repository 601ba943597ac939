//! Brickbust - a breakout/brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level grid, bricks, paddle, ball, tick)
//! - `scene`: Draw list and HUD text built from the game state
//! - `assets`: Sprite catalogue loaded from the data directory
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Window, input and fixed-timestep loop
//! - `settings`: Startup configuration

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 30;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest real-time delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Play area dimensions (logical pixels)
    pub const PLAY_AREA_WIDTH: u32 = 600;
    pub const PLAY_AREA_HEIGHT: u32 = 400;

    /// Brick cell size in pixels (intentionally non-square)
    pub const BRICK_CELL_WIDTH: i32 = 30;
    pub const BRICK_CELL_HEIGHT: i32 = 10;

    /// Paddle top edge sits this far above the play area bottom
    pub const PADDLE_BOTTOM_OFFSET: i32 = 25;

    /// Following ball mid-top offset from the pointer
    pub const BALL_FOLLOW_OFFSET_X: i32 = -10;
    pub const BALL_FOLLOW_BOTTOM_OFFSET: i32 = 35;
    /// Launch velocity, pixels per tick
    pub const BALL_LAUNCH_DX: i32 = 5;
    pub const BALL_LAUNCH_DY: i32 = 5;

    /// Paddle bounce: dx = (ball.left - paddle.center_x) * NUM / DEN
    pub const PADDLE_ENGLISH_NUM: i32 = 3;
    pub const PADDLE_ENGLISH_DEN: i32 = 4;

    /// Starting lives
    pub const START_LIVES: u8 = 3;
}
