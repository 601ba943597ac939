//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. Positions are integer pixels.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::level::LevelGrid;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session in progress (ball following or sliding)
    Playing,
    /// Every brick broken
    Won,
    /// Ball lost with no lives left
    Lost,
    /// Player quit
    Quit,
}

impl GamePhase {
    /// True once the session has ended; no further ticks are processed
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Gameplay events emitted by a tick, drained by the platform for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    PaddleHit { dx: i32 },
    BrickHit { x: usize, y: usize, strength: u8 },
    BrickBroken { x: usize, y: usize },
    LifeLost { lives: u8 },
    Won,
    Lost,
    Quit,
}

/// Visual strength tier of a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickTier {
    Red,
    Orange,
    Purple,
    Blue,
    Green,
    Blank,
}

impl BrickTier {
    pub const COUNT: usize = 6;

    pub const ALL: [BrickTier; Self::COUNT] = [
        BrickTier::Red,
        BrickTier::Orange,
        BrickTier::Purple,
        BrickTier::Blue,
        BrickTier::Green,
        BrickTier::Blank,
    ];

    /// Position in [`BrickTier::ALL`]
    pub fn index(self) -> usize {
        match self {
            BrickTier::Red => 0,
            BrickTier::Orange => 1,
            BrickTier::Purple => 2,
            BrickTier::Blue => 3,
            BrickTier::Green => 4,
            BrickTier::Blank => 5,
        }
    }

    pub fn for_strength(strength: u8) -> Self {
        match strength {
            5.. => BrickTier::Red,
            4 => BrickTier::Orange,
            3 => BrickTier::Purple,
            2 => BrickTier::Blue,
            1 => BrickTier::Green,
            0 => BrickTier::Blank,
        }
    }
}

/// A breakable brick at fixed grid coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    /// Grid column
    pub x: usize,
    /// Grid row
    pub y: usize,
    pub strength: u8,
    pub rect: Rect,
}

impl Brick {
    /// Brick at grid cell (`x`, `y`); strength 0 is an empty placeholder
    pub fn new(x: usize, y: usize, strength: u8, size: IVec2) -> Self {
        let pos = IVec2::new(x as i32 * BRICK_CELL_WIDTH, y as i32 * BRICK_CELL_HEIGHT);
        Self {
            x,
            y,
            strength,
            rect: Rect { pos, size },
        }
    }

    /// Take one point of strength. Returns true if this hit broke the brick.
    pub fn weaken(&mut self) -> bool {
        let was_active = self.is_active();
        self.strength = self.strength.saturating_sub(1);
        was_active && !self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.strength > 0
    }

    pub fn tier(&self) -> BrickTier {
        BrickTier::for_strength(self.strength)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(size: IVec2, area: &Rect) -> Self {
        let mut paddle = Self {
            rect: Rect::from_size(size),
        };
        paddle.update(area.center_x(), area);
        paddle
    }

    /// Center the paddle on the pointer, just above the play area bottom
    pub fn update(&mut self, pointer_x: i32, area: &Rect) {
        self.rect = self
            .rect
            .with_mid_top(pointer_x, area.bottom() - PADDLE_BOTTOM_OFFSET);
    }
}

/// Ball movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallMode {
    /// Waiting for launch, tracking the pointer
    Following,
    /// Launched, moving under its own velocity
    Sliding,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: IVec2,
    pub mode: BallMode,
}

impl Ball {
    pub const LAUNCH_VELOCITY: IVec2 = IVec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY);

    /// Unplaced ball at the origin. Call `update` to put it over the pointer.
    pub fn new(size: IVec2) -> Self {
        Self {
            rect: Rect::from_size(size),
            vel: Self::LAUNCH_VELOCITY,
            mode: BallMode::Following,
        }
    }

    /// Launch the ball. No-op if already sliding.
    pub fn go(&mut self) -> bool {
        if self.mode == BallMode::Following {
            self.mode = BallMode::Sliding;
            true
        } else {
            false
        }
    }

    pub fn hits(&self, target: &Rect) -> bool {
        self.rect.intersects(target)
    }

    /// Redirect off the paddle: horizontal speed from the strike offset
    /// relative to the paddle center, vertical direction reversed.
    pub fn paddle_bounce(&mut self, paddle: &Paddle) {
        let offset = self.rect.left() - paddle.rect.center_x();
        self.vel.x = offset * PADDLE_ENGLISH_NUM / PADDLE_ENGLISH_DEN;
        self.vel.y = -self.vel.y;
    }

    /// Reverse vertical direction off a live brick
    pub fn brick_bounce(&mut self, brick: &Brick) {
        if brick.is_active() {
            self.vel.y = -self.vel.y;
        }
    }

    /// True if the ball fell past the bottom of the play area. Resets the
    /// ball to the pre-launch mode and launch velocity when it does.
    pub fn dies(&mut self, area: &Rect) -> bool {
        if self.rect.bottom() > area.bottom() {
            self.mode = BallMode::Following;
            self.vel = Self::LAUNCH_VELOCITY;
            true
        } else {
            false
        }
    }

    /// Advance one tick
    pub fn update(&mut self, pointer_x: i32, area: &Rect) {
        match self.mode {
            BallMode::Sliding => self.slide(area),
            BallMode::Following => self.follow(pointer_x, area),
        }
    }

    fn slide(&mut self, area: &Rect) {
        let next = self.rect.translate(self.vel);
        if next.left() < area.left() || next.right() > area.right() {
            self.vel.x = -self.vel.x;
        }
        if next.top() < area.top() {
            self.vel.y = -self.vel.y;
        }
        self.rect = self.rect.translate(self.vel);
    }

    fn follow(&mut self, pointer_x: i32, area: &Rect) {
        self.rect = self.rect.with_mid_top(
            pointer_x + BALL_FOLLOW_OFFSET_X,
            area.bottom() - BALL_FOLLOW_BOTTOM_OFFSET,
        );
    }
}

/// Pixel sizes of the game entities, taken from the sprite catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySizes {
    pub paddle: IVec2,
    pub ball: IVec2,
    pub brick: IVec2,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Bounds the ball moves within
    pub area: Rect,
    pub lives: u8,
    /// Bricks with strength > 0
    pub active_bricks: usize,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Last known pointer x
    pub pointer_x: i32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Brick rows, row-major
    pub bricks: Vec<Vec<Brick>>,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session for `level` inside `area`
    pub fn new(level: &LevelGrid, sizes: EntitySizes, area: Rect, lives: u8) -> Self {
        let mut bricks: Vec<Vec<Brick>> = Vec::with_capacity(level.rows());
        for (x, y, strength) in level.iter() {
            if x == 0 {
                bricks.push(Vec::with_capacity(level.columns()));
            }
            if let Some(row) = bricks.last_mut() {
                row.push(Brick::new(x, y, strength, sizes.brick));
            }
        }

        let pointer_x = area.center_x();
        let mut ball = Ball::new(sizes.ball);
        ball.update(pointer_x, &area);

        Self {
            area,
            lives,
            active_bricks: level.active_cells(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            pointer_x,
            paddle: Paddle::new(sizes.paddle, &area),
            ball,
            bricks,
            events: Vec::new(),
        }
    }

    /// All bricks in row-major order
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().flatten()
    }

    /// Take the events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
