//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one frame.

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Pointer x in play-area pixels, if it moved
    pub pointer_x: Option<i32>,
    /// Launch the ball (primary button)
    pub launch: bool,
    /// Quit (window close or escape)
    pub quit: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    // Input
    if let Some(x) = input.pointer_x {
        state.pointer_x = x;
    }
    if input.launch && state.ball.go() {
        state.events.push(GameEvent::Launched);
    }

    // Paddle follows the pointer
    let area = state.area;
    state.paddle.update(state.pointer_x, &area);

    // Paddle collision
    if state.ball.hits(&state.paddle.rect) {
        state.ball.paddle_bounce(&state.paddle);
        state.events.push(GameEvent::PaddleHit {
            dx: state.ball.vel.x,
        });
    }

    // Brick collisions, every brick hit this frame is processed
    for brick in state.bricks.iter_mut().flatten() {
        if !state.ball.hits(&brick.rect) {
            continue;
        }
        state.ball.brick_bounce(brick);
        let broke = brick.weaken();
        state.events.push(GameEvent::BrickHit {
            x: brick.x,
            y: brick.y,
            strength: brick.strength,
        });
        if broke {
            state.active_bricks = state.active_bricks.saturating_sub(1);
            state.events.push(GameEvent::BrickBroken {
                x: brick.x,
                y: brick.y,
            });
        }
    }

    // Ball lost past the bottom edge
    if state.ball.dies(&area) {
        if state.lives > 1 {
            state.lives -= 1;
            state.events.push(GameEvent::LifeLost { lives: state.lives });
        } else {
            state.lives = 0;
            state.phase = GamePhase::Lost;
            state.events.push(GameEvent::Lost);
        }
    }

    if state.phase == GamePhase::Playing && state.active_bricks == 0 {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
    }

    if !state.phase.is_terminal() {
        state.ball.update(state.pointer_x, &area);
    }

    if input.quit && state.phase == GamePhase::Playing {
        state.phase = GamePhase::Quit;
        state.events.push(GameEvent::Quit);
    }
}
