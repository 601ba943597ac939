//! Running session: simulation state plus everything needed to drive it

use crate::assets::Sprites;
use crate::error::StartupError;
use crate::scene::Scene;
use crate::settings::Config;
use crate::sim::{GameEvent, GamePhase, GameState, LevelGrid, tick};

use super::clock::FixedStep;
use super::input::InputState;

/// Whether the event loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Game {
    pub state: GameState,
    pub sprites: Sprites,
    pub input: InputState,
    clock: FixedStep,
    title: String,
}

impl Game {
    /// Load the level and sprites named by `config`
    pub fn load(config: &Config) -> Result<Self, StartupError> {
        let level = LevelGrid::load(&config.level_path())?;
        let sprites = Sprites::load(&config.sprites_path())?;
        Ok(Self::new(config, &level, sprites))
    }

    pub fn new(config: &Config, level: &LevelGrid, sprites: Sprites) -> Self {
        let state = GameState::new(level, sprites.sizes(), config.area(), config.lives);
        log::info!(
            "New session: {} lives, {} bricks",
            state.lives,
            state.active_bricks
        );
        Self {
            state,
            sprites,
            input: InputState::new(),
            clock: FixedStep::new(config.tick_dt()),
            title: config.title.clone(),
        }
    }

    /// Run however many ticks `frame_dt` seconds cover
    pub fn update(&mut self, frame_dt: f32) -> Flow {
        let steps = self.clock.advance(frame_dt);
        for _ in 0..steps {
            tick(&mut self.state, self.input.current());
            self.input.clear_one_shots();
        }

        for event in self.state.drain_events() {
            log_event(event, &self.state);
        }

        self.flow()
    }

    fn flow(&self) -> Flow {
        match self.state.phase {
            GamePhase::Lost | GamePhase::Quit => Flow::Exit,
            // Victory stays on screen until the player quits
            GamePhase::Won if self.input.quit_requested() => Flow::Exit,
            GamePhase::Won | GamePhase::Playing => Flow::Continue,
        }
    }

    pub fn scene(&self) -> Scene {
        Scene::from_state(&self.state)
    }

    /// Window caption for the current frame
    pub fn caption(&self) -> String {
        self.scene().caption(&self.title)
    }
}

fn log_event(event: GameEvent, state: &GameState) {
    match event {
        GameEvent::Launched => log::info!("Ball launched"),
        GameEvent::PaddleHit { dx } => log::debug!("Paddle hit, dx = {}", dx),
        GameEvent::BrickHit { x, y, strength } => {
            log::debug!("Brick ({}, {}) hit, strength {}", x, y, strength)
        }
        GameEvent::BrickBroken { x, y } => log::debug!(
            "Brick ({}, {}) broken, {} left",
            x,
            y,
            state.active_bricks
        ),
        GameEvent::LifeLost { lives } => log::info!("Ball lost, {} lives left", lives),
        GameEvent::Won => log::info!("All bricks cleared after {} ticks", state.time_ticks),
        GameEvent::Lost => log::info!("Out of lives after {} ticks", state.time_ticks),
        GameEvent::Quit => log::info!("Quit requested"),
    }
}
