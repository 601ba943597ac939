//! Frame description handed to the renderer
//!
//! A [`Scene`] is a read-only projection of [`GameState`]: an ordered draw
//! list plus the HUD strings. Building one never touches the simulation.

use crate::sim::{Ball, Brick, BrickTier, GamePhase, GameState, Paddle, Rect};

/// Visual handle, resolved to a sprite by the asset catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    Paddle,
    Ball,
    Brick(BrickTier),
}

impl Visual {
    pub const ALL: [Visual; 2 + BrickTier::COUNT] = [
        Visual::Paddle,
        Visual::Ball,
        Visual::Brick(BrickTier::Red),
        Visual::Brick(BrickTier::Orange),
        Visual::Brick(BrickTier::Purple),
        Visual::Brick(BrickTier::Blue),
        Visual::Brick(BrickTier::Green),
        Visual::Brick(BrickTier::Blank),
    ];

    /// Logical asset name in the sprite manifest
    pub fn asset_name(&self) -> &'static str {
        match self {
            Visual::Paddle => "paddle",
            Visual::Ball => "ball",
            Visual::Brick(BrickTier::Red) => "red_brick",
            Visual::Brick(BrickTier::Orange) => "orange_brick",
            Visual::Brick(BrickTier::Purple) => "purple_brick",
            Visual::Brick(BrickTier::Blue) => "blue_brick",
            Visual::Brick(BrickTier::Green) => "green_brick",
            Visual::Brick(BrickTier::Blank) => "blank_brick",
        }
    }
}

/// Anything that can be drawn as a rect with a visual
pub trait Renderable {
    fn rect(&self) -> Rect;
    fn visual(&self) -> Visual;
}

impl Renderable for Paddle {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn visual(&self) -> Visual {
        Visual::Paddle
    }
}

impl Renderable for Ball {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn visual(&self) -> Visual {
        Visual::Ball
    }
}

impl Renderable for Brick {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn visual(&self) -> Visual {
        Visual::Brick(self.tier())
    }
}

/// One entry in the draw list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawItem {
    pub rect: Rect,
    pub visual: Visual,
}

impl DrawItem {
    fn of(entity: &impl Renderable) -> Self {
        Self {
            rect: entity.rect(),
            visual: entity.visual(),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Play area size in pixels
    pub area: Rect,
    /// Back to front: bricks, paddle, ball
    pub items: Vec<DrawItem>,
    /// Lives and bricks remaining
    pub status: String,
    /// End-of-game message
    pub message: Option<&'static str>,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        let mut items: Vec<DrawItem> = state.bricks().map(DrawItem::of).collect();
        items.push(DrawItem::of(&state.paddle));
        items.push(DrawItem::of(&state.ball));

        Self {
            area: state.area,
            items,
            status: status_line(state),
            message: end_message(state.phase),
        }
    }

    /// Single-line caption combining status and end message
    pub fn caption(&self, title: &str) -> String {
        match self.message {
            Some(message) => format!("{} - {} - {}", title, self.status, message),
            None => format!("{} - {}", title, self.status),
        }
    }
}

fn status_line(state: &GameState) -> String {
    format!(
        "Lives: {}   Bricks left: {}",
        state.lives, state.active_bricks
    )
}

fn end_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Won => Some("You win!!"),
        GamePhase::Lost => Some("Game over"),
        GamePhase::Playing | GamePhase::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EntitySizes, LevelGrid};
    use glam::IVec2;

    fn state(level: &str) -> GameState {
        let level = LevelGrid::parse(level).unwrap();
        let sizes = EntitySizes {
            paddle: IVec2::new(60, 10),
            ball: IVec2::new(10, 10),
            brick: IVec2::new(30, 10),
        };
        GameState::new(&level, sizes, Rect::new(0, 0, 600, 400), 3)
    }

    #[test]
    fn test_scene_lists_every_entity() {
        let state = state("105\n230\n");
        let scene = Scene::from_state(&state);
        assert_eq!(scene.items.len(), 6 + 2);

        let visuals: Vec<_> = scene.items.iter().map(|i| i.visual).collect();
        assert_eq!(visuals[0], Visual::Brick(BrickTier::Green));
        assert_eq!(visuals[1], Visual::Brick(BrickTier::Blank));
        assert_eq!(visuals[2], Visual::Brick(BrickTier::Red));
        assert_eq!(visuals[3], Visual::Brick(BrickTier::Blue));
        assert_eq!(visuals[4], Visual::Brick(BrickTier::Purple));
        assert_eq!(visuals[6], Visual::Paddle);
        assert_eq!(visuals[7], Visual::Ball);
        assert_eq!(scene.items[3].rect.pos, IVec2::new(0, 10));
    }

    #[test]
    fn test_status_and_message() {
        let mut state = state("11\n");
        let scene = Scene::from_state(&state);
        assert_eq!(scene.status, "Lives: 3   Bricks left: 2");
        assert_eq!(scene.message, None);
        assert_eq!(
            scene.caption("Brickbust"),
            "Brickbust - Lives: 3   Bricks left: 2"
        );

        state.phase = GamePhase::Won;
        state.active_bricks = 0;
        let scene = Scene::from_state(&state);
        assert_eq!(scene.message, Some("You win!!"));
        assert!(scene.caption("Brickbust").ends_with("You win!!"));

        state.phase = GamePhase::Lost;
        assert_eq!(Scene::from_state(&state).message, Some("Game over"));
    }

    #[test]
    fn test_brick_visual_follows_strength() {
        let mut state = state("2\n");
        state.bricks[0][0].weaken();
        assert_eq!(
            state.bricks[0][0].visual(),
            Visual::Brick(BrickTier::Green)
        );
        state.bricks[0][0].weaken();
        assert_eq!(
            state.bricks[0][0].visual(),
            Visual::Brick(BrickTier::Blank)
        );
    }

    #[test]
    fn test_asset_names_unique() {
        let mut names: Vec<_> = Visual::ALL.iter().map(Visual::asset_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Visual::ALL.len());
    }
}
