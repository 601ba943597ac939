//! Sprite catalogue
//!
//! Maps logical asset names to a size and a fill colour. The manifest is a
//! JSON object in the data directory:
//!
//! ```json
//! { "paddle": { "size": [60, 10], "color": [40, 40, 40] }, ... }
//! ```
//!
//! Every [`Visual`] must be present; anything missing fails startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::Visual;
use crate::sim::{BrickTier, EntitySizes};

/// Errors produced while loading sprites
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read sprite manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sprite manifest {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("sprite {name:?} is missing from the manifest")]
    Missing { name: &'static str },

    #[error("sprite {name:?} has invalid size {width}x{height}")]
    InvalidSize {
        name: &'static str,
        width: i32,
        height: i32,
    },

    #[error("brick sprite {name:?} is {found:?}, other bricks are {expected:?}")]
    BrickSizeMismatch {
        name: &'static str,
        expected: (i32, i32),
        found: (i32, i32),
    },
}

/// Manifest entry as written on disk
#[derive(Debug, Clone, Deserialize)]
struct SpriteDef {
    size: [i32; 2],
    color: [u8; 3],
}

/// A loaded sprite: bounding size plus flat fill colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub size: IVec2,
    /// RGBA, 0-1
    pub color: [f32; 4],
}

impl Sprite {
    fn from_def(name: &'static str, def: &SpriteDef) -> Result<Self, AssetError> {
        let [width, height] = def.size;
        if width <= 0 || height <= 0 {
            return Err(AssetError::InvalidSize {
                name,
                width,
                height,
            });
        }
        let [r, g, b] = def.color;
        Ok(Self {
            size: IVec2::new(width, height),
            color: [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                1.0,
            ],
        })
    }
}

/// Every sprite the game draws
#[derive(Debug, Clone)]
pub struct Sprites {
    paddle: Sprite,
    ball: Sprite,
    bricks: [Sprite; BrickTier::COUNT],
}

impl Sprites {
    /// Read and validate the manifest at `path`
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sprites = Self::from_json(&json, path)?;
        log::info!("Loaded sprites from {}", path.display());
        Ok(sprites)
    }

    /// Parse manifest text; `path` is only used in error messages
    pub fn from_json(json: &str, path: &Path) -> Result<Self, AssetError> {
        let defs: HashMap<String, SpriteDef> =
            serde_json::from_str(json).map_err(|source| AssetError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let lookup = |visual: Visual| -> Result<Sprite, AssetError> {
            let name = visual.asset_name();
            let def = defs.get(name).ok_or(AssetError::Missing { name })?;
            Sprite::from_def(name, def)
        };

        let paddle = lookup(Visual::Paddle)?;
        let ball = lookup(Visual::Ball)?;

        let mut bricks = [paddle; BrickTier::COUNT];
        for (slot, tier) in bricks.iter_mut().zip(BrickTier::ALL) {
            *slot = lookup(Visual::Brick(tier))?;
        }

        // Bricks share one collision rect regardless of tier
        let expected = bricks[0].size;
        for (sprite, tier) in bricks.iter().zip(BrickTier::ALL) {
            if sprite.size != expected {
                return Err(AssetError::BrickSizeMismatch {
                    name: Visual::Brick(tier).asset_name(),
                    expected: (expected.x, expected.y),
                    found: (sprite.size.x, sprite.size.y),
                });
            }
        }

        for name in defs.keys() {
            if !Visual::ALL.iter().any(|v| v.asset_name() == name) {
                log::debug!("Unused sprite {:?} in manifest", name);
            }
        }

        Ok(Self {
            paddle,
            ball,
            bricks,
        })
    }

    pub fn get(&self, visual: Visual) -> &Sprite {
        match visual {
            Visual::Paddle => &self.paddle,
            Visual::Ball => &self.ball,
            Visual::Brick(tier) => &self.bricks[tier.index()],
        }
    }

    /// Collision sizes for the simulation
    pub fn sizes(&self) -> EntitySizes {
        EntitySizes {
            paddle: self.paddle.size,
            ball: self.ball.size,
            brick: self.bricks[0].size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "paddle":       { "size": [60, 10], "color": [40, 40, 40] },
        "ball":         { "size": [10, 10], "color": [200, 30, 30] },
        "red_brick":    { "size": [28, 8],  "color": [220, 40, 40] },
        "orange_brick": { "size": [28, 8],  "color": [240, 140, 30] },
        "purple_brick": { "size": [28, 8],  "color": [140, 60, 200] },
        "blue_brick":   { "size": [28, 8],  "color": [50, 90, 220] },
        "green_brick":  { "size": [28, 8],  "color": [40, 180, 70] },
        "blank_brick":  { "size": [28, 8],  "color": [235, 235, 235] }
    }"#;

    fn parse(json: &str) -> Result<Sprites, AssetError> {
        Sprites::from_json(json, Path::new("sprites.json"))
    }

    #[test]
    fn test_load_complete_manifest() {
        let sprites = parse(MANIFEST).unwrap();
        let sizes = sprites.sizes();
        assert_eq!(sizes.paddle, IVec2::new(60, 10));
        assert_eq!(sizes.ball, IVec2::new(10, 10));
        assert_eq!(sizes.brick, IVec2::new(28, 8));

        let green = sprites.get(Visual::Brick(BrickTier::Green));
        assert!((green.color[1] - 180.0 / 255.0).abs() < 1e-6);
        assert_eq!(green.color[3], 1.0);
    }

    #[test]
    fn test_missing_sprite() {
        let json = MANIFEST.replace("\"ball\"", "\"balloon\"");
        assert!(matches!(
            parse(&json),
            Err(AssetError::Missing { name: "ball" })
        ));
    }

    #[test]
    fn test_zero_size_rejected() {
        let json = MANIFEST.replace("[60, 10]", "[0, 10]");
        assert!(matches!(
            parse(&json),
            Err(AssetError::InvalidSize { name: "paddle", .. })
        ));
    }

    #[test]
    fn test_brick_size_mismatch_rejected() {
        let json = MANIFEST.replace(
            r#""blue_brick":   { "size": [28, 8]"#,
            r#""blue_brick":   { "size": [30, 8]"#,
        );
        assert!(matches!(
            parse(&json),
            Err(AssetError::BrickSizeMismatch {
                name: "blue_brick",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse("[1, 2, 3]"),
            Err(AssetError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("brickbust-no-such-sprites.json");
        assert!(matches!(Sprites::load(&path), Err(AssetError::Io { .. })));
    }

    #[test]
    fn test_shipped_manifest_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sprites.json");
        assert!(Sprites::load(&path).is_ok());
    }
}
