//! Shape generation for 2D primitives
//!
//! Shapes are emitted in play-area pixel space (y down); the pipeline maps
//! them to clip space.

use super::vertex::Vertex;
use crate::assets::Sprites;
use crate::scene::Scene;
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let l = rect.left() as f32;
    let r = rect.right() as f32;
    let t = rect.top() as f32;
    let b = rect.bottom() as f32;

    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Vertices for every item in the scene, back to front
pub fn scene(scene: &Scene, sprites: &Sprites) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.items.len() * 6);
    for item in &scene.items {
        let sprite = sprites.get(item.visual);
        // Draw at the sprite's own size, anchored at the item's top-left
        let drawn = Rect {
            pos: item.rect.pos,
            size: sprite.size,
        };
        vertices.extend_from_slice(&rect(&drawn, sprite.color));
    }
    vertices
}

/// Map a play-area pixel position to normalized device coordinates
pub fn to_ndc(x: f32, y: f32, area: &Rect) -> [f32; 2] {
    let w = area.width().max(1) as f32;
    let h = area.height().max(1) as f32;
    [
        (x - area.left() as f32) / w * 2.0 - 1.0,
        1.0 - (y - area.top() as f32) / h * 2.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawItem, Visual};
    use crate::sim::BrickTier;
    use std::path::Path;

    fn sprites() -> Sprites {
        let json = r#"{
            "paddle":       { "size": [60, 10], "color": [0, 0, 0] },
            "ball":         { "size": [10, 10], "color": [255, 0, 0] },
            "red_brick":    { "size": [30, 10], "color": [255, 0, 0] },
            "orange_brick": { "size": [30, 10], "color": [255, 128, 0] },
            "purple_brick": { "size": [30, 10], "color": [128, 0, 255] },
            "blue_brick":   { "size": [30, 10], "color": [0, 0, 255] },
            "green_brick":  { "size": [30, 10], "color": [0, 255, 0] },
            "blank_brick":  { "size": [30, 10], "color": [250, 250, 250] }
        }"#;
        Sprites::from_json(json, Path::new("test.json")).unwrap()
    }

    #[test]
    fn test_rect_vertices_cover_corners() {
        let verts = rect(&Rect::new(10, 20, 30, 40), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_scene_vertices_use_sprite_color() {
        let scene = Scene {
            area: Rect::new(0, 0, 600, 400),
            items: vec![
                DrawItem {
                    rect: Rect::new(0, 0, 30, 10),
                    visual: Visual::Brick(BrickTier::Blue),
                },
                DrawItem {
                    rect: Rect::new(100, 100, 10, 10),
                    visual: Visual::Ball,
                },
            ],
            status: String::new(),
            message: None,
        };
        let verts = scene_vertices(&scene);
        assert_eq!(verts.len(), 12);
        assert_eq!(verts[0].color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(verts[6].color, [1.0, 0.0, 0.0, 1.0]);
    }

    fn scene_vertices(s: &Scene) -> Vec<Vertex> {
        scene(s, &sprites())
    }

    #[test]
    fn test_to_ndc_corners() {
        let area = Rect::new(0, 0, 600, 400);
        assert_eq!(to_ndc(0.0, 0.0, &area), [-1.0, 1.0]);
        assert_eq!(to_ndc(600.0, 400.0, &area), [1.0, -1.0]);
        assert_eq!(to_ndc(300.0, 200.0, &area), [0.0, 0.0]);
    }
}
