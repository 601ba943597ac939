//! Quad vertices
//!
//! Shapes build vertices in play-area pixels; `to_clip` converts them just
//! before upload.

use bytemuck::{Pod, Zeroable};

use super::shapes::to_ndc;
use crate::sim::Rect;

/// One corner of a flat-colored sprite quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Play-area pixels before `to_clip`, clip space after
    pub position: [f32; 2],
    /// Linear RGBA from the sprite manifest
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex with its position mapped from `area` pixels to clip space
    pub fn to_clip(self, area: &Rect) -> Self {
        Self {
            position: to_ndc(self.position[0], self.position[1], area),
            ..self
        }
    }

    /// Layout matching `vs_main`'s inputs
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors not taken from the sprite manifest
pub mod colors {
    /// Play area fill (250, 250, 250)
    pub const BACKGROUND: [f32; 4] = [0.98, 0.98, 0.98, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn test_to_clip_keeps_color() {
        let area = Rect::new(0, 0, 600, 400);
        let color = [0.1, 0.2, 0.3, 1.0];
        assert_eq!(
            Vertex::new(0.0, 0.0, color).to_clip(&area),
            Vertex::new(-1.0, 1.0, color)
        );
        assert_eq!(
            Vertex::new(600.0, 400.0, color).to_clip(&area),
            Vertex::new(1.0, -1.0, color)
        );
    }
}
