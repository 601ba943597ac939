//! Integer axis-aligned rectangles
//!
//! Screen space: x grows right, y grows down, origin at the play area's
//! top-left corner.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn from_size(size: IVec2) -> Self {
        Self {
            pos: IVec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Horizontal center (rounds toward the left edge)
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    /// Copy of this rect moved by `delta`
    pub fn translate(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Copy of this rect with its top-left corner at `pos`
    pub fn with_top_left(&self, pos: IVec2) -> Self {
        Self {
            pos,
            size: self.size,
        }
    }

    /// Copy of this rect with its mid-top point at (`x`, `y`)
    pub fn with_mid_top(&self, x: i32, y: i32) -> Self {
        self.with_top_left(IVec2::new(x - self.size.x / 2, y))
    }

    /// True if the two rects overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center_x(), 25);
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_rect_contained_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_rect_mid_top() {
        let r = Rect::new(0, 0, 60, 10).with_mid_top(300, 375);
        assert_eq!(r.left(), 270);
        assert_eq!(r.top(), 375);
        assert_eq!(r.center_x(), 300);
    }

    #[test]
    fn test_rect_translate_keeps_size() {
        let r = Rect::new(1, 2, 3, 4).translate(IVec2::new(-5, 6));
        assert_eq!(r, Rect::new(-4, 8, 3, 4));
    }
}
