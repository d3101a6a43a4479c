//! Axis-aligned geometry shared by the ball and the platforms
//!
//! Screen coordinates: x grows to the right, y grows downward, so `top` is
//! the smallest y of a shape.

use serde::{Deserialize, Serialize};

/// Edge coordinates of a shape, derived from its current position
pub trait Bounds {
    fn top(&self) -> f32;
    fn bottom(&self) -> f32;
    fn left(&self) -> f32;
    fn right(&self) -> f32;

    /// Horizontal extent, strictly exclusive at both ends
    #[inline]
    fn spans_x(&self, x: f32) -> bool {
        self.left() < x && x < self.right()
    }
}

/// Rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Bounds for Rect {
    #[inline]
    fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(175.0, 405.0, 150.0, 4.0);
        assert_eq!(rect.top(), 405.0);
        assert_eq!(rect.bottom(), 409.0);
        assert_eq!(rect.left(), 175.0);
        assert_eq!(rect.right(), 325.0);
    }

    #[test]
    fn test_edges_follow_position() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 2.0);
        rect.x += 5.0;
        rect.y -= 3.0;
        assert_eq!(rect.left(), 5.0);
        assert_eq!(rect.right(), 15.0);
        assert_eq!(rect.top(), -3.0);
        assert_eq!(rect.bottom(), -1.0);
    }

    #[test]
    fn test_spans_x_is_exclusive() {
        let rect = Rect::new(175.0, 0.0, 150.0, 4.0);
        assert!(rect.spans_x(250.0));
        assert!(!rect.spans_x(175.0));
        assert!(!rect.spans_x(325.0));
    }
}
