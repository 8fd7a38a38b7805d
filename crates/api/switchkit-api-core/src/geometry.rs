//! Geometry primitives. All numeric types use f32, logical units.

use serde::{Deserialize, Serialize};

/// 2D point or offset.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Uniform value on both axes (scale factors, insets).
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

/// Width/height pair.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter side; the inscribed-circle diameter of this size.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Square of the given side length.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Axis-aligned rectangle: origin (top-left by host convention) plus size.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.size.min_side()
    }

    /// Same rectangle moved to a new horizontal origin.
    #[inline]
    pub fn with_origin_x(mut self, x: f32) -> Self {
        self.origin.x = x;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_side_picks_shorter_axis() {
        assert_eq!(Size::new(60.0, 30.0).min_side(), 30.0);
        assert_eq!(Rect::new(0.0, 0.0, 10.0, 40.0).min_side(), 10.0);
    }

    #[test]
    fn with_origin_x_keeps_everything_else() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).with_origin_x(9.0);
        assert_eq!(r, Rect::new(9.0, 2.0, 3.0, 4.0));
    }
}
