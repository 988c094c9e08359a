//! Shared positional data for every world object
//!
//! Player, blocks and enemies all embed an [`Entity`]: a top-left position and
//! a fixed size. Behaviour lives on the concrete types; this struct only knows
//! about geometry.

use crate::collision::Bounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Entity {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "entity size must be positive");
        Entity { x, y, width, height }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.height;
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.width;
    }

    pub fn set_position(&mut self, (x, y): (f32, f32)) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let e = Entity::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(e.left(), 10.0);
        assert_eq!(e.right(), 50.0);
        assert_eq!(e.top(), 20.0);
        assert_eq!(e.bottom(), 80.0);
    }

    #[test]
    fn test_edge_setters() {
        let mut e = Entity::new(0.0, 0.0, 40.0, 60.0);
        e.set_bottom(400.0);
        assert_eq!(e.y, 340.0);
        e.set_right(800.0);
        assert_eq!(e.x, 760.0);
    }
}
