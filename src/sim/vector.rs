//! 2D vector helpers
//!
//! `glam::Vec2` already provides the value operators (`+`, `-`, `* k`) and
//! their in-place forms (`+=`, `-=`, `*=`), which return `()`. The extension
//! trait adds the pieces the ball physics needs on top.

use glam::Vec2;

/// Position/velocity vector used throughout the simulation
pub type Vector2D = Vec2;

pub trait VectorExt {
    /// Euclidean length
    fn magnitude(&self) -> f32;
    /// Negate the x component in place
    fn flip_x(&mut self);
    /// Negate the y component in place
    fn flip_y(&mut self);
}

impl VectorExt for Vec2 {
    fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn flip_x(&mut self) {
        self.x = -self.x;
    }

    fn flip_y(&mut self) {
        self.y = -self.y;
    }
}
