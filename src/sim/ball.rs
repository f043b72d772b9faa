//! Ball entity and its wall-bounce step

use glam::Vec2;
use rand::Rng;

use super::state::Playfield;
use super::vector::VectorExt;
use crate::consts::*;

/// A ball bouncing inside the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            color: BALL_COLOR,
        }
    }

    pub fn with_style(mut self, radius: f32, color: [u8; 3]) -> Self {
        self.radius = radius;
        self.color = color;
        self
    }

    /// Spawn a ball at a random spot with a random velocity.
    ///
    /// With `near`, the spot is picked within a tenth of the playfield size
    /// of that point; otherwise anywhere the ball fits.
    pub fn random<R: Rng>(
        rng: &mut R,
        playfield: Playfield,
        radius: f32,
        near: Option<Vec2>,
    ) -> Self {
        let (w, h) = (playfield.width as f32, playfield.height as f32);
        let pos = match near {
            Some(p) => {
                let dx = (playfield.width / 10) as f32;
                let dy = (playfield.height / 10) as f32;
                Vec2::new(
                    rng.random_range(p.x - dx..=p.x + dx).round(),
                    rng.random_range(p.y - dy..=p.y + dy).round(),
                )
            }
            None => Vec2::new(
                rng.random_range(radius..=(w - radius).max(radius)).round(),
                rng.random_range(radius..=(h - radius).max(radius)).round(),
            ),
        };
        let vel = Vec2::new(
            rng.random_range(-1.0f32..=1.0) * RANDOM_SPEED,
            rng.random_range(-1.0f32..=1.0) * RANDOM_SPEED,
        );
        Self::new(pos, vel).with_style(radius, BALL_COLOR)
    }

    /// Move one step and bounce off the playfield edges.
    ///
    /// Each axis is tested on its own against `[radius, bound - radius]`;
    /// leaving the band flips that velocity component. The position is not
    /// clamped, so a fast ball can sit past the wall for one tick.
    pub fn advance(&mut self, time_scale: f32, bounds: Vec2) {
        self.pos += self.vel * time_scale;

        if !(self.radius..=bounds.x - self.radius).contains(&self.pos.x) {
            self.vel.flip_x();
        }
        if !(self.radius..=bounds.y - self.radius).contains(&self.pos.y) {
            self.vel.flip_y();
        }
    }

    /// Hook for ball-ball contact. Nothing detects contacts yet.
    pub fn on_collide(&self, other: &Ball) {
        log::debug!("{:?} collided with {:?}", self, other);
    }
}
