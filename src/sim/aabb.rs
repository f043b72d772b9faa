//! Axis-aligned box utility
//!
//! Not used by the update loop; kept for hit-testing and future culling.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("box field `{0}` is missing")]
    Missing(&'static str),
    #[error("box field `{field}` is not finite ({value})")]
    NonFinite { field: &'static str, value: f32 },
    #[error("box size must be positive, got {width}x{height}")]
    EmptySize { width: f32, height: f32 },
}

/// Rectangle with its top-left corner at (x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        for (field, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::EmptySize { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Result<Self, GeometryError> {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Build from partially known fields. Every field must be present.
    pub fn from_fields(
        x: Option<f32>,
        y: Option<f32>,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<Self, GeometryError> {
        Self::new(
            x.ok_or(GeometryError::Missing("x"))?,
            y.ok_or(GeometryError::Missing("y"))?,
            width.ok_or(GeometryError::Missing("width"))?,
            height.ok_or(GeometryError::Missing("height"))?,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if `other` lies entirely inside this box (edges may touch)
    pub fn contains(&self, other: &Aabb) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    /// True if the interiors overlap; touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.x >= other.right()
            || self.right() <= other.x
            || self.y >= other.bottom()
            || self.bottom() <= other.y)
    }
}
