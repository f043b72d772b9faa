//! Simulation module
//!
//! All ball motion and input interpretation lives here. No rendering or
//! platform dependencies; randomness only through a caller-supplied RNG.

pub mod aabb;
pub mod ball;
pub mod drag;
pub mod input;
pub mod state;
pub mod tick;
pub mod vector;

pub use aabb::{Aabb, GeometryError};
pub use ball::Ball;
pub use drag::DragGesture;
pub use input::{InputEvent, PointerButton, Toggle};
pub use state::{Playfield, Scene, SimParams};
pub use tick::{advance_balls, apply_inputs, tick};
pub use vector::{Vector2D, VectorExt};
