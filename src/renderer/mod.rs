//! Software rendering module
//!
//! Everything is drawn into a CPU-side RGBA `Canvas`; the platform layer only
//! copies finished frames to the window.

pub mod canvas;
pub mod draw;
pub mod text;

pub use canvas::{Canvas, frame_len};
pub use draw::{draw_ball, draw_scene, draw_trail};
pub use text::draw_text;
