//! Bouncing Balls - drag to launch, wheel to bend time
//!
//! Core modules:
//! - `sim`: Ball motion, drag gestures and the per-tick update
//! - `renderer`: Software canvas, ball/trail drawing, bitmap text
//! - `hud`: Frame clock and FPS/telemetry overlay
//! - `recorder`: Animated GIF screen recorder
//! - `platform`: winit/pixels window runner
//! - `settings`: Tunables with defaults

pub mod hud;
pub mod platform;
pub mod recorder;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use hud::{FrameClock, HudText};
pub use recorder::{FrameRecorder, RecorderError};
pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    /// Playfield size in pixels
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;

    /// Frame-rate cap for the main loop
    pub const FPS_LIMIT: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_COLOR: [u8; 3] = [255, 165, 0];
    /// Number of circles in a ball trail
    pub const TRAIL_LENGTH: u32 = 10;
    /// Speed multiplier for randomly spawned balls
    pub const RANDOM_SPEED: f32 = 5.0;

    /// Drag vector is divided by (dimension / DRAG_DIVISOR) to get velocity
    pub const DRAG_DIVISOR: u32 = 10;
    /// Wheel notches are divided by this before being added to the time scale
    pub const WHEEL_DIVISOR: f32 = 10.0;

    pub const BACKGROUND: [u8; 3] = [0, 0, 0];
    pub const TEXT_COLOR: [u8; 3] = [255, 255, 255];

    /// HUD glyph scale (8x8 glyphs drawn at 16x16)
    pub const HUD_FONT_SCALE: u32 = 2;
    /// Nominal HUD font size; rows are spaced (10 + size) pixels apart
    pub const HUD_FONT_SIZE: u32 = 20;

    /// Recorder: frames per batch file
    pub const FLUSH_THRESHOLD: usize = 10;
    /// Recorder: per-frame delay in the written GIFs
    pub const GIF_FRAME_DELAY_MS: u32 = 20;
    /// Recorder: default output directory
    pub const RECORDING_DIR: &str = "images";
}
