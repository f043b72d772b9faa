//! Demo settings
//!
//! Every tunable in one place. Built from `consts`; there is no settings file.

use std::path::PathBuf;

use crate::consts::*;

/// Window, scene and recorder settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // === Window ===
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Main loop frame-rate cap
    pub fps_limit: u32,

    // === Scene ===
    pub ball_radius: f32,
    pub ball_color: [u8; 3],
    /// Random balls spawned at startup
    pub initial_balls: usize,
    pub time_scale: f32,
    pub render_trails: bool,
    pub motion_enabled: bool,

    // === Recorder ===
    /// Start with recording already on
    pub recording: bool,
    /// Directory for batch files and the final GIF
    pub recording_dir: PathBuf,
    /// Frames per batch file
    pub flush_threshold: usize,
    pub frame_delay_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "My balls".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps_limit: FPS_LIMIT,

            ball_radius: BALL_RADIUS,
            ball_color: BALL_COLOR,
            initial_balls: 0,
            time_scale: 1.0,
            render_trails: false,
            motion_enabled: true,

            recording: false,
            recording_dir: PathBuf::from(RECORDING_DIR),
            flush_threshold: FLUSH_THRESHOLD,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
        }
    }
}

impl Settings {
    /// Settings for the bare FPS counter window
    pub fn fps_counter() -> Self {
        Self {
            title: "FPS".to_string(),
            width: 400,
            height: 300,
            ..Self::default()
        }
    }
}
