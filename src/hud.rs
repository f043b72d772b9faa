//! Frame clock and on-screen text overlay

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::*;
use crate::renderer::{Canvas, draw_text};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 10;

/// Measures frame intervals and caps the loop rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    frame_times: [Duration; FPS_WINDOW],
    frame_index: usize,
    samples: usize,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: None,
            frame_times: [Duration::ZERO; FPS_WINDOW],
            frame_index: 0,
            samples: 0,
        }
    }

    /// Mark the end of a frame, sleeping so frames are at least
    /// `1 / target_fps` apart. Zero disables the cap.
    /// Returns the full frame interval, sleep included.
    pub fn tick(&mut self, target_fps: u32) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        if target_fps > 0 {
            let interval = Duration::from_secs_f64(1.0 / target_fps as f64);
            let busy = last.elapsed();
            if busy < interval {
                thread::sleep(interval - busy);
            }
        }

        let now = Instant::now();
        let frame_time = now - last;
        self.last_tick = Some(now);
        self.record(frame_time);
        frame_time
    }

    /// Push one frame interval into the averaging window
    pub fn record(&mut self, frame_time: Duration) {
        self.frame_times[self.frame_index] = frame_time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.samples = (self.samples + 1).min(FPS_WINDOW);
    }

    /// Average frames per second over the last few frames, 0 before any
    pub fn fps(&self) -> f32 {
        let total: Duration = self.frame_times[..self.samples].iter().sum();
        if self.samples == 0 || total.is_zero() {
            return 0.0;
        }
        self.samples as f32 / total.as_secs_f32()
    }
}

/// FPS line plus caller-supplied lines in the top-left corner
#[derive(Debug, Clone)]
pub struct HudText {
    pub clock: FrameClock,
    pub origin: (i32, i32),
    pub line_height: i32,
    pub scale: u32,
    pub color: [u8; 3],
}

impl Default for HudText {
    fn default() -> Self {
        Self::new()
    }
}

impl HudText {
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            origin: (10, 0),
            line_height: (10 + HUD_FONT_SIZE) as i32,
            scale: HUD_FONT_SCALE,
            color: TEXT_COLOR,
        }
    }

    pub fn fps_line(&self) -> String {
        format!("FPS: {:.2}", self.clock.fps())
    }

    pub fn render<S: AsRef<str>>(&self, canvas: &mut Canvas, lines: &[S]) {
        let (x, y) = self.origin;
        let fps = self.fps_line();
        let rows = std::iter::once(fps.as_str()).chain(lines.iter().map(AsRef::as_ref));
        for (row, line) in rows.enumerate() {
            draw_text(canvas, x, y + row as i32 * self.line_height, line, self.scale, self.color);
        }
    }

    pub fn tick(&mut self, target_fps: u32) -> Duration {
        self.clock.tick(target_fps)
    }
}
