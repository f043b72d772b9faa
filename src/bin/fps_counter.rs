//! Empty window with an FPS readout

use std::process::ExitCode;

use bouncing_balls::consts::{BACKGROUND, HUD_FONT_SCALE, TEXT_COLOR};
use bouncing_balls::platform::{self, AppError, Demo};
use bouncing_balls::renderer::{Canvas, draw_text};
use bouncing_balls::sim::InputEvent;
use bouncing_balls::{FrameClock, Settings};

struct FpsCounter {
    clock: FrameClock,
    fps_limit: u32,
    /// Top-left of the readout
    origin: (i32, i32),
}

impl Demo for FpsCounter {
    fn handle_input(&mut self, _event: InputEvent) {}

    fn frame(&mut self, canvas: &mut Canvas) -> Result<(), AppError> {
        canvas.clear(BACKGROUND);
        let text = format!("{:.2}", self.clock.fps());
        draw_text(canvas, self.origin.0, self.origin.1, &text, HUD_FONT_SCALE, TEXT_COLOR);
        Ok(())
    }

    fn end_frame(&mut self) {
        self.clock.tick(self.fps_limit);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::fps_counter();
    let mut counter = FpsCounter {
        clock: FrameClock::new(),
        fps_limit: settings.fps_limit,
        origin: ((settings.width / 2) as i32, (settings.height / 2) as i32),
    };

    match platform::run(&settings, &mut counter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
