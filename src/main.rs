//! Bouncing Balls entry point
//!
//! Left-drag launches a ball, right-click removes the newest one, middle-click
//! drops a random ball, the wheel changes the time scale. R records a GIF,
//! F freezes motion, T toggles trails.

use std::process::ExitCode;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use bouncing_balls::consts::BACKGROUND;
use bouncing_balls::platform::{self, AppError, Demo};
use bouncing_balls::renderer::{Canvas, draw_scene};
use bouncing_balls::sim::{InputEvent, Scene, advance_balls, apply_inputs};
use bouncing_balls::{FrameRecorder, HudText, Settings};

/// Demo instance holding all state
struct BallsDemo<'a> {
    scene: Scene,
    hud: HudText,
    recorder: &'a mut FrameRecorder,
    rng: Pcg32,
    /// Inputs received since the last frame
    pending: Vec<InputEvent>,
}

impl<'a> BallsDemo<'a> {
    fn new(settings: &Settings, recorder: &'a mut FrameRecorder, mut rng: Pcg32) -> Self {
        let mut scene = Scene::from_settings(settings);
        scene.spawn_random(&mut rng, settings.initial_balls);
        Self {
            scene,
            hud: HudText::new(),
            recorder,
            rng,
            pending: Vec::new(),
        }
    }

    fn telemetry(&self) -> [String; 2] {
        [
            format!("Balls count: {}", self.scene.balls.len()),
            format!("Time speed: {:.1}", self.scene.params.time_scale),
        ]
    }
}

impl Demo for BallsDemo<'_> {
    fn handle_input(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    fn frame(&mut self, canvas: &mut Canvas) -> Result<(), AppError> {
        apply_inputs(&mut self.scene, self.pending.drain(..), &mut self.rng);

        // Record what is currently on screen before drawing over it
        if self.scene.params.recording {
            self.recorder.capture(canvas.as_bytes())?;
        }

        canvas.clear(BACKGROUND);
        advance_balls(&mut self.scene);
        draw_scene(canvas, &self.scene, &mut self.rng);
        self.hud.render(canvas, &self.telemetry());
        Ok(())
    }

    fn end_frame(&mut self) {
        self.hud.tick(self.scene.params.fps_limit);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bouncing balls starting...");

    let settings = Settings::default();
    let rng = Pcg32::from_rng(&mut rand::rng());

    let outcome = FrameRecorder::from_settings(&settings).session(|recorder| {
        let mut demo = BallsDemo::new(&settings, recorder, rng);
        platform::run(&settings, &mut demo)
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
