//! Scene state and runtime simulation parameters
//!
//! Everything the update loop mutates lives in `Scene` and is passed around
//! explicitly.

use glam::Vec2;
use rand::Rng;

use super::ball::Ball;
use super::drag::DragGesture;
use super::input::{InputEvent, PointerButton, Toggle};
use crate::consts::*;
use crate::settings::Settings;

/// Size of the area balls bounce in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: u32,
    pub height: u32,
}

impl Playfield {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Per-axis divisor mapping a drag vector to a velocity
    pub fn drag_divisor(&self) -> Vec2 {
        Vec2::new(
            (self.width / DRAG_DIVISOR).max(1) as f32,
            (self.height / DRAG_DIVISOR).max(1) as f32,
        )
    }
}

/// Runtime-adjustable parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    /// Multiplier on per-tick displacement. Unbounded; negative runs backwards.
    pub time_scale: f32,
    pub render_trails: bool,
    pub motion_enabled: bool,
    pub recording: bool,
    pub fps_limit: u32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            render_trails: false,
            motion_enabled: true,
            recording: false,
            fps_limit: FPS_LIMIT,
        }
    }
}

impl SimParams {
    pub fn toggle(&mut self, toggle: Toggle) {
        let flag = match toggle {
            Toggle::Recording => &mut self.recording,
            Toggle::Motion => &mut self.motion_enabled,
            Toggle::Trails => &mut self.render_trails,
        };
        *flag = !*flag;
        log::info!("{:?} {}", toggle, if *flag { "on" } else { "off" });
    }
}

/// Balls plus interaction state
#[derive(Debug, Clone)]
pub struct Scene {
    pub playfield: Playfield,
    /// Oldest first; right-click pops the newest
    pub balls: Vec<Ball>,
    pub drag: DragGesture,
    /// Last known pointer position, `None` when outside the window
    pub pointer: Option<Vec2>,
    pub params: SimParams,
    pub ball_radius: f32,
    pub ball_color: [u8; 3],
}

impl Scene {
    pub fn new(playfield: Playfield) -> Self {
        Self {
            playfield,
            balls: Vec::new(),
            drag: DragGesture::Idle,
            pointer: None,
            params: SimParams::default(),
            ball_radius: BALL_RADIUS,
            ball_color: BALL_COLOR,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut scene = Self::new(Playfield::new(settings.width, settings.height));
        scene.params = SimParams {
            time_scale: settings.time_scale,
            render_trails: settings.render_trails,
            motion_enabled: settings.motion_enabled,
            recording: settings.recording,
            fps_limit: settings.fps_limit,
        };
        scene.ball_radius = settings.ball_radius;
        scene.ball_color = settings.ball_color;
        scene
    }

    /// Apply one input event
    pub fn apply<R: Rng>(&mut self, event: InputEvent, rng: &mut R) {
        match event {
            InputEvent::ButtonPressed { button, pos } => {
                self.pointer = Some(pos);
                match button {
                    PointerButton::Primary => self.drag.press(pos),
                    PointerButton::Secondary => {
                        self.remove_newest();
                    }
                    PointerButton::Middle => {
                        let ball = Ball::random(rng, self.playfield, self.ball_radius, Some(pos))
                            .with_style(self.ball_radius, self.ball_color);
                        self.balls.push(ball);
                    }
                }
            }
            InputEvent::ButtonReleased { button, pos } => {
                self.pointer = Some(pos);
                if button == PointerButton::Primary {
                    self.drag.release(pos);
                    self.launch_completed();
                }
            }
            InputEvent::PointerMoved { pos } => self.pointer = Some(pos),
            InputEvent::PointerLeft => self.pointer = None,
            InputEvent::Wheel { delta_y } => self.adjust_time_scale(delta_y),
            InputEvent::Toggle(toggle) => self.params.toggle(toggle),
        }
    }

    /// Velocity for a drag from `start` to `end`
    pub fn launch_velocity(&self, start: Vec2, end: Vec2) -> Vec2 {
        (end - start) / self.playfield.drag_divisor()
    }

    /// Turn a completed drag into a ball at the drag start
    pub fn launch_completed(&mut self) {
        let Some((start, end)) = self.drag.take_completed() else {
            return;
        };
        let vel = self.launch_velocity(start, end);
        log::debug!("Launch from {start} with velocity {vel}");
        self.spawn_ball(start, vel);
    }

    pub fn spawn_ball(&mut self, pos: Vec2, vel: Vec2) {
        self.balls
            .push(Ball::new(pos, vel).with_style(self.ball_radius, self.ball_color));
    }

    /// Spawn `count` balls at random spots
    pub fn spawn_random<R: Rng>(&mut self, rng: &mut R, count: usize) {
        for _ in 0..count {
            let ball = Ball::random(rng, self.playfield, self.ball_radius, None)
                .with_style(self.ball_radius, self.ball_color);
            self.balls.push(ball);
        }
    }

    /// Drop the most recently added ball, if any
    pub fn remove_newest(&mut self) -> Option<Ball> {
        self.balls.pop()
    }

    pub fn adjust_time_scale(&mut self, wheel_delta_y: f32) {
        self.params.time_scale += wheel_delta_y / WHEEL_DIVISOR;
    }

    /// Rubber band endpoints while a drag is in progress
    pub fn rubber_band(&self) -> Option<(Vec2, Vec2)> {
        Some((self.drag.anchor()?, self.pointer?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn scene() -> Scene {
        Scene::new(Playfield::new(800, 600))
    }

    fn press(button: PointerButton, x: f32, y: f32) -> InputEvent {
        InputEvent::ButtonPressed {
            button,
            pos: Vec2::new(x, y),
        }
    }

    fn release(button: PointerButton, x: f32, y: f32) -> InputEvent {
        InputEvent::ButtonReleased {
            button,
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_drag_spawns_one_ball() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();

        s.apply(press(PointerButton::Primary, 100.0, 100.0), &mut rng);
        assert!(s.balls.is_empty());
        s.apply(release(PointerButton::Primary, 260.0, 40.0), &mut rng);

        assert_eq!(s.balls.len(), 1);
        assert_eq!(s.balls[0].pos, Vec2::new(100.0, 100.0));
        // (160 / 80, -60 / 60)
        assert_eq!(s.balls[0].vel, Vec2::new(2.0, -1.0));
        assert!(s.drag.is_idle());
    }

    #[test]
    fn test_launch_without_completed_drag_is_noop() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();
        s.launch_completed();
        assert!(s.balls.is_empty());

        s.apply(release(PointerButton::Primary, 50.0, 50.0), &mut rng);
        assert!(s.balls.is_empty());

        s.apply(press(PointerButton::Primary, 50.0, 50.0), &mut rng);
        s.launch_completed();
        assert!(s.balls.is_empty());
        assert!(!s.drag.is_idle());
    }

    #[test]
    fn test_drag_divisor_uses_integer_tenth() {
        let s = Scene::new(Playfield::new(805, 609));
        assert_eq!(s.playfield.drag_divisor(), Vec2::new(80.0, 60.0));
    }

    #[test]
    fn test_right_click_on_empty_is_noop() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();
        s.apply(press(PointerButton::Secondary, 5.0, 5.0), &mut rng);
        assert!(s.balls.is_empty());
    }

    #[test]
    fn test_right_click_removes_newest() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();
        s.spawn_ball(Vec2::new(100.0, 100.0), Vec2::ZERO);
        s.spawn_ball(Vec2::new(200.0, 200.0), Vec2::ZERO);
        s.spawn_ball(Vec2::new(300.0, 300.0), Vec2::ZERO);

        s.apply(press(PointerButton::Secondary, 5.0, 5.0), &mut rng);
        assert_eq!(s.balls.len(), 2);
        assert_eq!(s.balls[1].pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_wheel_adjusts_time_scale_unbounded() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();
        s.apply(InputEvent::Wheel { delta_y: 10.0 }, &mut rng);
        assert!((s.params.time_scale - 2.0).abs() < 1e-6);

        for _ in 0..3 {
            s.apply(InputEvent::Wheel { delta_y: -10.0 }, &mut rng);
        }
        assert!((s.params.time_scale + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_toggles_flip_only_their_flag() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();
        let before = s.params.clone();

        s.apply(InputEvent::Toggle(Toggle::Trails), &mut rng);
        assert!(s.params.render_trails);
        assert_eq!(s.params.motion_enabled, before.motion_enabled);
        assert_eq!(s.params.recording, before.recording);

        s.apply(InputEvent::Toggle(Toggle::Motion), &mut rng);
        s.apply(InputEvent::Toggle(Toggle::Recording), &mut rng);
        assert!(!s.params.motion_enabled);
        assert!(s.params.recording);
        assert_eq!(s.params.time_scale, before.time_scale);
    }

    #[test]
    fn test_rubber_band_follows_pointer() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = scene();
        assert_eq!(s.rubber_band(), None);

        s.apply(press(PointerButton::Primary, 10.0, 10.0), &mut rng);
        s.apply(InputEvent::PointerMoved { pos: Vec2::new(40.0, 30.0) }, &mut rng);
        assert_eq!(
            s.rubber_band(),
            Some((Vec2::new(10.0, 10.0), Vec2::new(40.0, 30.0)))
        );

        s.apply(InputEvent::PointerLeft, &mut rng);
        assert_eq!(s.rubber_band(), None);
    }

    #[test]
    fn test_middle_click_spawns_near_pointer() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut s = scene();
        s.apply(press(PointerButton::Middle, 400.0, 300.0), &mut rng);
        assert_eq!(s.balls.len(), 1);
        assert!((s.balls[0].pos.x - 400.0).abs() <= 80.0);
    }
}
