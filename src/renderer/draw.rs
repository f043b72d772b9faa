//! Scene drawing: balls, trails, rubber band

use glam::Vec2;
use rand::Rng;

use super::canvas::Canvas;
use crate::consts::TRAIL_LENGTH;
use crate::sim::{Ball, Scene};

/// Darken one color channel for trail segment `i` of `len`
#[inline]
fn trail_shade(channel: u8, i: u32, len: u32) -> u8 {
    let c = channel as u32;
    (c - c / len * i) as u8
}

/// Fading trail behind a ball, drawn oldest (smallest, darkest) first.
///
/// Each segment is offset backwards along the velocity with a random
/// stretch in [1, 1.5), so the trail shimmers from frame to frame.
pub fn draw_trail<R: Rng>(canvas: &mut Canvas, ball: &Ball, rng: &mut R) {
    let len = TRAIL_LENGTH;
    let [r, g, b] = ball.color;
    for i in (1..=len).rev() {
        let color = [
            trail_shade(r, i, len),
            trail_shade(g, i, len),
            trail_shade(b, i, len),
        ];
        let step = ball.radius * i as f32 / len as f32;
        let center = Vec2::new(
            ball.pos.x - rng.random_range(1.0f32..1.5) * step * ball.vel.x,
            ball.pos.y - rng.random_range(1.0f32..1.5) * step * ball.vel.y,
        );
        let radius = ball.radius - ball.radius / len as f32 * i as f32;
        canvas.fill_circle(center, radius, color);
    }
}

pub fn draw_ball<R: Rng>(canvas: &mut Canvas, ball: &Ball, trails: bool, rng: &mut R) {
    if trails {
        draw_trail(canvas, ball, rng);
    }
    canvas.fill_circle(ball.pos, ball.radius, ball.color);
}

/// Rubber band and every ball, in insertion order
pub fn draw_scene<R: Rng>(canvas: &mut Canvas, scene: &Scene, rng: &mut R) {
    if let Some((start, pointer)) = scene.rubber_band() {
        canvas.draw_line(start, pointer, scene.ball_color);
    }
    for ball in &scene.balls {
        draw_ball(canvas, ball, scene.params.render_trails, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{InputEvent, Playfield, PointerButton};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BLACK: [u8; 3] = [0, 0, 0];

    fn moving_ball() -> Ball {
        Ball::new(Vec2::new(100.0, 50.0), Vec2::new(5.0, 0.0))
    }

    #[test]
    fn test_trail_shade() {
        assert_eq!(trail_shade(255, 1, 10), 230);
        assert_eq!(trail_shade(165, 10, 10), 5);
        assert_eq!(trail_shade(0, 5, 10), 0);
    }

    #[test]
    fn test_trail_drawn_when_enabled() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut canvas = Canvas::new(200, 100);
        draw_ball(&mut canvas, &moving_ball(), true, &mut rng);

        // Behind the ball, outside its own circle
        assert_ne!(canvas.pixel(82, 50), Some(BLACK));
        // Main circle keeps its color
        assert_eq!(canvas.pixel(100, 50), Some([255, 165, 0]));
    }

    #[test]
    fn test_no_trail_when_disabled() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut canvas = Canvas::new(200, 100);
        draw_ball(&mut canvas, &moving_ball(), false, &mut rng);

        assert_eq!(canvas.pixel(82, 50), Some(BLACK));
        assert_eq!(canvas.pixel(100, 50), Some([255, 165, 0]));
    }

    #[test]
    fn test_rubber_band_only_while_dragging() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut scene = Scene::new(Playfield::new(200, 100));
        scene.apply(
            InputEvent::ButtonPressed {
                button: PointerButton::Primary,
                pos: Vec2::new(10.0, 10.0),
            },
            &mut rng,
        );
        scene.apply(InputEvent::PointerMoved { pos: Vec2::new(60.0, 10.0) }, &mut rng);

        let mut canvas = Canvas::new(200, 100);
        draw_scene(&mut canvas, &scene, &mut rng);
        assert_eq!(canvas.pixel(35, 10), Some(scene.ball_color));

        scene.apply(
            InputEvent::ButtonReleased {
                button: PointerButton::Primary,
                pos: Vec2::new(60.0, 10.0),
            },
            &mut rng,
        );
        let mut canvas = Canvas::new(200, 100);
        scene.balls.clear();
        draw_scene(&mut canvas, &scene, &mut rng);
        assert_eq!(canvas.pixel(35, 10), Some(BLACK));
    }
}
