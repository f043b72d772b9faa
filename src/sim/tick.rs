//! Per-tick simulation step
//!
//! Input is applied first, then every ball advances once (unless motion is
//! paused). Drawing happens afterwards in the renderer.

use rand::Rng;

use super::input::InputEvent;
use super::state::Scene;

/// Apply every queued input event in arrival order
pub fn apply_inputs<R, I>(scene: &mut Scene, events: I, rng: &mut R)
where
    R: Rng,
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        scene.apply(event, rng);
    }
}

/// Advance every ball one step if motion is enabled
pub fn advance_balls(scene: &mut Scene) {
    if !scene.params.motion_enabled {
        return;
    }
    let bounds = scene.playfield.bounds();
    let time_scale = scene.params.time_scale;
    for ball in &mut scene.balls {
        ball.advance(time_scale, bounds);
    }
}

/// Inputs then motion for one tick
pub fn tick<R, I>(scene: &mut Scene, events: I, rng: &mut R)
where
    R: Rng,
    I: IntoIterator<Item = InputEvent>,
{
    apply_inputs(scene, events, rng);
    advance_balls(scene);
}
