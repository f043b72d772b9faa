//! winit event translation

use std::collections::HashSet;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, VirtualKeyCode};

use crate::sim::{PointerButton, Toggle};

/// Trackpads report pixels; this many count as one wheel notch
const PIXELS_PER_NOTCH: f64 = 50.0;

/// Keys currently held down. winit repeats `Pressed` while a key is held;
/// only the first press of each hold counts.
#[derive(Debug, Default)]
pub struct HeldKeys {
    held: HashSet<VirtualKeyCode>,
}

impl HeldKeys {
    /// Track a key event; true only for a fresh press
    pub fn update(&mut self, key: VirtualKeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => self.held.insert(key),
            ElementState::Released => {
                self.held.remove(&key);
                false
            }
        }
    }
}

pub fn toggle_for_key(key: VirtualKeyCode) -> Option<Toggle> {
    match key {
        VirtualKeyCode::R => Some(Toggle::Recording),
        VirtualKeyCode::F => Some(Toggle::Motion),
        VirtualKeyCode::T => Some(Toggle::Trails),
        _ => None,
    }
}

pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Other(_) => None,
    }
}

/// Vertical wheel motion in notches, positive away from the user
pub fn wheel_notches(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_NOTCH) as f32,
    }
}
