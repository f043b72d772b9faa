//! Platform-independent input events consumed by the simulation

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Flags flipped from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Recording,
    Motion,
    Trails,
}

/// One discrete input, already mapped to playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ButtonPressed { button: PointerButton, pos: Vec2 },
    ButtonReleased { button: PointerButton, pos: Vec2 },
    PointerMoved { pos: Vec2 },
    /// Pointer left the window
    PointerLeft,
    /// Wheel motion in notches (positive = away from the user)
    Wheel { delta_y: f32 },
    Toggle(Toggle),
}
