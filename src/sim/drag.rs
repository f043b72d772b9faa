//! Drag-to-launch gesture

use glam::Vec2;

/// Primary-button drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    /// Button held, start captured
    Dragging { start: Vec2 },
    /// Button released, waiting to be turned into a ball
    Completed { start: Vec2, end: Vec2 },
}

impl DragGesture {
    /// Primary button went down. A press mid-drag restarts the gesture.
    pub fn press(&mut self, pos: Vec2) {
        *self = DragGesture::Dragging { start: pos };
    }

    /// Primary button went up. Ignored unless a drag is in progress.
    pub fn release(&mut self, pos: Vec2) {
        if let DragGesture::Dragging { start } = *self {
            *self = DragGesture::Completed { start, end: pos };
        }
    }

    /// Consume a completed gesture, returning to `Idle`
    pub fn take_completed(&mut self) -> Option<(Vec2, Vec2)> {
        match *self {
            DragGesture::Completed { start, end } => {
                *self = DragGesture::Idle;
                Some((start, end))
            }
            _ => None,
        }
    }

    /// Start point while the button is still held (rubber band anchor)
    pub fn anchor(&self) -> Option<Vec2> {
        match *self {
            DragGesture::Dragging { start } => Some(start),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragGesture::Idle)
    }
}
