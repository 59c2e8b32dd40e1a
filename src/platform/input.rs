//! Input events delivered between ticks

use glam::Vec2;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Launch the ball
    Space,
    /// Pause toggle ("P")
    Pause,
}

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Pointer click in surface coordinates
    Click(Vec2),
}
