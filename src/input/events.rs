//! Touch event types delivered by the host toolkit.

/// Identifier of one physical touch, stable from down to up.
pub type PointerId = u32;

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger placed on the surface
    Down,
    /// Finger moved while touching
    Move,
    /// Finger lifted
    Up,
    /// Host aborted the gesture (e.g. the view lost focus)
    Cancel,
}

/// A single touch event for one pointer.
///
/// Coordinates are raw surface coordinates; the session normalizes them
/// against the last draw rectangle. `event_time` is in milliseconds on any
/// monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub pointer_id: PointerId,
    pub phase: TouchPhase,
    pub x: i32,
    pub y: i32,
    pub event_time: u64,
}

impl TouchEvent {
    pub fn new(pointer_id: PointerId, phase: TouchPhase, x: i32, y: i32, event_time: u64) -> Self {
        Self {
            pointer_id,
            phase,
            x,
            y,
            event_time,
        }
    }
}

/// Direction of a synthesized key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}
