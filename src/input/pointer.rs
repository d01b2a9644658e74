//! Per-pointer gesture tracking.

use super::events::PointerId;

/// Down-to-down noise filter thresholds.
///
/// A down arriving less than `time_ms` after the previous down on the same
/// pointer, and closer than `distance` pixels to that pointer's last known
/// position, is treated as a bounce and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseThreshold {
    pub time_ms: u64,
    pub distance: i32,
}

impl NoiseThreshold {
    pub const fn disabled() -> Self {
        Self {
            time_ms: 0,
            distance: 0,
        }
    }
}

impl Default for NoiseThreshold {
    fn default() -> Self {
        Self {
            time_ms: 40,
            distance: 12,
        }
    }
}

/// Lifecycle of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress
    Idle,
    /// Finger down and tracked; its release will resolve a token
    Down,
    /// Finger still down but no longer allowed to emit (noise, phantom-up)
    Canceled,
}

/// State for one physical touch.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    pub id: PointerId,
    state: GestureState,
    start: (i32, i32),
    start_time: u64,
    last: (i32, i32),
    last_down_time: Option<u64>,
    // Always false: sliding between keys does not exist on a zoom grid, but
    // every gesture boundary still clears it.
    in_dragging_finger: bool,
}

impl PointerTracker {
    pub fn new(id: PointerId) -> Self {
        Self {
            id,
            state: GestureState::Idle,
            start: (0, 0),
            start_time: 0,
            last: (0, 0),
            last_down_time: None,
            in_dragging_finger: false,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// True while the gesture will emit on release.
    pub fn is_down(&self) -> bool {
        self.state == GestureState::Down
    }

    /// True while a finger is on the surface, tracked or not.
    pub fn is_touching(&self) -> bool {
        self.state != GestureState::Idle
    }

    pub fn start_position(&self) -> (i32, i32) {
        self.start
    }

    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    pub fn last_position(&self) -> (i32, i32) {
        self.last
    }

    pub fn is_in_dragging_finger(&self) -> bool {
        self.in_dragging_finger
    }

    /// Whether this pointer holds a modifier-class key.
    pub fn is_modifier(&self) -> bool {
        false
    }

    /// Checks a new down against the noise threshold, then records its time.
    pub fn check_noise(&mut self, x: i32, y: i32, time: u64, threshold: NoiseThreshold) -> bool {
        let previous = self.last_down_time.replace(time);
        let Some(previous) = previous else {
            return false;
        };
        if time.saturating_sub(previous) >= threshold.time_ms {
            return false;
        }
        let dx = f64::from(x) - f64::from(self.last.0);
        let dy = f64::from(y) - f64::from(self.last.1);
        let distance = dx.hypot(dy);
        distance < f64::from(threshold.distance)
    }

    /// Starts a tracked gesture.
    pub fn begin(&mut self, x: i32, y: i32, time: u64) {
        self.state = GestureState::Down;
        self.start = (x, y);
        self.start_time = time;
        self.last = (x, y);
        self.reset_drag_flags();
    }

    /// Records movement. Returns whether the pointer is on the surface.
    pub fn moved(&mut self, x: i32, y: i32) -> bool {
        if !self.is_touching() {
            return false;
        }
        self.last = (x, y);
        true
    }

    /// Stops this gesture from emitting; the finger may still be down.
    pub fn cancel_tracking(&mut self) {
        if self.state == GestureState::Down || self.state == GestureState::Idle {
            self.state = GestureState::Canceled;
        }
        self.reset_drag_flags();
    }

    /// Ends the gesture at (`x`, `y`). Returns whether it may emit a token.
    pub fn finish(&mut self, x: i32, y: i32) -> bool {
        let emits = self.is_down();
        self.last = (x, y);
        self.state = GestureState::Idle;
        self.reset_drag_flags();
        emits
    }

    /// Drops the gesture without emitting.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.reset_drag_flags();
    }

    fn reset_drag_flags(&mut self) {
        self.in_dragging_finger = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_down_is_never_noise() {
        let mut tracker = PointerTracker::new(0);
        assert!(!tracker.check_noise(10, 10, 0, NoiseThreshold::default()));
    }

    #[test]
    fn test_quick_close_down_is_noise() {
        let threshold = NoiseThreshold::default();
        let mut tracker = PointerTracker::new(0);
        assert!(!tracker.check_noise(100, 100, 1000, threshold));
        tracker.begin(100, 100, 1000);
        tracker.finish(100, 100);

        assert!(tracker.check_noise(103, 104, 1020, threshold));
    }

    #[test]
    fn test_slow_or_far_down_is_not_noise() {
        let threshold = NoiseThreshold::default();
        let mut tracker = PointerTracker::new(0);
        tracker.check_noise(100, 100, 1000, threshold);
        tracker.begin(100, 100, 1000);
        tracker.finish(100, 100);

        // Far away, quickly
        assert!(!tracker.check_noise(400, 100, 1010, threshold));
        // Same spot, but long after the last down
        assert!(!tracker.check_noise(100, 100, 2000, threshold));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let threshold = NoiseThreshold::default();
        let mut tracker = PointerTracker::new(0);
        tracker.check_noise(i32::MAX, i32::MIN, 1000, threshold);
        tracker.begin(i32::MAX, i32::MIN, 1000);
        tracker.finish(i32::MAX, i32::MIN);

        assert!(!tracker.check_noise(i32::MIN, i32::MAX, 1010, threshold));
        tracker.begin(i32::MIN, i32::MAX, 1010);
        tracker.finish(i32::MIN, i32::MAX);
        assert!(tracker.check_noise(i32::MIN, i32::MAX, 1020, threshold));
    }

    #[test]
    fn test_disabled_threshold_accepts_everything() {
        let mut tracker = PointerTracker::new(0);
        tracker.check_noise(0, 0, 5, NoiseThreshold::disabled());
        assert!(!tracker.check_noise(0, 0, 5, NoiseThreshold::disabled()));
    }

    #[test]
    fn test_lifecycle() {
        let mut tracker = PointerTracker::new(3);
        assert_eq!(tracker.state(), GestureState::Idle);
        assert!(!tracker.moved(1, 1));

        tracker.begin(10, 20, 100);
        assert!(tracker.is_down());
        assert!(tracker.moved(30, 40));
        assert_eq!(tracker.last_position(), (30, 40));
        assert_eq!(tracker.start_position(), (10, 20));

        assert!(tracker.finish(50, 60));
        assert_eq!(tracker.state(), GestureState::Idle);
        assert_eq!(tracker.last_position(), (50, 60));
    }

    #[test]
    fn test_canceled_gesture_does_not_emit() {
        let mut tracker = PointerTracker::new(1);
        tracker.begin(0, 0, 0);
        tracker.cancel_tracking();
        assert_eq!(tracker.state(), GestureState::Canceled);
        assert!(tracker.is_touching());
        assert!(tracker.moved(5, 5));
        assert!(!tracker.finish(5, 5));
        assert!(!tracker.is_in_dragging_finger());
    }
}
