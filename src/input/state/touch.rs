use crate::input::dispatch::{DispatchOutcome, dispatch};
use crate::input::events::{PointerId, TouchEvent, TouchPhase};
use crate::input::listener::KeyboardListener;
use crate::input::pointer::PointerTracker;
use crate::layout::Token;
use log::{debug, warn};

use super::KeyboardSession;

impl<L: KeyboardListener> KeyboardSession<L> {
    /// Routes one touch event to the matching gesture handler.
    ///
    /// Returns what the release did; every other phase yields
    /// [`DispatchOutcome::Nothing`].
    pub fn touch_event(&mut self, event: TouchEvent) -> DispatchOutcome {
        let TouchEvent {
            pointer_id,
            phase,
            x,
            y,
            event_time,
        } = event;
        match phase {
            TouchPhase::Down => {
                self.on_down(pointer_id, x, y, event_time);
                DispatchOutcome::Nothing
            }
            TouchPhase::Move => {
                self.on_move(pointer_id, x, y, event_time);
                DispatchOutcome::Nothing
            }
            TouchPhase::Up => self.on_up(pointer_id, x, y, event_time),
            TouchPhase::Cancel => {
                self.on_cancel(pointer_id, event_time);
                DispatchOutcome::Nothing
            }
        }
    }

    /// Processes a finger touching down.
    ///
    /// # Behavior
    /// - A bounce (too soon and too close after this pointer's previous down)
    ///   is ignored and the gesture will not emit
    /// - Otherwise the pointer joins the coordination queue and its position
    ///   selects the zone
    pub fn on_down(&mut self, id: PointerId, x: i32, y: i32, time: u64) {
        let noise = self.noise;
        let tracker = self
            .trackers
            .entry(id)
            .or_insert_with(|| PointerTracker::new(id));

        if tracker.check_noise(x, y, time, noise) {
            warn!("[{id}] Ignoring potential noise down at ({x}, {y}) t={time}");
            let was_down = tracker.is_down();
            tracker.cancel_tracking();
            self.queue.remove(id);
            // A missed up left this pointer pressed
            if was_down {
                self.listener.on_key_released();
            }
            return;
        }

        if tracker.is_down() {
            debug!("[{id}] Down while already down; restarting gesture");
        }
        debug!("[{id}] down ({x}, {y}) t={time}");
        tracker.begin(x, y, time);
        self.queue.add(id);
        self.listener.on_key_pressed();

        match self.draw_rect {
            Some(rect) => {
                self.resolver.touch_down(x, y, &rect);
            }
            None => {
                warn!("[{id}] Touch before any draw rect; gesture will resolve to nothing");
                self.resolver.reset();
            }
        }
    }

    /// Processes pointer motion. Only the last position is updated; addressing
    /// uses the down and up positions alone.
    pub fn on_move(&mut self, id: PointerId, x: i32, y: i32, _time: u64) {
        let Some(tracker) = self.trackers.get_mut(&id) else {
            return;
        };
        if tracker.moved(x, y) {
            self.listener.invalidate();
        }
    }

    /// Processes a finger lifting.
    ///
    /// # Behavior
    /// - Older pointers are phantom-released first (all others, if this pointer
    ///   holds a modifier)
    /// - The release position picks the cell inside the zone and the token is
    ///   dispatched
    /// - Untracked gestures (noise, phantom-released, canceled) end silently
    pub fn on_up(&mut self, id: PointerId, x: i32, y: i32, time: u64) -> DispatchOutcome {
        let Some(tracker) = self.trackers.get(&id) else {
            debug!("[{id}] Up for unknown pointer ignored");
            return DispatchOutcome::Nothing;
        };

        if !tracker.is_down() {
            debug!("[{id}] Up for untracked gesture ignored");
            if let Some(tracker) = self.trackers.get_mut(&id) {
                tracker.finish(x, y);
            }
            self.queue.remove(id);
            return DispatchOutcome::Nothing;
        }

        let released = if tracker.is_modifier() {
            self.queue.release_all_except(id)
        } else {
            let trackers = &self.trackers;
            self.queue.release_all_older_than(id, |other| {
                trackers.get(&other).is_some_and(PointerTracker::is_modifier)
            })
        };
        for other in released {
            self.on_phantom_up(other, time);
        }

        if let Some(tracker) = self.trackers.get_mut(&id) {
            tracker.finish(x, y);
        }
        self.listener.on_key_released();

        let token = match self.draw_rect {
            Some(rect) => self.resolver.touch_up(x, y, &rect, self.modes.active()),
            None => Token::Empty,
        };
        debug!("[{id}] up ({x}, {y}) t={time} -> {token:?}");
        let outcome = dispatch(token, &mut self.modes, &mut self.listener);

        self.queue.remove(id);
        outcome
    }

    /// Force-releases a pointer because a newer one went up first.
    ///
    /// Only the pressed visual state is reset; the pointer's own later up
    /// emits nothing.
    fn on_phantom_up(&mut self, id: PointerId, time: u64) {
        let Some(tracker) = self.trackers.get_mut(&id) else {
            return;
        };
        debug!("[{id}] phantom up t={time}");
        tracker.cancel_tracking();
        self.queue.remove(id);
        self.listener.on_key_released();
    }

    /// Processes a cancel on one pointer. A cancel invalidates the whole
    /// multi-touch gesture, so every pointer is reset.
    pub fn on_cancel(&mut self, id: PointerId, time: u64) {
        debug!("[{id}] cancel t={time}");
        self.cancel_all();
    }

    /// Clears the coordination queue and returns every pointer to idle
    /// without emitting anything.
    pub fn cancel_all(&mut self) {
        let queued = self.queue.drain();
        for tracker in self.trackers.values_mut() {
            if tracker.is_down() {
                self.listener.on_key_released();
            }
            tracker.reset();
        }
        self.resolver.reset();
        if !queued.is_empty() {
            debug!("Canceled pointers {queued:?}");
        }
    }
}
