//! Outbound capability interface to the host.

use super::events::KeyAction;
use crate::layout::{KeyCode, MetaState};

/// Everything the engine can ask of its collaborators.
///
/// Injected into [`KeyboardSession`](super::KeyboardSession) at construction.
/// The visual notifications default to no-ops so text-only hosts can ignore them.
pub trait KeyboardListener {
    /// Inserts literal text at the cursor.
    fn commit_text(&mut self, text: &str);

    /// Sends one half of a hardware-style key event.
    fn send_key_event(&mut self, key_code: KeyCode, meta: MetaState, action: KeyAction);

    /// A pointer went down; the renderer switches to the zoomed view.
    fn on_key_pressed(&mut self) {}

    /// A pointer was released; the renderer may return to the full grid.
    fn on_key_released(&mut self) {}

    /// Pointer moved; redraw requested.
    fn invalidate(&mut self) {}
}

/// Listener that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl KeyboardListener for NullListener {
    fn commit_text(&mut self, _text: &str) {}

    fn send_key_event(&mut self, _key_code: KeyCode, _meta: MetaState, _action: KeyAction) {}
}

/// One call received by a [`RecordingListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerEvent {
    CommitText(String),
    KeyEvent {
        key_code: KeyCode,
        meta: MetaState,
        action: KeyAction,
    },
    KeyPressed,
    KeyReleased,
    Invalidate,
}

/// Listener that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener {
    events: Vec<ListenerEvent>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ListenerEvent] {
        &self.events
    }

    /// Concatenation of all committed text.
    pub fn committed_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                ListenerEvent::CommitText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Committed text and key events only, without the visual notifications.
    pub fn output_events(&self) -> impl Iterator<Item = &ListenerEvent> {
        self.events.iter().filter(|event| {
            matches!(
                event,
                ListenerEvent::CommitText(_) | ListenerEvent::KeyEvent { .. }
            )
        })
    }

    pub fn count(&self, wanted: &ListenerEvent) -> usize {
        self.events.iter().filter(|event| *event == wanted).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl KeyboardListener for RecordingListener {
    fn commit_text(&mut self, text: &str) {
        self.events.push(ListenerEvent::CommitText(text.to_string()));
    }

    fn send_key_event(&mut self, key_code: KeyCode, meta: MetaState, action: KeyAction) {
        self.events.push(ListenerEvent::KeyEvent {
            key_code,
            meta,
            action,
        });
    }

    fn on_key_pressed(&mut self) {
        self.events.push(ListenerEvent::KeyPressed);
    }

    fn on_key_released(&mut self) {
        self.events.push(ListenerEvent::KeyReleased);
    }

    fn invalidate(&mut self) {
        self.events.push(ListenerEvent::Invalidate);
    }
}
