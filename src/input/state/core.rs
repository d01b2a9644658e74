//! Keyboard session: the single owner of mode, zone, and pointer state.

use crate::config::Config;
use crate::input::events::PointerId;
use crate::input::geometry::{DrawRect, Quadrant};
use crate::input::listener::KeyboardListener;
use crate::input::pointer::{NoiseThreshold, PointerTracker};
use crate::input::queue::PointerQueue;
use crate::input::resolver::QuadrantResolver;
use crate::layout::{LayoutTable, Mode, ModeGraph, Token, ZONE_SIZE, current_table};
use log::{debug, warn};
use std::collections::HashMap;

/// Runtime settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub initial_mode: Mode,
    pub noise: NoiseThreshold,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Letters,
            noise: NoiseThreshold::default(),
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            initial_mode: config.keyboard.initial_mode(),
            noise: NoiseThreshold {
                time_ms: config.keyboard.noise_threshold_time_ms,
                distance: config.keyboard.noise_threshold_distance,
            },
        }
    }
}

/// What the renderer should draw right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleGrid {
    /// No finger down: the whole 9×9 table
    ZoomedOut(&'static LayoutTable),
    /// A finger is down: the 3×3 zone it selected, magnified
    ZoomedIn {
        quadrant: Quadrant,
        cells: [[Token; ZONE_SIZE]; ZONE_SIZE],
    },
}

/// One keyboard instance.
///
/// Holds the active mode, the current zone, the pointer trackers and their
/// coordination queue, and the injected listener. All touch events for the
/// keyboard go through this object on a single thread.
pub struct KeyboardSession<L: KeyboardListener> {
    pub(super) modes: ModeGraph,
    pub(super) resolver: QuadrantResolver,
    pub(super) queue: PointerQueue,
    pub(super) trackers: HashMap<PointerId, PointerTracker>,
    pub(super) draw_rect: Option<DrawRect>,
    pub(super) noise: NoiseThreshold,
    pub(super) listener: L,
}

impl<L: KeyboardListener> KeyboardSession<L> {
    pub fn new(listener: L, settings: SessionSettings) -> Self {
        Self {
            modes: ModeGraph::new(settings.initial_mode),
            resolver: QuadrantResolver::new(),
            queue: PointerQueue::new(),
            trackers: HashMap::new(),
            draw_rect: None,
            noise: settings.noise,
            listener,
        }
    }

    /// Creates a session with default settings.
    pub fn with_listener(listener: L) -> Self {
        Self::new(listener, SessionSettings::default())
    }

    pub fn mode(&self) -> Mode {
        self.modes.active()
    }

    pub fn current_table(&self) -> &'static LayoutTable {
        current_table(self.modes.active())
    }

    /// Forces the active mode, e.g. when the host restores a page.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.modes.switch_to(mode);
    }

    /// Forces the active mode from a raw id; unknown ids reset to letters.
    pub fn switch_mode_raw(&mut self, id: u8) -> Mode {
        self.modes.switch_to_raw(id)
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.resolver.quadrant()
    }

    pub fn draw_rect(&self) -> Option<DrawRect> {
        self.draw_rect
    }

    /// Updates the on-screen bounds used to normalize touches.
    ///
    /// Returns false (and keeps the previous rectangle) for a degenerate size.
    pub fn draw_rect_update(&mut self, left: i32, top: i32, width: i32, height: i32) -> bool {
        match DrawRect::new(left, top, width, height) {
            Some(rect) => {
                debug!("Draw rect updated to {rect:?}");
                self.draw_rect = Some(rect);
                true
            }
            None => {
                warn!("Ignoring degenerate draw rect {width}x{height} at ({left}, {top})");
                false
            }
        }
    }

    pub fn noise_threshold(&self) -> NoiseThreshold {
        self.noise
    }

    pub fn set_noise_threshold(&mut self, noise: NoiseThreshold) {
        self.noise = noise;
    }

    pub fn tracker(&self, id: PointerId) -> Option<&PointerTracker> {
        self.trackers.get(&id)
    }

    /// Number of pointers currently registered in the coordination queue.
    pub fn active_pointer_count(&self) -> usize {
        self.queue.len()
    }

    /// Registered pointers, oldest first.
    pub fn active_pointers(&self) -> &[PointerId] {
        self.queue.ids()
    }

    /// Whether any tracked finger is down.
    pub fn is_pressed(&self) -> bool {
        self.trackers.values().any(PointerTracker::is_down)
    }

    pub fn visible_grid(&self) -> VisibleGrid {
        let table = self.current_table();
        match self.resolver.quadrant() {
            Some(quadrant) if self.is_pressed() => VisibleGrid::ZoomedIn {
                quadrant,
                cells: table.zone(quadrant.x, quadrant.y),
            },
            _ => VisibleGrid::ZoomedOut(table),
        }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
