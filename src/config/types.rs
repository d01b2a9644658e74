//! Configuration type definitions.

use crate::input::DrawRect;
use crate::layout::Mode;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Keyboard behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeyboardConfig {
    /// Page shown when the keyboard opens: letters, capitalized-once,
    /// caps-locked, numeric, symbols, accents1, accents2, change-mode-menu, emoji
    #[serde(default = "default_initial_mode")]
    pub initial_mode: String,

    /// Downs closer in time than this to the previous down of the same finger
    /// may be bounces (valid range: 0 - 1000 ms, 0 disables the filter)
    #[serde(default = "default_noise_time")]
    pub noise_threshold_time_ms: u64,

    /// Downs closer than this many pixels to the finger's last position may be
    /// bounces (valid range: 0 - 500)
    #[serde(default = "default_noise_distance")]
    pub noise_threshold_distance: i32,
}

impl KeyboardConfig {
    /// Parses `initial_mode`, falling back to letters for unknown names.
    pub fn initial_mode(&self) -> Mode {
        match self.initial_mode.parse() {
            Ok(mode) => mode,
            Err(err) => {
                warn!("{err}, falling back to letters");
                Mode::Letters
            }
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            initial_mode: default_initial_mode(),
            noise_threshold_time_ms: default_noise_time(),
            noise_threshold_distance: default_noise_distance(),
        }
    }
}

/// On-screen bounds of the keyboard surface, in raw touch coordinates.
///
/// Used by the replay tool when a script does not set its own rectangle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    #[serde(default)]
    pub left: i32,

    #[serde(default)]
    pub top: i32,

    /// Surface width in pixels (valid range: 3 - 20000)
    #[serde(default = "default_surface_size")]
    pub width: i32,

    /// Surface height in pixels (valid range: 3 - 20000)
    #[serde(default = "default_surface_size")]
    pub height: i32,
}

impl SurfaceConfig {
    /// Returns the configured rectangle. A degenerate width or height is
    /// replaced by the default surface size.
    pub fn draw_rect(&self) -> DrawRect {
        let size = |value: i32| {
            if value > 0 {
                value
            } else {
                default_surface_size()
            }
        };
        DrawRect::new_clamped(self.left, self.top, size(self.width), size(self.height))
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            width: default_surface_size(),
            height: default_surface_size(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_initial_mode() -> String {
    Mode::Letters.name().to_string()
}

fn default_noise_time() -> u64 {
    40
}

fn default_noise_distance() -> i32 {
    12
}

fn default_surface_size() -> i32 {
    900
}
