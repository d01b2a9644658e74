//! Keyboard pages and the transitions between them.

use log::{debug, warn};
use std::fmt;
use thiserror::Error;

/// Keyboard page selection.
///
/// Exactly one mode is active per session. Each mode owns one layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Lowercase letters (default)
    Letters,
    /// Uppercase for the next literal only
    CapitalizedOnce,
    /// Uppercase until explicitly switched away
    CapsLocked,
    /// Digits and arithmetic
    Numeric,
    /// Punctuation, brackets and clipboard keys
    Symbols,
    /// Lowercase accented letters
    Accents1,
    /// Uppercase accented letters
    Accents2,
    /// Mode picker whose cells are all mode switches
    ChangeModeMenu,
    /// Emoji page
    Emoji,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Letters
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyboard mode '{0}'")]
pub struct ModeParseError(pub String);

impl Mode {
    /// Every mode, in id order.
    pub const ALL: [Mode; 9] = [
        Mode::Letters,
        Mode::CapitalizedOnce,
        Mode::CapsLocked,
        Mode::Numeric,
        Mode::Symbols,
        Mode::Accents1,
        Mode::Accents2,
        Mode::ChangeModeMenu,
        Mode::Emoji,
    ];

    /// Stable numeric id, the index into [`Mode::ALL`].
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Kebab-case name used by the config file and CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::CapitalizedOnce => "capitalized-once",
            Self::CapsLocked => "caps-locked",
            Self::Numeric => "numeric",
            Self::Symbols => "symbols",
            Self::Accents1 => "accents1",
            Self::Accents2 => "accents2",
            Self::ChangeModeMenu => "change-mode-menu",
            Self::Emoji => "emoji",
        }
    }

    /// Label drawn on a cell that switches to this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Letters => "abc",
            Self::CapitalizedOnce => "Abc",
            Self::CapsLocked => "ABC",
            Self::Numeric => "123",
            Self::Symbols => "#$%",
            Self::Accents1 => "Áßç",
            Self::Accents2 => "ÀÉÇ",
            Self::ChangeModeMenu => "☰",
            Self::Emoji => "☺",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

/// Mode state machine.
///
/// Transitions happen only as the consequence of a completed gesture:
/// a mode-switch token always succeeds, and a literal may end one-shot
/// capitalization.
#[derive(Debug, Clone, Default)]
pub struct ModeGraph {
    active: Mode,
}

impl ModeGraph {
    pub fn new(initial: Mode) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Mode {
        self.active
    }

    /// Applies a mode-switch token. Never rejected.
    pub fn switch_to(&mut self, target: Mode) {
        if self.active != target {
            debug!("Mode {} -> {}", self.active, target);
        }
        self.active = target;
    }

    /// Switches using a raw mode id from an untrusted source.
    ///
    /// Unknown ids reset the graph to [`Mode::Letters`].
    pub fn switch_to_raw(&mut self, id: u8) -> Mode {
        let target = Mode::from_id(id).unwrap_or_else(|| {
            warn!("Invalid mode id {id}, resetting to {}", Mode::Letters);
            Mode::Letters
        });
        self.switch_to(target);
        target
    }

    /// Applies the post-literal rule: a one-shot capital reverts to letters
    /// after any literal except a single space.
    pub fn after_literal(&mut self, text: &str) {
        if self.active == Mode::CapitalizedOnce && text != " " {
            self.switch_to(Mode::Letters);
        }
    }
}
