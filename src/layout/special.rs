//! Non-text keys and their host key codes.
//!
//! Codes follow the Android `KeyEvent` numbering since that is what input
//! connections on touch devices expect.

use std::fmt;

/// Host key code sent with a synthesized key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

/// Modifier mask sent with a synthesized key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MetaState(pub u32);

impl MetaState {
    pub const NONE: MetaState = MetaState(0);
    /// Ctrl held, reported as both the generic and the left-ctrl bit.
    pub const CTRL: MetaState = MetaState(0x1000 | 0x2000);

    pub fn contains(self, other: MetaState) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Keys that produce an action rather than text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Enter,
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Search,
    Copy,
    Paste,
}

impl SpecialKey {
    pub fn key_code(self) -> KeyCode {
        KeyCode(match self {
            Self::Enter => 66,
            Self::Backspace => 67,
            Self::ArrowUp => 19,
            Self::ArrowDown => 20,
            Self::ArrowLeft => 21,
            Self::ArrowRight => 22,
            Self::Search => 84,
            Self::Copy => 31,  // C
            Self::Paste => 50, // V
        })
    }

    pub fn meta_state(self) -> MetaState {
        match self {
            Self::Copy | Self::Paste => MetaState::CTRL,
            _ => MetaState::NONE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enter => "↲",
            Self::Backspace => "⇦",
            Self::ArrowLeft => "←",
            Self::ArrowRight => "→",
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Search => "⌕",
            Self::Copy => "⎘",
            Self::Paste => "⎀",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MetaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
