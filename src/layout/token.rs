//! Grid cell payloads.

use super::mode::Mode;
use super::special::{KeyCode, MetaState, SpecialKey};

/// The atomic content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Inert slot
    Empty,
    /// Text committed verbatim (may be more than one character, e.g. emoji sequences)
    Literal(&'static str),
    /// Switches the active mode, produces no text
    ModeSwitch(Mode),
    /// Non-text action sent to the host as a key event pair
    Special(SpecialKey),
}

/// Coarse classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Empty,
    Literal,
    ModeSwitch,
    SpecialKey,
}

impl Default for Token {
    fn default() -> Self {
        Self::Empty
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        classify(*self)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn is_mode_switch(&self) -> bool {
        matches!(self, Self::ModeSwitch(_))
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Self::Special(_))
    }

    /// Whether releasing this token should force-release every other pointer.
    ///
    /// No cell on this keyboard holds a modifier (shift is a mode switch, not a
    /// held key), so this is always false; the coordination queue still asks.
    pub fn is_modifier(&self) -> bool {
        false
    }

    /// Short text a renderer draws for this cell.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Literal(" ") => "⊵",
            Self::Literal(text) => *text,
            Self::ModeSwitch(mode) => mode.label(),
            Self::Special(key) => key.label(),
        }
    }
}

/// Classifies a token. Pure: depends on nothing but the token.
pub fn classify(token: Token) -> TokenKind {
    match token {
        Token::Empty => TokenKind::Empty,
        Token::Literal(_) => TokenKind::Literal,
        Token::ModeSwitch(_) => TokenKind::ModeSwitch,
        Token::Special(_) => TokenKind::SpecialKey,
    }
}

/// Returns the key code and meta state for a special-key token, `None` for
/// every other kind.
pub fn special_key_info(token: Token) -> Option<(KeyCode, MetaState)> {
    match token {
        Token::Special(key) => Some((key.key_code(), key.meta_state())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Token; 5] = [
        Token::Empty,
        Token::Literal("a"),
        Token::Literal(" "),
        Token::ModeSwitch(Mode::Numeric),
        Token::Special(SpecialKey::Copy),
    ];

    #[test]
    fn test_classify_each_variant() {
        assert_eq!(classify(Token::Empty), TokenKind::Empty);
        assert_eq!(classify(Token::Literal("@")), TokenKind::Literal);
        assert_eq!(
            classify(Token::ModeSwitch(Mode::Emoji)),
            TokenKind::ModeSwitch
        );
        assert_eq!(
            classify(Token::Special(SpecialKey::Enter)),
            TokenKind::SpecialKey
        );
    }

    #[test]
    fn test_classification_is_stable() {
        for token in SAMPLES {
            let first = (classify(token), special_key_info(token));
            for _ in 0..3 {
                assert_eq!((classify(token), special_key_info(token)), first);
            }
            assert_eq!(token.kind(), first.0);
        }
    }

    #[test]
    fn test_predicates_are_exclusive() {
        for token in SAMPLES {
            let flags = [token.is_literal(), token.is_mode_switch(), token.is_special()];
            assert!(flags.iter().filter(|f| **f).count() <= 1, "{token:?}");
            assert!(!token.is_modifier());
        }
    }

    #[test]
    fn test_special_key_info() {
        assert_eq!(
            special_key_info(Token::Special(SpecialKey::Backspace)),
            Some((KeyCode(67), MetaState::NONE))
        );
        assert_eq!(
            special_key_info(Token::Special(SpecialKey::Paste)),
            Some((KeyCode(50), MetaState::CTRL))
        );
        assert_eq!(special_key_info(Token::Literal("x")), None);
        assert_eq!(special_key_info(Token::Empty), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Token::Empty.label(), "");
        assert_eq!(Token::Literal(" ").label(), "⊵");
        assert_eq!(Token::Literal("q").label(), "q");
        assert_eq!(Token::ModeSwitch(Mode::Numeric).label(), "123");
        assert_eq!(Token::Special(SpecialKey::Enter).label(), "↲");
    }
}
