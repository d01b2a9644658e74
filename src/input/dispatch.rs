//! Turns a resolved token into its external effect.

use super::events::KeyAction;
use super::listener::KeyboardListener;
use crate::layout::{Mode, ModeGraph, SpecialKey, Token};
use log::debug;

/// What [`dispatch`] did with a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Empty cell, or no token was produced
    Nothing,
    /// Active mode changed (or was re-selected)
    ModeChanged { from: Mode, to: Mode },
    /// Text was committed
    Committed(&'static str),
    /// A key down/up pair was sent
    KeySent(SpecialKey),
}

/// Applies `token`: mode switches go to the graph, literals and special keys
/// go to the listener.
pub fn dispatch<L>(token: Token, modes: &mut ModeGraph, listener: &mut L) -> DispatchOutcome
where
    L: KeyboardListener + ?Sized,
{
    let outcome = match token {
        Token::Empty => DispatchOutcome::Nothing,
        Token::ModeSwitch(target) => {
            let from = modes.active();
            modes.switch_to(target);
            DispatchOutcome::ModeChanged { from, to: target }
        }
        Token::Literal(text) => {
            listener.commit_text(text);
            modes.after_literal(text);
            DispatchOutcome::Committed(text)
        }
        Token::Special(key) => {
            let code = key.key_code();
            let meta = key.meta_state();
            listener.send_key_event(code, meta, KeyAction::Down);
            listener.send_key_event(code, meta, KeyAction::Up);
            DispatchOutcome::KeySent(key)
        }
    };
    debug!("Dispatched {token:?}: {outcome:?}");
    outcome
}
