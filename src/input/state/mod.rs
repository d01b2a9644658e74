mod core;
mod touch;

pub use self::core::{KeyboardSession, SessionSettings, VisibleGrid};
