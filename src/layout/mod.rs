//! Symbol alphabet and the compiled-in 9×9 layout tables.
//!
//! Every page of the keyboard is a [`LayoutTable`] of [`Token`]s addressed by
//! row and column in `0..9`. The active page is chosen by the [`Mode`] held in a
//! [`ModeGraph`]; tokens can themselves switch the mode, so the mode picker is
//! just another table.

pub mod mode;
pub mod special;
pub mod tables;
pub mod token;

pub use mode::{Mode, ModeGraph, ModeParseError};
pub use special::{KeyCode, MetaState, SpecialKey};
pub use tables::{GRID_SIZE, LayoutTable, ZONE_SIZE, current_table};
pub use token::{Token, TokenKind, classify, special_key_info};
