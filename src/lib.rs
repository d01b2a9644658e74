//! Library exports for the quadboard input engine.
//!
//! A virtual keyboard whose 81 symbols per page are addressed by a single tap:
//! the touch-down picks one of nine coarse zones, the release picks one of nine
//! cells inside that zone. Rendering and the host editor connection live
//! outside this crate and talk to it through [`input::KeyboardListener`].

pub mod config;
pub mod input;
pub mod layout;
pub mod replay;

pub use config::Config;
pub use input::{KeyboardListener, KeyboardSession};
pub use layout::{Mode, Token};
