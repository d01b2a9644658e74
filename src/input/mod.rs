//! Touch handling for the zoom-grid keyboard.
//!
//! Raw touch events come in through [`KeyboardSession`], which runs each
//! pointer's gesture state machine, coordinates concurrent fingers, resolves
//! the down/up pair to a cell of the active layout table, and dispatches the
//! resulting token to the injected [`KeyboardListener`].

pub mod dispatch;
pub mod events;
pub mod geometry;
pub mod listener;
pub mod pointer;
pub mod queue;
pub mod resolver;
pub mod state;

// Re-export commonly used types at module level
pub use dispatch::{DispatchOutcome, dispatch};
pub use events::{KeyAction, PointerId, TouchEvent, TouchPhase};
pub use geometry::{DrawRect, Quadrant};
pub use listener::{KeyboardListener, ListenerEvent, NullListener, RecordingListener};
pub use pointer::{GestureState, NoiseThreshold, PointerTracker};
pub use queue::PointerQueue;
pub use resolver::QuadrantResolver;
pub use state::{KeyboardSession, SessionSettings, VisibleGrid};
