//! Drawing session: the scene plus the drawing state shapes are built from.
//!
//! Control flow for one pointer sample:
//! normalize coordinates -> build a shape from the current state -> append ->
//! clear the frame -> render the scene in insertion order.
//!
//! The session is an explicit value owned by the host. Nothing here is global.

mod config;
mod drawing;
mod mode;
mod state;

pub use config::SessionConfig;
pub use drawing::{DrawingSession, PointerSample};
pub use mode::{DrawMode, ParseModeError};
pub use state::{Channel, DrawingState};
