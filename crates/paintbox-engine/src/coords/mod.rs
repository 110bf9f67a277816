//! Coordinate and geometry types shared by the session, scene and renderers.
//!
//! Two spaces are in play:
//! - Surface space: logical pixels, origin top-left, +X right, +Y down.
//!   Pointer events arrive in this space.
//! - Canonical device space: [-1, 1] on both axes, origin at the center,
//!   +Y up. Shapes store their geometry in this space.
//!
//! [`to_canonical`] is the only conversion between the two.

mod canonical;
mod rect;
mod vec2;
mod viewport;

pub use canonical::to_canonical;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
