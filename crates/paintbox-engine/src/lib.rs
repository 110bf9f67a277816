//! Paintbox engine crate.
//!
//! Shapes, the drawing session, and the platform + GPU runtime pieces the
//! studio binary runs them on.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod session;
