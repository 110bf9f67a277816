//! Scene (shape list) types.
//!
//! Responsibilities:
//! - hold the closed set of drawable shapes
//! - keep them in insertion order; insertion order is paint order
//! - keep shape-specific geometry and render code isolated per file under `scene::shapes`

mod list;
mod shape;

pub mod shapes;

pub use list::Scene;
pub use shape::Shape;
pub use shapes::{Circle, Point, Triangle};
