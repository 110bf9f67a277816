//! Paint model: the straight-alpha RGBA color every shape carries.

pub mod color;

pub use color::Color;
