use crate::paint::Color;

use super::DrawMode;

/// Initial drawing state and frame clear color.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub color: Color,
    pub size: f32,
    pub mode: DrawMode,
    pub segments: u32,
    pub clear_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color: Color::rgb(1.0, 0.0, 0.0),
            size: 10.0,
            mode: DrawMode::Point,
            segments: 30,
            clear_color: Color::black(),
        }
    }
}
