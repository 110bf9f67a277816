use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Circle, Point, Shape, Triangle};

use super::{DrawMode, SessionConfig};

/// One of the three color sliders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Current color, size, mode and segment count.
///
/// Read when a shape is built; the shape copies what it needs, so later edits
/// never reach existing shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawingState {
    /// Normalized channels; alpha stays 1.
    pub color: Color,
    /// Raw slider units. Triangles and circles use `size / 100`.
    pub size: f32,
    pub mode: DrawMode,
    pub segments: u32,
}

impl DrawingState {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            color: config.color,
            size: config.size,
            mode: config.mode,
            segments: config.segments,
        }
    }

    /// Sets a channel from a `0..=255` slider value.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        let v = Color::channel_from_u8(value);
        match channel {
            Channel::Red => self.color.r = v,
            Channel::Green => self.color.g = v,
            Channel::Blue => self.color.b = v,
        }
    }

    /// Extent used by triangles (half width) and circles (radius).
    #[inline]
    pub fn scale(&self) -> f32 {
        self.size / 100.0
    }

    /// Builds the shape the current mode creates at `at` (canonical coordinates).
    pub fn shape_at(&self, at: Vec2) -> Shape {
        match self.mode {
            DrawMode::Point => Point::new(at, self.color, self.size).into(),
            DrawMode::Triangle => Triangle::isosceles(at, self.scale(), self.color).into(),
            DrawMode::Circle => Circle::new(at, self.scale(), self.segments, self.color).into(),
        }
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
