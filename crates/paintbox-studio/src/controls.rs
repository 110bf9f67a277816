//! Keyboard stand-ins for the mode buttons, the clear button and the sliders.

use paintbox_engine::input::{Key, Modifiers};
use paintbox_engine::session::{Channel, DrawMode, SessionConfig};

/// Color slider step per key press.
pub const COLOR_STEP: i32 = 15;

/// A slider on the control panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Slider {
    Color(Channel),
    Size,
    Segments,
}

impl Slider {
    /// Inclusive value range.
    pub const fn range(self) -> (u32, u32) {
        match self {
            Slider::Color(_) => (0, 255),
            Slider::Size => (1, 100),
            Slider::Segments => (3, 100),
        }
    }
}

/// What a key press asks for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    SelectMode(DrawMode),
    Clear,
    Nudge { slider: Slider, delta: i32 },
    Exit,
}

/// Maps a pressed key to an action. Shift reverses color steps and makes
/// size/segment steps coarse.
pub fn action_for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    let fine = if modifiers.shift { 10 } else { 1 };
    let color = if modifiers.shift { -COLOR_STEP } else { COLOR_STEP };
    let nudge = |slider, delta| Some(Action::Nudge { slider, delta });

    match key {
        Key::P => Some(Action::SelectMode(DrawMode::Point)),
        Key::T => Some(Action::SelectMode(DrawMode::Triangle)),
        Key::C => Some(Action::SelectMode(DrawMode::Circle)),

        Key::Backspace | Key::Delete => Some(Action::Clear),
        Key::Escape => Some(Action::Exit),

        Key::R => nudge(Slider::Color(Channel::Red), color),
        Key::G => nudge(Slider::Color(Channel::Green), color),
        Key::B => nudge(Slider::Color(Channel::Blue), color),

        Key::ArrowUp => nudge(Slider::Size, fine),
        Key::ArrowDown => nudge(Slider::Size, -fine),
        Key::ArrowRight => nudge(Slider::Segments, fine),
        Key::ArrowLeft => nudge(Slider::Segments, -fine),

        _ => None,
    }
}

/// Slider positions, in raw slider units.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SliderPanel {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub size: u32,
    pub segments: u32,
}

impl SliderPanel {
    /// Slider positions matching a session's initial state.
    pub fn from_config(config: &SessionConfig) -> Self {
        let to_slider = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        Self {
            red: to_slider(config.color.r),
            green: to_slider(config.color.g),
            blue: to_slider(config.color.b),
            size: config.size.round().clamp(1.0, 100.0) as u32,
            segments: config.segments.clamp(3, 100),
        }
    }

    pub fn get(&self, slider: Slider) -> u32 {
        match slider {
            Slider::Color(Channel::Red) => self.red,
            Slider::Color(Channel::Green) => self.green,
            Slider::Color(Channel::Blue) => self.blue,
            Slider::Size => self.size,
            Slider::Segments => self.segments,
        }
    }

    /// Moves a slider by `delta`, saturating at its range. Returns the new value.
    pub fn nudge(&mut self, slider: Slider, delta: i32) -> u32 {
        let (lo, hi) = slider.range();
        let value = (i64::from(self.get(slider)) + i64::from(delta))
            .clamp(i64::from(lo), i64::from(hi)) as u32;

        let slot = match slider {
            Slider::Color(Channel::Red) => &mut self.red,
            Slider::Color(Channel::Green) => &mut self.green,
            Slider::Color(Channel::Blue) => &mut self.blue,
            Slider::Size => &mut self.size,
            Slider::Segments => &mut self.segments,
        };
        *slot = value;
        value
    }
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
