/// Drawable size in logical pixels.
///
/// The GPU canvas uploads this so point sprites keep their size in pixels
/// regardless of the window dimensions.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
