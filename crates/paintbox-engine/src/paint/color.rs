/// Straight-alpha RGBA color.
///
/// Channels are conventionally in `[0, 1]` but not enforced; values are handed
/// to the color uniform as-is.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Normalizes a `0..=255` slider value to `[0, 1]`.
    #[inline]
    pub fn channel_from_u8(v: u8) -> f32 {
        v as f32 / 255.0
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_channels_normalize_to_unit_range() {
        assert_eq!(Color::channel_from_u8(255), 1.0);
        assert_eq!(Color::channel_from_u8(0), 0.0);
        assert!((Color::channel_from_u8(51) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn to_array_keeps_channel_order() {
        assert_eq!(Color::new(0.1, 0.2, 0.3, 0.4).to_array(), [0.1, 0.2, 0.3, 0.4]);
    }
}
