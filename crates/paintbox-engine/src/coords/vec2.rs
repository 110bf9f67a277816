/// 2D vector.
///
/// Used both for surface positions (logical pixels) and for canonical device
/// coordinates; the owning type decides which.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `[x, y, z]`, the layout the position attribute expects.
    #[inline]
    pub const fn extend(self, z: f32) -> [f32; 3] {
        [self.x, self.y, z]
    }
}
