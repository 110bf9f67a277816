use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Describes the drawing surface: `origin` is the top-left corner of its
/// bounding rectangle and `size` its pixel dimensions.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_splits_origin_and_size() {
        let r = Rect::new(10.0, 20.0, 400.0, 300.0);
        assert_eq!(r.origin, Vec2::new(10.0, 20.0));
        assert_eq!(r.size, Vec2::new(400.0, 300.0));
    }
}
