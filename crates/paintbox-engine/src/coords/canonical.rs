use super::{Rect, Vec2};

/// Maps a pointer position in surface pixels to canonical device coordinates.
///
/// `surface.origin` is the top-left of the surface's bounding rectangle and
/// `surface.size` its pixel dimensions `(W, H)`:
///
/// ```text
/// x = ((px - left) - W/2) / (W/2)
/// y = (H/2 - (py - top)) / (H/2)
/// ```
///
/// The surface interior lands in roughly [-1, 1] on both axes with Y flipped
/// (screen-down becomes canonical-up). Points outside the surface map outside
/// that range; nothing is clamped. The arithmetic is kept in exactly this
/// order so results are reproducible bit for bit.
#[inline]
pub fn to_canonical(pointer: Vec2, surface: Rect) -> Vec2 {
    let half_w = surface.size.x / 2.0;
    let half_h = surface.size.y / 2.0;

    let x = ((pointer.x - surface.origin.x) - half_w) / half_w;
    let y = (half_h - (pointer.y - surface.origin.y)) / half_h;

    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    #[test]
    fn center_maps_to_origin() {
        let p = to_canonical(Vec2::new(200.0, 200.0), Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(p, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn edges_map_to_unit_bounds() {
        let surface = Rect::new(30.0, 12.0, 640.0, 480.0);

        let left = to_canonical(Vec2::new(30.0, 252.0), surface);
        let right = to_canonical(Vec2::new(670.0, 252.0), surface);
        let top = to_canonical(Vec2::new(350.0, 12.0), surface);
        let bottom = to_canonical(Vec2::new(350.0, 492.0), surface);

        assert!(close(left.x, -1.0), "left edge x = {}", left.x);
        assert!(close(right.x, 1.0), "right edge x = {}", right.x);
        assert!(close(top.y, 1.0), "top edge y = {}", top.y);
        assert!(close(bottom.y, -1.0), "bottom edge y = {}", bottom.y);
    }

    #[test]
    fn y_axis_is_flipped() {
        let surface = Rect::new(0.0, 0.0, 400.0, 400.0);
        let upper = to_canonical(Vec2::new(200.0, 100.0), surface);
        let lower = to_canonical(Vec2::new(200.0, 300.0), surface);
        assert!(close(upper.y, 0.5));
        assert!(close(lower.y, -0.5));
    }

    #[test]
    fn identical_inputs_give_identical_bits() {
        let surface = Rect::new(7.25, 3.5, 333.0, 217.0);
        let pointer = Vec2::new(123.456, 78.9);

        let a = to_canonical(pointer, surface);
        let b = to_canonical(pointer, surface);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn outside_points_are_not_clamped() {
        let p = to_canonical(Vec2::new(-200.0, 600.0), Rect::new(0.0, 0.0, 400.0, 400.0));
        assert!(close(p.x, -2.0));
        assert!(close(p.y, -2.0));
    }
}
