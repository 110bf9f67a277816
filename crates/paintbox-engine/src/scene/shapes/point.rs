use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{GraphicsContext, ShaderBindings, Topology};
use crate::scene::{Scene, Shape};

/// Smallest point size handed to the point-size uniform.
pub const POINT_SIZE_MIN: f32 = 1.0;
/// Largest point size handed to the point-size uniform.
pub const POINT_SIZE_MAX: f32 = 100.0;

/// A single vertex drawn as a square of `size` pixels.
///
/// `size` is stored as given; it is clamped to
/// [`POINT_SIZE_MIN`]..=[`POINT_SIZE_MAX`] only when rendering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    position: Vec2,
    color: Color,
    size: f32,
}

impl Point {
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Size as given at construction.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Size the point renders with.
    #[inline]
    pub fn effective_size(&self) -> f32 {
        self.size.clamp(POINT_SIZE_MIN, POINT_SIZE_MAX)
    }

    /// One vertex, set through the immediate attribute; no buffer is allocated.
    pub fn render<G>(&self, gfx: &mut G, bindings: ShaderBindings)
    where
        G: GraphicsContext + ?Sized,
    {
        let [x, y, z] = self.position.extend(0.0);
        gfx.set_immediate_vertex_attribute(bindings.position, x, y, z);
        gfx.set_uniform_color(bindings.frag_color, self.color);
        gfx.set_uniform_float(bindings.point_size, self.effective_size());
        gfx.draw_primitives(Topology::Points, 1);
    }
}

impl Scene {
    /// Appends a point.
    #[inline]
    pub fn push_point(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Point(Point::new(position, color, size)));
    }
}
