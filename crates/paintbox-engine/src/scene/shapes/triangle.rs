use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{GraphicsContext, ShaderBindings, Topology};
use crate::scene::{Scene, Shape};

/// A filled triangle in canonical device coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vec2; 3],
    color: Color,
}

impl Triangle {
    #[inline]
    pub fn new(vertices: [Vec2; 3], color: Color) -> Self {
        Self { vertices, color }
    }

    /// Isosceles triangle around `center`: base corners at `center ± s` below,
    /// apex `s` above.
    pub fn isosceles(center: Vec2, s: f32, color: Color) -> Self {
        let Vec2 { x, y } = center;
        Self::new(
            [Vec2::new(x - s, y - s), Vec2::new(x + s, y - s), Vec2::new(x, y + s)],
            color,
        )
    }

    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        self.vertices
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Position data as uploaded: three `(x, y, 0)` vertices.
    pub fn positions(&self) -> [f32; 9] {
        let [a, b, c] = self.vertices;
        let [ax, ay, az] = a.extend(0.0);
        let [bx, by, bz] = b.extend(0.0);
        let [cx, cy, cz] = c.extend(0.0);
        [ax, ay, az, bx, by, bz, cx, cy, cz]
    }

    /// Uploads a fresh vertex buffer on every call; nothing is retained.
    pub fn render<G>(&self, gfx: &mut G, bindings: ShaderBindings)
    where
        G: GraphicsContext + ?Sized,
    {
        let buffer = gfx.allocate_vertex_buffer(&self.positions());
        gfx.bind_vertex_buffer(buffer, bindings.position);
        gfx.set_uniform_color(bindings.frag_color, self.color);
        gfx.draw_primitives(Topology::Triangles, 3);
        gfx.unbind_vertex_buffer();
    }
}

impl Scene {
    /// Appends a triangle.
    #[inline]
    pub fn push_triangle(&mut self, vertices: [Vec2; 3], color: Color) {
        self.push(Shape::Triangle(Triangle::new(vertices, color)));
    }
}
