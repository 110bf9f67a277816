use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{GraphicsContext, ShaderBindings, Topology};
use crate::scene::{Scene, Shape};

/// A circle approximated by a regular polygon, drawn as a triangle fan.
///
/// Vertices are derived once in [`Circle::new`]. Segment counts below 3 are
/// accepted and render degenerate (empty) geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Vec2,
    radius: f32,
    segments: u32,
    color: Color,
    /// `segments` vertices, `(x, y, 0)` each.
    vertices: Vec<f32>,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, segments: u32, color: Color) -> Self {
        let step = TAU / segments as f32;
        let vertices = (0..segments)
            .flat_map(|i| {
                let angle = i as f32 * step;
                let p = Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
                p.extend(0.0)
            })
            .collect();

        Self { center, radius, segments, color, vertices }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Flat `(x, y, z)` vertex data, one triple per segment.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn render<G>(&self, gfx: &mut G, bindings: ShaderBindings)
    where
        G: GraphicsContext + ?Sized,
    {
        let buffer = gfx.allocate_vertex_buffer(&self.vertices);
        gfx.bind_vertex_buffer(buffer, bindings.position);
        gfx.set_uniform_color(bindings.frag_color, self.color);
        gfx.draw_primitives(Topology::TriangleFan, self.segments);
        gfx.unbind_vertex_buffer();
    }
}

impl Scene {
    /// Appends a circle.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        self.push(Shape::Circle(Circle::new(center, radius, segments, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{GfxCall, RecordingContext, RenderSurface, ShaderSource};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-6
    }

    #[test]
    fn four_segments_land_on_the_axes() {
        let c = Circle::new(Vec2::default(), 1.0, 4, Color::black());
        let expected = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];

        assert_eq!(c.vertices().len(), 12);
        for (v, e) in c.vertices().chunks_exact(3).zip(expected) {
            for k in 0..3 {
                assert!(approx(v[k], e[k]), "{v:?} != {e:?}");
            }
        }
    }

    #[test]
    fn vertices_are_offset_by_center_and_scaled_by_radius() {
        let c = Circle::new(Vec2::new(0.5, -0.25), 0.1, 30, Color::black());
        assert_eq!(c.vertices().len(), 90);

        for v in c.vertices().chunks_exact(3) {
            let d = ((v[0] - 0.5).powi(2) + (v[1] + 0.25).powi(2)).sqrt();
            assert!(approx(d, 0.1), "vertex {v:?} at distance {d}");
            assert_eq!(v[2], 0.0);
        }
        assert!(approx(c.vertices()[0], 0.6));
        assert!(approx(c.vertices()[1], -0.25));
    }

    #[test]
    fn render_draws_a_fan_of_segment_vertices() {
        let mut s = RenderSurface::init(RecordingContext::new(), &ShaderSource::canvas())
            .expect("canvas shaders");
        s.context_mut().take_calls();
        let (gfx, b) = s.parts_mut();

        let blue = Color::rgb(0.0, 0.0, 1.0);
        Circle::new(Vec2::default(), 0.5, 8, blue).render(gfx, b);

        let calls = gfx.calls();
        assert_eq!(calls.len(), 5);
        assert!(matches!(&calls[0], GfxCall::AllocateBuffer { data, .. } if data.len() == 24));
        assert!(matches!(calls[1], GfxCall::BindBuffer { attribute, .. } if attribute == b.position));
        assert_eq!(calls[2], GfxCall::SetUniformColor { handle: b.frag_color, color: blue });
        assert_eq!(calls[3], GfxCall::Draw { topology: Topology::TriangleFan, vertex_count: 8 });
        assert_eq!(calls[4], GfxCall::UnbindBuffer);
    }

    // ── degenerate segment counts ─────────────────────────────────────────

    #[test]
    fn zero_segments_still_issue_an_empty_draw() {
        let c = Circle::new(Vec2::default(), 1.0, 0, Color::black());
        assert!(c.vertices().is_empty());

        let mut s = RenderSurface::init(RecordingContext::new(), &ShaderSource::canvas())
            .expect("canvas shaders");
        let (gfx, b) = s.parts_mut();
        c.render(gfx, b);

        assert_eq!(gfx.draws().collect::<Vec<_>>(), vec![(Topology::TriangleFan, 0)]);
    }

    #[test]
    fn below_three_segments_is_accepted_unclamped() {
        let c = Circle::new(Vec2::default(), 1.0, 2, Color::black());
        assert_eq!(c.segments(), 2);
        assert_eq!(c.vertices().len(), 6);
    }
}
