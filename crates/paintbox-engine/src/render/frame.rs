use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

use super::context::{BufferHandle, Topology, UniformHandle};

/// Uniform handles whose values each draw op captures.
#[derive(Debug, Copy, Clone)]
pub(super) struct UniformSlots {
    pub frag_color: UniformHandle,
    pub point_size: UniformHandle,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum UniformValue {
    Unset,
    Color(Color),
    Float(f32),
}

/// One draw call: a range of expanded vertices and the uniforms in effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct DrawOp {
    pub first_vertex: u32,
    pub vertex_count: u32,
    pub color: Color,
    pub point_size: f32,
}

/// CPU side of the canvas: everything recorded since the last frame clear.
///
/// Holds no GPU resources; [`GpuCanvas`](super::GpuCanvas) uploads
/// `vertices` and one uniform block per op when presenting.
#[derive(Debug)]
pub(super) struct RecordedFrame {
    pub clear: Color,
    pub vertices: Vec<CanvasVertex>,
    pub ops: Vec<DrawOp>,
    staging: Vec<Vec<[f32; 3]>>,
    bound: Option<BufferHandle>,
    immediate: [f32; 3],
    uniforms: Vec<UniformValue>,
    slots: Option<UniformSlots>,
}

impl Default for RecordedFrame {
    fn default() -> Self {
        Self {
            clear: Color::black(),
            vertices: Vec::new(),
            ops: Vec::new(),
            staging: Vec::new(),
            bound: None,
            immediate: [0.0; 3],
            uniforms: Vec::new(),
            slots: None,
        }
    }
}

impl RecordedFrame {
    /// Resets uniform state for a freshly compiled program.
    pub fn use_program(&mut self, slots: UniformSlots, uniform_count: usize) {
        self.slots = Some(slots);
        self.uniforms = vec![UniformValue::Unset; uniform_count];
    }

    pub fn set_immediate(&mut self, xyz: [f32; 3]) {
        self.immediate = xyz;
    }

    pub fn set_color(&mut self, handle: UniformHandle, color: Color) {
        if let Some(slot) = self.uniforms.get_mut(handle.0 as usize) {
            *slot = UniformValue::Color(color);
        }
    }

    pub fn set_float(&mut self, handle: UniformHandle, value: f32) {
        if let Some(slot) = self.uniforms.get_mut(handle.0 as usize) {
            *slot = UniformValue::Float(value);
        }
    }

    /// Stages `(x, y, z)` triples; a trailing partial triple is dropped.
    pub fn allocate(&mut self, data: &[f32]) -> BufferHandle {
        let id = self.staging.len() as u32;
        self.staging
            .push(data.chunks_exact(3).map(|v| [v[0], v[1], v[2]]).collect());
        BufferHandle(id)
    }

    pub fn bind(&mut self, buffer: BufferHandle) {
        self.bound = Some(buffer);
    }

    pub fn unbind(&mut self) {
        self.bound = None;
    }

    /// Expands the draw into triangle-list vertices and records one op
    /// carrying the current color and point size. Draws that expand to
    /// nothing record no op.
    pub fn draw(&mut self, topology: Topology, vertex_count: u32) {
        let Some(slots) = self.slots else {
            log::warn!("draw before any program was compiled; ignored");
            return;
        };

        let positions = self.source_positions(vertex_count as usize);
        let first = self.vertices.len();
        expand_primitive(topology, &positions, &mut self.vertices);
        let emitted = self.vertices.len() - first;
        if emitted == 0 {
            return;
        }

        let color = match self.uniforms.get(slots.frag_color.0 as usize) {
            Some(UniformValue::Color(c)) => *c,
            _ => Color::transparent(),
        };
        let point_size = match self.uniforms.get(slots.point_size.0 as usize) {
            Some(UniformValue::Float(v)) => *v,
            _ => 1.0,
        };

        self.ops.push(DrawOp {
            first_vertex: first as u32,
            vertex_count: emitted as u32,
            color,
            point_size,
        });
    }

    /// Drops all recorded geometry and staged buffers.
    pub fn clear(&mut self, color: Color) {
        self.clear = color;
        self.vertices.clear();
        self.ops.clear();
        self.staging.clear();
        self.bound = None;
    }

    /// Positions a draw reads: the bound buffer, or the immediate value repeated.
    fn source_positions(&self, count: usize) -> Vec<[f32; 3]> {
        match self.bound {
            Some(BufferHandle(id)) => {
                let data = self.staging.get(id as usize).map(Vec::as_slice).unwrap_or(&[]);
                if data.len() < count {
                    log::warn!(
                        "draw of {count} vertices reads buffer {id} holding {}; truncated",
                        data.len()
                    );
                }
                data.iter().take(count).copied().collect()
            }
            None => vec![self.immediate; count],
        }
    }
}

// ── primitive expansion ───────────────────────────────────────────────────

const POINT_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

/// Appends the triangle-list equivalent of `positions` drawn as `topology`.
///
/// - points: one 6-vertex quad per position
/// - triangles: trailing vertices that do not complete a triangle are dropped
/// - fan: `n` vertices become `n - 2` triangles sharing vertex 0
fn expand_primitive(topology: Topology, positions: &[[f32; 3]], out: &mut Vec<CanvasVertex>) {
    match topology {
        Topology::Points => {
            for &p in positions {
                out.extend(POINT_CORNERS.iter().map(|&c| CanvasVertex::sprite(p, c)));
            }
        }
        Topology::Triangles => {
            let whole = positions.len() - positions.len() % 3;
            out.extend(positions[..whole].iter().map(|&p| CanvasVertex::flat(p)));
        }
        Topology::TriangleFan => {
            if positions.len() < 3 {
                return;
            }
            let hub = positions[0];
            for pair in positions[1..].windows(2) {
                out.push(CanvasVertex::flat(hub));
                out.push(CanvasVertex::flat(pair[0]));
                out.push(CanvasVertex::flat(pair[1]));
            }
        }
    }
}

/// Vertex layout (20 bytes):
///
///  offset  0  position [f32; 3]   loc 0 (a_Position)
///  offset 12  corner   [f32; 2]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct CanvasVertex {
    pub position: [f32; 3],
    pub corner: [f32; 2],
}

impl CanvasVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // corner
    ];

    #[inline]
    fn flat(position: [f32; 3]) -> Self {
        Self { position, corner: [0.0, 0.0] }
    }

    #[inline]
    fn sprite(position: [f32; 3], corner: [f32; 2]) -> Self {
        Self { position, corner }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CanvasVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: UniformHandle = UniformHandle(0);
    const SIZE: UniformHandle = UniformHandle(1);

    fn frame() -> RecordedFrame {
        let mut f = RecordedFrame::default();
        f.use_program(UniformSlots { frag_color: COLOR, point_size: SIZE }, 2);
        f
    }

    fn positions(n: usize) -> Vec<[f32; 3]> {
        (0..n).map(|i| [i as f32, 0.0, 0.0]).collect()
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn each_op_keeps_the_uniforms_set_before_it() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let mut f = frame();

        f.set_immediate([0.5, 0.5, 0.0]);
        f.set_color(COLOR, red);
        f.set_float(SIZE, 10.0);
        f.draw(Topology::Points, 1);

        let buffer = f.allocate(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        f.bind(buffer);
        f.set_color(COLOR, blue);
        f.draw(Topology::Triangles, 3);
        f.unbind();

        assert_eq!(
            f.ops,
            vec![
                DrawOp { first_vertex: 0, vertex_count: 6, color: red, point_size: 10.0 },
                DrawOp { first_vertex: 6, vertex_count: 3, color: blue, point_size: 10.0 },
            ]
        );
        assert_eq!(f.vertices.len(), 9);
        assert_eq!(f.vertices[6].position, [0.0, 0.0, 0.0]);
        assert_eq!(f.vertices[8].position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn unbound_draw_repeats_the_immediate_position() {
        let mut f = frame();
        f.set_immediate([0.25, -0.5, 0.0]);
        f.draw(Topology::Points, 2);

        assert_eq!(f.vertices.len(), 12);
        assert!(f.vertices.iter().all(|v| v.position == [0.25, -0.5, 0.0]));
    }

    #[test]
    fn unset_uniforms_fall_back_to_defaults() {
        let mut f = frame();
        f.draw(Topology::Points, 1);

        assert_eq!(f.ops[0].color, Color::transparent());
        assert_eq!(f.ops[0].point_size, 1.0);
    }

    #[test]
    fn short_buffer_is_truncated() {
        let mut f = frame();
        let buffer = f.allocate(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 9.0]);
        f.bind(buffer);
        f.draw(Topology::Triangles, 6);

        assert_eq!(f.ops.len(), 1);
        assert_eq!(f.ops[0].vertex_count, 3);
    }

    #[test]
    fn clear_drops_staging_and_recorded_ops() {
        let mut f = frame();
        let buffer = f.allocate(&[0.0; 9]);
        f.bind(buffer);
        f.draw(Topology::Triangles, 3);

        let white = Color::rgb(1.0, 1.0, 1.0);
        f.clear(white);

        assert!(f.staging.is_empty());
        assert!(f.ops.is_empty());
        assert!(f.vertices.is_empty());
        assert_eq!(f.bound, None);
        assert_eq!(f.clear, white);

        // Handles restart once the old buffers are gone.
        assert_eq!(f.allocate(&[0.0; 3]), BufferHandle(0));
    }

    #[test]
    fn draw_before_program_is_ignored() {
        let mut f = RecordedFrame::default();
        f.draw(Topology::Points, 1);
        assert!(f.ops.is_empty());
        assert!(f.vertices.is_empty());
    }

    #[test]
    fn empty_fan_records_no_op() {
        let mut f = frame();
        let buffer = f.allocate(&[]);
        f.bind(buffer);
        f.draw(Topology::TriangleFan, 0);
        assert!(f.ops.is_empty());
    }

    // ── primitive expansion ───────────────────────────────────────────────

    #[test]
    fn point_expands_to_one_quad() {
        let mut out = Vec::new();
        expand_primitive(Topology::Points, &[[0.25, -0.5, 0.0]], &mut out);

        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|v| v.position == [0.25, -0.5, 0.0]));
        assert_eq!(out[0].corner, [-0.5, -0.5]);
        assert_eq!(out[2].corner, [0.5, 0.5]);
    }

    #[test]
    fn triangles_pass_through_without_corners() {
        let mut out = Vec::new();
        expand_primitive(Topology::Triangles, &positions(3), &mut out);

        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|v| v.corner == [0.0, 0.0]));
        assert_eq!(out[2].position, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn incomplete_triangle_is_dropped() {
        let mut out = Vec::new();
        expand_primitive(Topology::Triangles, &positions(5), &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn fan_expands_to_shared_hub_triangles() {
        let mut out = Vec::new();
        expand_primitive(Topology::TriangleFan, &positions(5), &mut out);

        assert_eq!(out.len(), 3 * (5 - 2));
        for tri in out.chunks_exact(3) {
            assert_eq!(tri[0].position, [0.0, 0.0, 0.0], "hub must lead every triangle");
        }
        assert_eq!(out[3].position, [0.0, 0.0, 0.0]);
        assert_eq!(out[4].position, [2.0, 0.0, 0.0]);
        assert_eq!(out[5].position, [3.0, 0.0, 0.0]);
    }

    #[test]
    fn degenerate_fan_emits_nothing() {
        let mut out = Vec::new();
        expand_primitive(Topology::TriangleFan, &positions(2), &mut out);
        expand_primitive(Topology::TriangleFan, &[], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn vertex_is_twenty_bytes() {
        assert_eq!(std::mem::size_of::<CanvasVertex>(), 20);
    }
}
