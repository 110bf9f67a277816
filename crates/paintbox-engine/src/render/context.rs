use crate::paint::Color;

use super::error::InitError;
use super::program::{Program, ShaderSource};

/// Location of a vertex attribute within a compiled program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttribHandle(pub u32);

/// Location of a uniform within a compiled program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformHandle(pub u32);

/// Vertex buffer allocated by a [`GraphicsContext`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferHandle(pub u32);

/// Primitive topology of a draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Points,
    Triangles,
    /// Vertex 0 is the hub; each following pair forms one triangle with it.
    TriangleFan,
}

/// Minimal immediate-mode graphics context.
///
/// Vertex data is three `f32` components per vertex. A draw reads the position
/// attribute from the bound vertex buffer, or from the immediate attribute
/// value when no buffer is bound.
///
/// Implementations:
/// - [`RecordingContext`](super::RecordingContext) records calls in memory
/// - [`GpuCanvas`](super::GpuCanvas) renders through wgpu
pub trait GraphicsContext {
    /// Compiles and links a vertex/fragment shader pair.
    fn compile_program(&mut self, source: &ShaderSource<'_>) -> Result<Program, InitError>;

    /// Resolves a vertex attribute by name. `None` if the program has no such attribute.
    fn attribute_handle(&self, program: &Program, name: &str) -> Option<AttribHandle>;

    /// Resolves a uniform by name. `None` if the program has no such uniform.
    fn uniform_handle(&self, program: &Program, name: &str) -> Option<UniformHandle>;

    /// Sets the attribute value used when no vertex buffer is bound.
    fn set_immediate_vertex_attribute(&mut self, handle: AttribHandle, x: f32, y: f32, z: f32);

    fn set_uniform_color(&mut self, handle: UniformHandle, color: Color);

    fn set_uniform_float(&mut self, handle: UniformHandle, value: f32);

    /// Uploads `data` (xyz triples) into a fresh vertex buffer.
    fn allocate_vertex_buffer(&mut self, data: &[f32]) -> BufferHandle;

    /// Feeds `attribute` from `buffer` for subsequent draws.
    fn bind_vertex_buffer(&mut self, buffer: BufferHandle, attribute: AttribHandle);

    /// Reverts the position attribute to its immediate value.
    fn unbind_vertex_buffer(&mut self);

    fn draw_primitives(&mut self, topology: Topology, vertex_count: u32);

    /// Clears the frame buffer to `color`.
    fn clear_frame(&mut self, color: Color);
}
