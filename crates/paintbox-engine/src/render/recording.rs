use crate::paint::Color;

use super::context::{AttribHandle, BufferHandle, GraphicsContext, Topology, UniformHandle};
use super::error::InitError;
use super::program::{Program, ShaderSource};

/// One call made against a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum GfxCall {
    CompileProgram { id: u32 },
    SetImmediateAttribute { handle: AttribHandle, xyz: [f32; 3] },
    SetUniformColor { handle: UniformHandle, color: Color },
    SetUniformFloat { handle: UniformHandle, value: f32 },
    AllocateBuffer { buffer: BufferHandle, data: Vec<f32> },
    BindBuffer { buffer: BufferHandle, attribute: AttribHandle },
    UnbindBuffer,
    Draw { topology: Topology, vertex_count: u32 },
    ClearFrame { color: Color },
}

/// In-memory [`GraphicsContext`] that records every call in order.
///
/// Needs no GPU. Handles resolve against the program's declared interface,
/// exactly like the wgpu canvas, so initialization failures can be exercised.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<GfxCall>,
    next_program: u32,
    next_buffer: u32,
    compile_error: Option<String>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose next program compilation fails with `reason`.
    pub fn failing_compile(reason: impl Into<String>) -> Self {
        Self {
            compile_error: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Calls in the order they were made.
    pub fn calls(&self) -> &[GfxCall] {
        &self.calls
    }

    /// Removes and returns all recorded calls.
    pub fn take_calls(&mut self) -> Vec<GfxCall> {
        std::mem::take(&mut self.calls)
    }

    /// Recorded draw calls only.
    pub fn draws(&self) -> impl Iterator<Item = (Topology, u32)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            GfxCall::Draw { topology, vertex_count } => Some((*topology, *vertex_count)),
            _ => None,
        })
    }
}

impl GraphicsContext for RecordingContext {
    fn compile_program(&mut self, source: &ShaderSource<'_>) -> Result<Program, InitError> {
        if let Some(reason) = self.compile_error.take() {
            return Err(InitError::Compile(reason));
        }
        if source.vertex.trim().is_empty() || source.fragment.trim().is_empty() {
            return Err(InitError::Compile("empty shader source".to_string()));
        }

        let id = self.next_program;
        self.next_program += 1;
        self.calls.push(GfxCall::CompileProgram { id });

        Ok(Program { id, interface: source.interface })
    }

    fn attribute_handle(&self, program: &Program, name: &str) -> Option<AttribHandle> {
        program.interface.attribute(name)
    }

    fn uniform_handle(&self, program: &Program, name: &str) -> Option<UniformHandle> {
        program.interface.uniform(name)
    }

    fn set_immediate_vertex_attribute(&mut self, handle: AttribHandle, x: f32, y: f32, z: f32) {
        self.calls.push(GfxCall::SetImmediateAttribute { handle, xyz: [x, y, z] });
    }

    fn set_uniform_color(&mut self, handle: UniformHandle, color: Color) {
        self.calls.push(GfxCall::SetUniformColor { handle, color });
    }

    fn set_uniform_float(&mut self, handle: UniformHandle, value: f32) {
        self.calls.push(GfxCall::SetUniformFloat { handle, value });
    }

    fn allocate_vertex_buffer(&mut self, data: &[f32]) -> BufferHandle {
        let buffer = BufferHandle(self.next_buffer);
        self.next_buffer += 1;
        self.calls.push(GfxCall::AllocateBuffer { buffer, data: data.to_vec() });
        buffer
    }

    fn bind_vertex_buffer(&mut self, buffer: BufferHandle, attribute: AttribHandle) {
        self.calls.push(GfxCall::BindBuffer { buffer, attribute });
    }

    fn unbind_vertex_buffer(&mut self) {
        self.calls.push(GfxCall::UnbindBuffer);
    }

    fn draw_primitives(&mut self, topology: Topology, vertex_count: u32) {
        self.calls.push(GfxCall::Draw { topology, vertex_count });
    }

    fn clear_frame(&mut self, color: Color) {
        self.calls.push(GfxCall::ClearFrame { color });
    }
}
