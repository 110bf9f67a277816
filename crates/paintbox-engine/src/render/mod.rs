//! Rendering subsystem.
//!
//! Shapes render through the [`GraphicsContext`] trait, a small immediate-mode
//! contract: compile a shader pair, resolve handles by name, set attributes and
//! uniforms, upload vertex buffers, draw, clear.
//!
//! Two contexts implement it:
//! - [`RecordingContext`] keeps the calls in memory (tests, headless use)
//! - [`GpuCanvas`] replays them through wgpu into a window surface
//!
//! Convention: vertex positions are canonical device coordinates (xyz, z = 0).

mod canvas;
mod context;
mod ctx;
mod error;
mod frame;
mod program;
mod recording;
mod surface;

pub use canvas::GpuCanvas;
pub use context::{AttribHandle, BufferHandle, GraphicsContext, Topology, UniformHandle};
pub use ctx::{RenderCtx, RenderTarget};
pub use error::InitError;
pub use program::{
    ATTR_POSITION, Program, ProgramInterface, ShaderSource, UNIFORM_FRAG_COLOR, UNIFORM_POINT_SIZE,
};
pub use recording::{GfxCall, RecordingContext};
pub use surface::{RenderSurface, ShaderBindings};
