use super::context::{AttribHandle, GraphicsContext, UniformHandle};
use super::error::InitError;
use super::program::{ATTR_POSITION, Program, ShaderSource, UNIFORM_FRAG_COLOR, UNIFORM_POINT_SIZE};

/// Handles every shape needs to render itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderBindings {
    pub position: AttribHandle,
    pub frag_color: UniformHandle,
    pub point_size: UniformHandle,
}

impl ShaderBindings {
    /// Resolves the canvas attribute and uniforms by name.
    ///
    /// A missing name is an initialization failure, never a per-render error.
    pub fn resolve<G>(gfx: &G, program: &Program) -> Result<Self, InitError>
    where
        G: GraphicsContext + ?Sized,
    {
        let position = gfx
            .attribute_handle(program, ATTR_POSITION)
            .ok_or_else(|| InitError::MissingAttribute(ATTR_POSITION.to_string()))?;
        let frag_color = gfx
            .uniform_handle(program, UNIFORM_FRAG_COLOR)
            .ok_or_else(|| InitError::MissingUniform(UNIFORM_FRAG_COLOR.to_string()))?;
        let point_size = gfx
            .uniform_handle(program, UNIFORM_POINT_SIZE)
            .ok_or_else(|| InitError::MissingUniform(UNIFORM_POINT_SIZE.to_string()))?;

        Ok(Self { position, frag_color, point_size })
    }
}

/// A graphics context with its program compiled and handles resolved.
///
/// Construction is all-or-nothing: either every step succeeds or the context
/// is dropped and the error returned.
#[derive(Debug)]
pub struct RenderSurface<G> {
    gfx: G,
    bindings: ShaderBindings,
}

impl<G: GraphicsContext> RenderSurface<G> {
    pub fn init(mut gfx: G, source: &ShaderSource<'_>) -> Result<Self, InitError> {
        let program = gfx.compile_program(source)?;
        let bindings = ShaderBindings::resolve(&gfx, &program)?;

        log::debug!("render surface ready (program {})", program.id);

        Ok(Self { gfx, bindings })
    }

    #[inline]
    pub fn bindings(&self) -> ShaderBindings {
        self.bindings
    }

    #[inline]
    pub fn context(&self) -> &G {
        &self.gfx
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut G {
        &mut self.gfx
    }

    /// Splits into the context and the bindings shapes render with.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut G, ShaderBindings) {
        (&mut self.gfx, self.bindings)
    }
}
