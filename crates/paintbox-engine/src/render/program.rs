use super::context::{AttribHandle, UniformHandle};

/// Name of the position attribute.
pub const ATTR_POSITION: &str = "a_Position";
/// Name of the fragment color uniform.
pub const UNIFORM_FRAG_COLOR: &str = "u_FragColor";
/// Name of the point size uniform.
pub const UNIFORM_POINT_SIZE: &str = "u_PointSize";

/// Names a program exposes, in handle order.
///
/// WGSL has no name-based reflection at runtime, so each shader pair ships
/// with the table of attributes and uniforms it declares. Handle `n` is the
/// `n`-th entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProgramInterface {
    pub attributes: &'static [&'static str],
    pub uniforms: &'static [&'static str],
}

impl ProgramInterface {
    pub fn attribute(&self, name: &str) -> Option<AttribHandle> {
        self.attributes
            .iter()
            .position(|a| *a == name)
            .map(|i| AttribHandle(i as u32))
    }

    pub fn uniform(&self, name: &str) -> Option<UniformHandle> {
        self.uniforms
            .iter()
            .position(|u| *u == name)
            .map(|i| UniformHandle(i as u32))
    }
}

/// A vertex/fragment shader pair plus the interface it declares.
#[derive(Debug, Copy, Clone)]
pub struct ShaderSource<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
    pub interface: ProgramInterface,
}

impl ShaderSource<'static> {
    /// The canvas shaders: one position attribute, a color and a point size uniform.
    pub const fn canvas() -> Self {
        Self {
            vertex: include_str!("shaders/canvas_vs.wgsl"),
            fragment: include_str!("shaders/canvas_fs.wgsl"),
            interface: ProgramInterface {
                attributes: &[ATTR_POSITION],
                uniforms: &[UNIFORM_FRAG_COLOR, UNIFORM_POINT_SIZE],
            },
        }
    }
}

impl Default for ShaderSource<'static> {
    fn default() -> Self {
        Self::canvas()
    }
}

/// A compiled and linked program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub id: u32,
    pub interface: ProgramInterface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_interface_resolves_its_names() {
        let iface = ShaderSource::canvas().interface;
        assert_eq!(iface.attribute(ATTR_POSITION), Some(AttribHandle(0)));
        assert_eq!(iface.uniform(UNIFORM_FRAG_COLOR), Some(UniformHandle(0)));
        assert_eq!(iface.uniform(UNIFORM_POINT_SIZE), Some(UniformHandle(1)));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        let iface = ShaderSource::canvas().interface;
        assert_eq!(iface.attribute("a_Color"), None);
        assert_eq!(iface.uniform(ATTR_POSITION), None);
    }

    #[test]
    fn canvas_sources_define_entry_points() {
        let src = ShaderSource::canvas();
        assert!(src.vertex.contains("fn vs_main"), "vertex shader entry point missing");
        assert!(src.fragment.contains("fn fs_main"), "fragment shader entry point missing");
    }
}
