/// Initialization failure of the render layer.
///
/// Any of these is fatal to the session: startup aborts with the scene left
/// empty and the error is reported to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitError {
    /// The shader pair could not be compiled or linked.
    #[error("failed to compile shader program: {0}")]
    Compile(String),

    /// The program does not declare a required vertex attribute.
    #[error("shader program has no attribute named `{0}`")]
    MissingAttribute(String),

    /// The program does not declare a required uniform.
    #[error("shader program has no uniform named `{0}`")]
    MissingUniform(String),
}
