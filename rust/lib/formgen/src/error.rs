use thiserror::Error;

/// Errors raised while validating, rendering or writing form components.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A render context must describe at least one component.
    #[error("render context has no components")]
    EmptyComponents,

    /// A name that ends up as a JS binding is not a valid identifier.
    #[error("invalid identifier for {role}: '{value}'")]
    InvalidIdentifier { role: &'static str, value: String },

    /// Two components share the same name.
    #[error("duplicate component name: {0}")]
    DuplicateComponent(String),

    /// Two top-level declarations (header, imports, components) share a name.
    #[error("name declared more than once: {0}")]
    DuplicateBinding(String),

    /// A file name override was given for other than exactly one model.
    #[error("file name override requires exactly one model, got {0}")]
    FileNameOverride(usize),

    /// A model was requested that the manifest does not define.
    #[error("model not found in manifest: {0}")]
    UnknownModel(String),

    /// The manifest could not be parsed.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
