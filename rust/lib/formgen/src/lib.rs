/// Form-field codegen library
///
/// Renders Ant Design form-field components from a [`RenderContext`] and
/// writes them out per model described by a [`Manifest`].

pub mod error;
pub mod ir;
pub mod js;
pub mod manifest;
pub mod output;
pub mod react_form;

pub use error::{CodegenError, Result};
pub use ir::{ComponentSpec, Import, RenderContext, SubImport};
pub use manifest::{Manifest, ModelEntry};
pub use output::OutputWriter;
pub use react_form::{render, ReactFormGenerator};

/// Codegen trait - implement this for each target
pub trait Codegen {
    fn generate(&self, manifest: &Manifest) -> Result<GeneratedCode>;
    fn language(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

/// A rendered file; `path` is relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}
