//! Render input: the imports and field components of one generated file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};
use crate::js;

/// Names the file header declares before any import or component.
const HEADER_BINDINGS: &[&str] = &["React", "Form", "PropTypes", "Item"];

/// `import <name> from '<path>';`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub name: String,
    pub path: String,
}

/// `const { <name> } = <base>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubImport {
    pub name: String,
    pub base: String,
}

/// One generated form-field component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component binding and export name.
    pub name: String,

    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    /// Key registered with `getFieldDecorator`.
    pub field_name: String,

    /// Default value; no `initialValue` is emitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Validation failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Widget markup, inserted verbatim. Callers must pre-sanitize it.
    pub input: String,
}

impl ComponentSpec {
    pub fn new(
        name: impl Into<String>,
        field_name: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            help_text: None,
            field_name: field_name.into(),
            initial: None,
            required: false,
            message: None,
            input: input.into(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Everything needed to render one component file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    #[serde(default)]
    pub extra_imports: Vec<Import>,

    #[serde(default)]
    pub sub_imports: Vec<SubImport>,

    pub components: Vec<ComponentSpec>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an import unless the same one is already present.
    pub fn add_import(&mut self, name: impl Into<String>, path: impl Into<String>) {
        let import = Import {
            name: name.into(),
            path: path.into(),
        };
        if !self.extra_imports.contains(&import) {
            self.extra_imports.push(import);
        }
    }

    /// Append a sub-import unless the same one is already present.
    pub fn add_sub_import(&mut self, name: impl Into<String>, base: impl Into<String>) {
        let sub = SubImport {
            name: name.into(),
            base: base.into(),
        };
        if !self.sub_imports.contains(&sub) {
            self.sub_imports.push(sub);
        }
    }

    pub fn add_component(&mut self, component: ComponentSpec) {
        self.components.push(component);
    }

    /// True when the file gets a single default export instead of named exports.
    pub fn is_single(&self) -> bool {
        self.components.len() == 1
    }

    /// Check that the context renders into valid source.
    pub fn validate(&self) -> Result<()> {
        if self.components.is_empty() {
            return Err(CodegenError::EmptyComponents);
        }

        for import in &self.extra_imports {
            check_identifier("import name", &import.name)?;
        }
        for sub in &self.sub_imports {
            check_identifier("sub-import name", &sub.name)?;
            check_identifier("sub-import base", &sub.base)?;
        }
        for component in &self.components {
            check_identifier("component name", &component.name)?;
        }

        // Every top-level binding is declared once per module.
        let mut bindings: HashSet<&str> = HEADER_BINDINGS.iter().copied().collect();
        let imported = self
            .extra_imports
            .iter()
            .map(|i| i.name.as_str())
            .chain(self.sub_imports.iter().map(|s| s.name.as_str()));
        for name in imported {
            if !bindings.insert(name) {
                return Err(CodegenError::DuplicateBinding(name.to_string()));
            }
        }

        let mut components = HashSet::new();
        for component in &self.components {
            let name = component.name.as_str();
            if !components.insert(name) {
                return Err(CodegenError::DuplicateComponent(name.to_string()));
            }
            if !bindings.insert(name) {
                return Err(CodegenError::DuplicateBinding(name.to_string()));
            }
        }
        Ok(())
    }
}

fn check_identifier(role: &'static str, value: &str) -> Result<()> {
    if js::is_identifier(value) {
        Ok(())
    } else {
        Err(CodegenError::InvalidIdentifier {
            role,
            value: value.to_string(),
        })
    }
}
