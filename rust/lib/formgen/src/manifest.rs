//! Manifest: the models to generate and their render contexts.
//!
//! ```json
//! {
//!   "models": [
//!     {
//!       "name": "Offer",
//!       "verbose_name": "special offer",
//!       "context": { "components": [ ... ] }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};
use crate::ir::RenderContext;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One model, rendered into one component file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Model name (e.g. "Offer").
    pub name: String,

    /// Human name; determines the output directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,

    /// Output file name, overriding `<name>FormFields.js`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    pub context: RenderContext,
}

impl ModelEntry {
    /// Directory under the output root: "special offer" → "special_offer".
    pub fn directory(&self) -> String {
        self.verbose_name
            .as_deref()
            .unwrap_or(&self.name)
            .replace(' ', "_")
            .to_lowercase()
    }

    /// File name, preferring `override_name`, then the entry's own.
    pub fn file_name(&self, override_name: Option<&str>) -> String {
        override_name
            .or(self.file_name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}FormFields.js", self.name))
    }
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Keep only `names`, in that order. No names keeps every model.
    pub fn select(&self, names: &[String]) -> Result<Manifest> {
        if names.is_empty() {
            return Ok(self.clone());
        }
        let models = names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| CodegenError::UnknownModel(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Manifest { models })
    }
}
