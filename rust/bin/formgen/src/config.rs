//! Generator configuration.
//!
//! Reads `formgen.toml`; a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormgenConfig {
    /// Root directory for generated component files.
    pub component_output_path: PathBuf,

    /// Overwrite files that already exist.
    pub replace_existing: bool,
}

impl Default for FormgenConfig {
    fn default() -> Self {
        Self {
            component_output_path: PathBuf::from("components"),
            replace_existing: false,
        }
    }
}

impl FormgenConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from("formgen.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: FormgenConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply command-line flags: an output path replaces the configured
    /// one, and `--replace-existing` can only turn replacing on.
    pub fn with_overrides(mut self, output_path: Option<PathBuf>, replace_existing: bool) -> Self {
        if let Some(path) = output_path {
            self.component_output_path = path;
        }
        self.replace_existing |= replace_existing;
        self
    }
}
