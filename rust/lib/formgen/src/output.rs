use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::GeneratedFile;

/// Writes generated files under an output root.
///
/// Existing files are overwritten only with `replace_existing`; otherwise
/// the new content lands next to them as `<stem>_<n>.<ext>`.
pub struct OutputWriter {
    root: PathBuf,
    replace_existing: bool,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>, replace_existing: bool) -> Self {
        Self {
            root: root.into(),
            replace_existing,
        }
    }

    /// Write `file` and return the path actually written.
    pub fn write(&self, file: &GeneratedFile) -> Result<PathBuf> {
        let mut target = self.root.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if target.exists() && !self.replace_existing {
            let free = free_name(&target);
            warn!(
                "{} already exists, writing new component file {}",
                target.display(),
                free.display()
            );
            target = free;
        }

        fs::write(&target, &file.content)?;
        info!("wrote {}", target.display());
        Ok(target)
    }

    pub fn write_all(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        files.iter().map(|f| self.write(f)).collect()
    }
}

/// First `<stem>_<n>.<ext>` next to `path` that does not exist.
fn free_name(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n = 1;
    loop {
        let name = match &ext {
            Some(ext) => format!("{}_{}.{}", stem, n, ext),
            None => format!("{}_{}", stem, n),
        };
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
