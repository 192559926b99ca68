//! `index.css` import manifest.
//!
//! The manifest lists every generated style sheet as an `@import` relative to
//! the output root:
//!
//! ```css
//! @import './css/variables/core/colors.css';
//! @import './css/tokens/core/background.css';
//! ```
//!
//! Order is emission order when built from an [`ArtifactSet`], and directory
//! traversal order when built by [`IndexManifest::scan`]. Neither is sorted;
//! consumers that need a stable cascade order should sort themselves.

use std::path::Path;

use crate::error::WriteError;
use crate::layout::CSS_ROOT;
use crate::output::{write_file, Artifact, ArtifactKind, ArtifactSet};

/// File name of the manifest in the output root.
pub const INDEX_FILE: &str = "index.css";

/// Extension of files the manifest picks up during a scan.
pub const STYLESHEET_EXTENSION: &str = ".css";

/// Ordered list of style-sheet paths relative to the output root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexManifest {
    imports: Vec<String>,
}

impl IndexManifest {
    /// Collects every style sheet of an artifact set, in emission order.
    pub fn from_artifacts(artifacts: &ArtifactSet) -> Self {
        Self {
            imports: artifacts.style_sheets().map(|a| a.path.clone()).collect(),
        }
    }

    /// Walks `<root>/css` recursively and collects every `.css` file in the
    /// order the filesystem yields them.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::DirectoryNotFound`] if `<root>/css` is missing, or
    /// an I/O error if a directory cannot be read.
    pub fn scan<P: AsRef<Path>>(root: P) -> Result<Self, WriteError> {
        let css_root = root.as_ref().join(CSS_ROOT);
        if !css_root.is_dir() {
            return Err(WriteError::DirectoryNotFound { path: css_root });
        }

        let mut imports = Vec::new();
        scan_recursive(&css_root, CSS_ROOT, &mut imports)?;
        Ok(Self { imports })
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Renders one `@import` line per sheet.
    pub fn render(&self) -> String {
        self.imports
            .iter()
            .map(|path| format!("@import './{}';\n", path))
            .collect()
    }

    /// Wraps the rendered manifest as an artifact.
    pub fn to_artifact(&self) -> Artifact {
        Artifact {
            path: INDEX_FILE.to_string(),
            kind: ArtifactKind::Manifest,
            tier: None,
            contents: self.render(),
        }
    }

    /// Writes `<root>/index.css`.
    pub fn write_to<P: AsRef<Path>>(&self, root: P) -> Result<(), WriteError> {
        let path = root.as_ref().join(INDEX_FILE);
        write_file(&path, &self.render())?;
        log::info!("Generated {} at {}", INDEX_FILE, path.display());
        Ok(())
    }
}

fn scan_recursive(current: &Path, relative: &str, imports: &mut Vec<String>) -> Result<(), WriteError> {
    let entries = std::fs::read_dir(current).map_err(|source| WriteError::Io {
        path: current.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| WriteError::Io {
            path: current.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let entry_relative = format!("{}/{}", relative, name);

        if path.is_dir() {
            scan_recursive(&path, &entry_relative, imports)?;
        } else if path.is_file() && name.ends_with(STYLESHEET_EXTENSION) {
            imports.push(entry_relative);
        }
    }

    Ok(())
}
