//! In-memory artifact set and the writer that commits it to disk.
//!
//! Generation produces a complete [`ArtifactSet`] before anything touches the
//! filesystem. A failed run therefore never leaves half an output tree.

use std::path::{Path, PathBuf};

use crate::error::WriteError;
use crate::layout::Tier;

/// What an artifact contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Custom-property sheet (primitives, semantic tokens).
    VariableSheet,
    /// Utility-class rules.
    UtilitySheet,
    /// `*-types.d.ts` typed enumeration.
    TypedNames,
    /// `*-names.js` plain list.
    PlainNames,
    /// `index.css` import manifest.
    Manifest,
}

impl ArtifactKind {
    /// Returns true for files the index manifest imports.
    pub fn is_style_sheet(self) -> bool {
        matches!(self, ArtifactKind::VariableSheet | ArtifactKind::UtilitySheet)
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub kind: ArtifactKind,
    /// Tier the artifact belongs to; `None` for the manifest.
    pub tier: Option<Tier>,
    pub contents: String,
}

/// Ordered collection of generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an artifact. A later artifact with the same path replaces the
    /// earlier one in place.
    pub fn push(&mut self, artifact: Artifact) {
        if let Some(existing) = self.artifacts.iter_mut().find(|a| a.path == artifact.path) {
            log::warn!("{} generated twice; keeping the later contents", artifact.path);
            *existing = artifact;
        } else {
            self.artifacts.push(artifact);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }

    /// Style sheets in emission order.
    pub fn style_sheets(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| a.kind.is_style_sheet())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Counts artifacts of one kind.
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind == kind).count()
    }

    /// Writes every artifact below `root`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O failure. Artifacts written before it stay on disk.
    pub fn write_to<P: AsRef<Path>>(&self, root: P) -> Result<Vec<PathBuf>, WriteError> {
        let root = root.as_ref();
        let mut written = Vec::with_capacity(self.artifacts.len());

        for artifact in &self.artifacts {
            let path = resolve_path(root, &artifact.path);
            write_file(&path, &artifact.contents)?;
            log::info!("Generated {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// Joins a `/`-separated relative path onto `root`.
pub fn resolve_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| WriteError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            log::debug!("Created folder: {}", parent.display());
        }
    }
    std::fs::write(path, contents).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
