//! Error types for token parsing, generation, and artifact writing.
//!
//! Only a handful of conditions are fatal. Malformed reference syntax is a
//! literal, and unresolved references are handled by
//! [`UnresolvedPolicy`](crate::UnresolvedPolicy) rather than surfacing here
//! unless the policy asks for it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a token definition into a [`TokenGraph`](crate::TokenGraph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The document is not valid YAML/JSON.
    #[error("failed to parse token definitions{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A section, group, or category has the wrong shape.
    #[error("invalid {what} '{name}': {message}")]
    InvalidStructure {
        what: &'static str,
        name: String,
        message: String,
    },

    /// A utility-class spec is missing a required field or has a bad value.
    #[error("invalid utility '{utility}' in group '{group}': {message}")]
    InvalidUtility {
        group: String,
        utility: String,
        message: String,
    },

    /// The token file could not be read.
    #[error("failed to load token definitions: {message}")]
    Load { message: String },
}

/// Errors raised while loading a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
}

/// Fatal conditions that abort a generation run.
///
/// When one of these is returned nothing has been written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A utility spec has no `property` and legacy derivation is off.
    #[error(
        "utility config for prefix \"{prefix}\" ('{utility}' in group '{group}') requires a \"property\" field"
    )]
    MissingProperty {
        group: String,
        utility: String,
        prefix: String,
    },

    /// A utility's token reference did not resolve and the policy is `fail`.
    #[error("utility '{utility}' in group '{group}' references unknown tokens {reference}")]
    UnresolvedReference {
        group: String,
        utility: String,
        reference: String,
    },
}

/// I/O failures while writing artifacts or scanning an output tree.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
