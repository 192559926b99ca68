//! The three-tier token namespace.
//!
//! ```text
//! primitives      group → category → token     raw values, per theme
//! semanticTokens  group → category → token     roles, usually references to primitives
//! utilityClasses  group → utility  → spec      class generators over a category
//! ```
//!
//! A [`TokenGraph`] is built once from a token document and never mutated
//! afterwards. Every resolver and emitter takes it by shared reference.

mod definition;
mod parser;

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

pub use definition::{TokenDefinition, UtilitySpec, UtilityTokens};
pub use parser::{parse_tokens, UTILITIES_ROOT};

use crate::error::GraphError;
use crate::naming::to_delimited;

/// Tokens of one category, in document order.
pub type Category = IndexMap<String, TokenDefinition>;

/// Groups of categories: `group → category → tokens`.
pub type TokenGroups = IndexMap<String, IndexMap<String, Category>>;

/// Groups of utility specs: `group → utility → spec`.
pub type UtilityGroups = IndexMap<String, IndexMap<String, UtilitySpec>>;

/// Immutable, fully parsed token definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenGraph {
    primitives: TokenGroups,
    semantic_tokens: TokenGroups,
    utility_classes: UtilityGroups,
}

impl TokenGraph {
    /// Assembles a graph from already-built sections.
    pub fn new(primitives: TokenGroups, semantic_tokens: TokenGroups, utility_classes: UtilityGroups) -> Self {
        Self {
            primitives,
            semantic_tokens,
            utility_classes,
        }
    }

    /// Parses a graph from YAML (or JSON) text. See [`parse_tokens`].
    pub fn from_yaml(source: &str) -> Result<Self, GraphError> {
        parse_tokens(source)
    }

    /// Reads and parses a token file.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Load`] if the file cannot be read, and a parse
    /// error (carrying the path) if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GraphError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        parse_tokens(&content).map_err(|e| match e {
            GraphError::Parse { message, .. } => GraphError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    pub fn primitives(&self) -> &TokenGroups {
        &self.primitives
    }

    pub fn semantic_tokens(&self) -> &TokenGroups {
        &self.semantic_tokens
    }

    pub fn utility_classes(&self) -> &UtilityGroups {
        &self.utility_classes
    }

    /// Returns true if all three sections are empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.semantic_tokens.is_empty() && self.utility_classes.is_empty()
    }

    /// Every CSS variable name (without `--`) the style sheets will define.
    ///
    /// Used to flag shallow references that point at nothing.
    pub fn defined_variables(&self) -> HashSet<String> {
        let mut names = HashSet::new();
        for categories in self.primitives.values() {
            for tokens in categories.values() {
                names.extend(tokens.keys().map(|k| to_delimited(k)));
            }
        }
        for categories in self.semantic_tokens.values() {
            for (category, tokens) in categories {
                let stem = to_delimited(category);
                names.extend(tokens.keys().map(|k| format!("{}-{}", stem, to_delimited(k))));
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(TokenGraph::default().is_empty());
    }

    #[test]
    fn test_defined_variables() {
        let graph = TokenGraph::from_yaml(
            r##"
            primitives:
              core:
                colors:
                  gray150: "#e9e9eb"
                  dataVizLilac: "#7A7AC6"
            semanticTokens:
              core:
                interaction:
                  backgroundHover: "{core.colors.gray150}"
            "##,
        )
        .unwrap();

        let vars = graph.defined_variables();
        assert!(vars.contains("gray150"));
        assert!(vars.contains("data-viz-lilac"));
        assert!(vars.contains("interaction-background-hover"));
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.yaml");
        fs::write(&path, "primitives:\n  core:\n    colors:\n      black: \"#121212\"\n").unwrap();

        let graph = TokenGraph::from_file(&path).unwrap();
        assert_eq!(graph.primitives()["core"]["colors"].len(), 1);
    }

    #[test]
    fn test_from_file_not_found() {
        let err = TokenGraph::from_file("/nonexistent/tokens.yaml").unwrap_err();
        assert!(matches!(err, GraphError::Load { .. }));
    }

    #[test]
    fn test_from_file_parse_error_has_path() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "primitives: [").unwrap();

        match TokenGraph::from_file(&path).unwrap_err() {
            GraphError::Parse { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("Expected Parse with path, got {:?}", other),
        }
    }
}
