//! Token document parser.
//!
//! Parsing has two phases, mirroring how the graph is consumed later:
//!
//! 1. **Parse**: YAML → `serde_yaml::Value`
//! 2. **Build**: walk the three sections in document order and classify every
//!    leaf into a [`TokenDefinition`] or [`UtilitySpec`]
//!
//! Document order is kept everywhere (`IndexMap`), because style-sheet
//! declarations are emitted in authoring order.

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use super::definition::{key_text, kind_of, TokenDefinition, UtilitySpec};
use super::{Category, TokenGraph, TokenGroups, UtilityGroups};
use crate::error::GraphError;
use crate::layout::Tier;
use crate::naming::to_delimited;
use crate::reference::{PRIMITIVES_ROOT, SEMANTIC_ROOT};

/// Top-level key holding utility-class groups.
pub const UTILITIES_ROOT: &str = "utilityClasses";

/// Parses a token document into a [`TokenGraph`].
///
/// # Errors
///
/// Returns [`GraphError`] if the document is not valid YAML, if a section,
/// group, or category is not a mapping, or if a utility spec is malformed.
///
/// # Example
///
/// ```rust
/// use tokenweave::graph::parse_tokens;
///
/// let graph = parse_tokens(r##"
/// primitives:
///   core:
///     colors:
///       white: { light: "#ffffff", dark: "#121212" }
/// semanticTokens:
///   core:
///     background:
///       primary: "{core.colors.white}"
/// "##).unwrap();
///
/// assert_eq!(graph.primitives()["core"]["colors"].len(), 1);
/// ```
pub fn parse_tokens(source: &str) -> Result<TokenGraph, GraphError> {
    let root: Value = serde_yaml::from_str(source).map_err(|e| GraphError::Parse {
        path: None,
        message: e.to_string(),
    })?;

    let root = match root {
        Value::Null => return Ok(TokenGraph::default()),
        Value::Mapping(map) => map,
        other => {
            return Err(GraphError::InvalidStructure {
                what: "document",
                name: "<root>".to_string(),
                message: format!("expected a mapping, got {}", kind_of(&other)),
            })
        }
    };

    for key in root.keys() {
        let key = key_text(key).unwrap_or_default();
        if ![PRIMITIVES_ROOT, SEMANTIC_ROOT, UTILITIES_ROOT].contains(&key.as_str()) {
            log::debug!("ignoring unknown top-level section '{}'", key);
        }
    }

    Ok(TokenGraph {
        primitives: parse_token_section(&root, PRIMITIVES_ROOT, Tier::Primitives)?,
        semantic_tokens: parse_token_section(&root, SEMANTIC_ROOT, Tier::SemanticTokens)?,
        utility_classes: parse_utility_section(&root)?,
    })
}

fn section<'a>(root: &'a Mapping, name: &str) -> Result<Option<&'a Mapping>, GraphError> {
    match root.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(map)) => Ok(Some(map)),
        Some(other) => Err(GraphError::InvalidStructure {
            what: "section",
            name: name.to_string(),
            message: format!("expected a mapping, got {}", kind_of(other)),
        }),
    }
}

fn parse_token_section(root: &Mapping, name: &str, tier: Tier) -> Result<TokenGroups, GraphError> {
    let mut groups = TokenGroups::new();
    let Some(section) = section(root, name)? else {
        return Ok(groups);
    };

    for (group_key, group_value) in section {
        let group = entry_name(group_key, "group")?;
        let categories = as_mapping(group_value, "group", &group)?;

        let mut parsed = IndexMap::with_capacity(categories.len());
        for (category_key, category_value) in categories {
            let category = entry_name(category_key, "category")?;
            let qualified = format!("{}.{}", group, category);
            check_not_aggregate(&category, tier, "category", &qualified)?;
            let tokens = as_mapping(category_value, "category", &qualified)?;
            parsed.insert(category, parse_category(tokens, &qualified)?);
        }
        groups.insert(group, parsed);
    }

    Ok(groups)
}

fn parse_category(tokens: &Mapping, qualified: &str) -> Result<Category, GraphError> {
    let mut category = Category::with_capacity(tokens.len());
    for (key, value) in tokens {
        let name = entry_name(key, "token")?;
        let definition = TokenDefinition::parse(value);
        if let TokenDefinition::Opaque(text) = &definition {
            log::warn!(
                "token '{}.{}' is neither a value nor a light/dark pair; emitting {} as-is",
                qualified,
                name,
                text
            );
        }
        category.insert(name, definition);
    }
    Ok(category)
}

fn parse_utility_section(root: &Mapping) -> Result<UtilityGroups, GraphError> {
    let mut groups = UtilityGroups::new();
    let Some(section) = section(root, UTILITIES_ROOT)? else {
        return Ok(groups);
    };

    for (group_key, group_value) in section {
        let group = entry_name(group_key, "group")?;
        let specs = as_mapping(group_value, "group", &group)?;

        let mut parsed = IndexMap::with_capacity(specs.len());
        for (utility_key, spec) in specs {
            let utility = entry_name(utility_key, "utility")?;
            check_not_aggregate(&utility, Tier::UtilityClasses, "utility", &format!("{}.{}", group, utility))?;
            let spec = UtilitySpec::parse(spec, &group, &utility)?;
            parsed.insert(utility, spec);
        }
        groups.insert(group, parsed);
    }

    Ok(groups)
}

/// Category files share a folder with the group aggregate, so a category
/// named like the aggregate would overwrite it.
fn check_not_aggregate(name: &str, tier: Tier, what: &'static str, qualified: &str) -> Result<(), GraphError> {
    if to_delimited(name) == tier.aggregate() {
        return Err(GraphError::InvalidStructure {
            what,
            name: qualified.to_string(),
            message: format!("'{}' is reserved for the {} aggregate lists", tier.aggregate(), tier.label()),
        });
    }
    Ok(())
}

fn entry_name(key: &Value, what: &'static str) -> Result<String, GraphError> {
    key_text(key).ok_or_else(|| GraphError::InvalidStructure {
        what,
        name: format!("{:?}", key),
        message: "keys must be strings".to_string(),
    })
}

fn as_mapping<'a>(value: &'a Value, what: &'static str, name: &str) -> Result<&'a Mapping, GraphError> {
    value.as_mapping().ok_or_else(|| GraphError::InvalidStructure {
        what,
        name: name.to_string(),
        message: format!("expected a mapping, got {}", kind_of(value)),
    })
}
