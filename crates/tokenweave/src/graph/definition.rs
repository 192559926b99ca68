//! Parsed token and utility-class definitions.
//!
//! # YAML Formats
//!
//! ```yaml
//! # Theme pair - both keys required
//! gray150: { light: "#e9e9eb", dark: "#2e2e2e" }
//!
//! # Single value - used for both themes
//! radius: 4px
//!
//! # Reference - resolved at emission time
//! secondary: "{groww-primary.colors.gray150}"
//! ```
//!
//! Anything else (a mapping with only `light`, a list, `null`) is kept as an
//! opaque value and emitted as compact JSON text in both themes.
//!
//! Unquoted numbers go through the YAML number type and are re-serialised, so
//! `opacity: 0.50` becomes `0.5`. Quote the value to keep it exactly as
//! written.

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::GraphError;
use crate::reference::{Reference, TokenValue};

/// A primitive or semantic token as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenDefinition {
    /// Separate values for the default and alternate theme.
    Themed { light: TokenValue, dark: TokenValue },
    /// One value shared by both themes.
    Single(TokenValue),
    /// A node that is neither a scalar nor a complete pair.
    Opaque(String),
}

impl TokenDefinition {
    /// Classifies a YAML node. Never fails: unrecognised shapes become
    /// [`TokenDefinition::Opaque`].
    pub fn parse(value: &Value) -> Self {
        if let Value::Mapping(map) = value {
            let light = map.get("light").filter(|v| !v.is_null());
            let dark = map.get("dark").filter(|v| !v.is_null());
            if let (Some(light), Some(dark)) = (light, dark) {
                return TokenDefinition::Themed {
                    light: side_value(light),
                    dark: side_value(dark),
                };
            }
        }

        match scalar_value(value) {
            Some(v) => TokenDefinition::Single(v),
            None => TokenDefinition::Opaque(opaque_text(value)),
        }
    }

    /// Shorthand for a themed definition from two authored strings.
    pub fn themed(light: &str, dark: &str) -> Self {
        TokenDefinition::Themed {
            light: TokenValue::parse(light),
            dark: TokenValue::parse(dark),
        }
    }

    /// Shorthand for a single-value definition from an authored string.
    pub fn single(value: &str) -> Self {
        TokenDefinition::Single(TokenValue::parse(value))
    }

    pub fn is_themed(&self) -> bool {
        matches!(self, TokenDefinition::Themed { .. })
    }
}

/// A utility-class group entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilitySpec {
    /// Class-name prefix, used verbatim (`background` → `.backgroundPrimary`).
    pub prefix: String,
    /// CSS property to set. Required at generation time unless legacy
    /// derivation is enabled.
    pub property: Option<String>,
    /// Optional pseudo-selector appended to the class, e.g. `:hover`.
    pub pseudo: Option<String>,
    /// Where the class tokens come from.
    pub tokens: UtilityTokens,
}

/// Token source for a utility spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilityTokens {
    /// A reference resolved by graph walk, e.g. `{semanticTokens.core.background}`.
    Reference(Reference),
    /// A string that is not a reference. Resolves to nothing.
    Literal(String),
    /// Tokens listed directly under the spec.
    Inline(IndexMap<String, TokenDefinition>),
}

impl UtilitySpec {
    /// Parses a utility spec mapping.
    pub fn parse(value: &Value, group: &str, utility: &str) -> Result<Self, GraphError> {
        let invalid = |message: String| GraphError::InvalidUtility {
            group: group.to_string(),
            utility: utility.to_string(),
            message,
        };

        let map = value
            .as_mapping()
            .ok_or_else(|| invalid(format!("expected a mapping, got {}", kind_of(value))))?;

        let prefix = match map.get("prefix") {
            Some(v) => scalar_text(v).ok_or_else(|| invalid("'prefix' must be a string".into()))?,
            None => return Err(invalid("missing 'prefix'".into())),
        };

        let property = optional_text(map.get("property"))
            .map_err(|_| invalid("'property' must be a string".into()))?
            .filter(|p| !p.is_empty());
        let pseudo = optional_text(map.get("pseudo"))
            .map_err(|_| invalid("'pseudo' must be a string".into()))?
            .filter(|p| !p.is_empty());

        let tokens = match map.get("tokens") {
            Some(Value::String(raw)) => match Reference::parse(raw) {
                Some(reference) => UtilityTokens::Reference(reference),
                None => UtilityTokens::Literal(raw.clone()),
            },
            Some(Value::Mapping(entries)) => {
                let mut inline = IndexMap::with_capacity(entries.len());
                for (key, token) in entries {
                    let key = key_text(key).ok_or_else(|| invalid("token keys must be strings".into()))?;
                    inline.insert(key, TokenDefinition::parse(token));
                }
                UtilityTokens::Inline(inline)
            }
            Some(other) => {
                return Err(invalid(format!(
                    "'tokens' must be a reference string or a mapping, got {}",
                    kind_of(other)
                )))
            }
            None => return Err(invalid("missing 'tokens'".into())),
        };

        Ok(UtilitySpec {
            prefix,
            property,
            pseudo,
            tokens,
        })
    }
}

/// Renders a mapping key as text. Numeric and boolean keys are accepted.
pub(crate) fn key_text(key: &Value) -> Option<String> {
    scalar_text(key)
}

/// Returns a YAML node's name for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn optional_text(value: Option<&Value>) -> Result<Option<String>, ()> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => scalar_text(v).map(Some).ok_or(()),
    }
}

fn scalar_value(value: &Value) -> Option<TokenValue> {
    match value {
        Value::String(s) => Some(TokenValue::parse(s)),
        other => scalar_text(other).map(TokenValue::Literal),
    }
}

fn side_value(value: &Value) -> TokenValue {
    scalar_value(value).unwrap_or_else(|| TokenValue::Literal(opaque_text(value)))
}

fn opaque_text(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| {
        serde_yaml::to_string(value)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    })
}
