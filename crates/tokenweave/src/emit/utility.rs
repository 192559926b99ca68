//! Utility-class rules binding one CSS property to token variables.
//!
//! ```css
//! .backgroundPrimary { background-color: var(--background-primary); }
//!
//! .borderPrimary { border: 1px solid var(--border-primary); }
//! ```
//!
//! The class name comes from the utility prefix; the variable name comes from
//! wherever the tokens were defined. The two differ when a `background` utility
//! iterates over the `interaction` category: classes are `.background...`, but
//! the variables are `--interaction-...` because that is what the semantic
//! sheet declared.

use std::collections::HashSet;

use crate::graph::Category;
use crate::naming::{to_capitalized, to_delimited};
use crate::reference::variable_handle;

/// Property that gets the `1px solid` shorthand.
pub const BORDER_PROPERTY: &str = "border";

/// A single `.class[:pseudo] { property: value; }` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityRule {
    /// Class name without the dot or pseudo-selector.
    pub class_name: String,
    pub pseudo: Option<String>,
    pub property: String,
    /// Variable name without the leading dashes.
    pub variable: String,
}

impl UtilityRule {
    /// Renders the rule on one line.
    pub fn render(&self) -> String {
        let handle = variable_handle(&self.variable);
        let declaration = if self.property == BORDER_PROPERTY {
            format!("border: 1px solid {}", handle)
        } else {
            format!("{}: {}", self.property, handle)
        };
        format!(
            ".{}{} {{ {}; }}",
            self.class_name,
            self.pseudo.as_deref().unwrap_or_default(),
            declaration
        )
    }
}

/// All rules for one utility spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilitySheet {
    rules: Vec<UtilityRule>,
}

impl UtilitySheet {
    pub fn rules(&self) -> &[UtilityRule] {
        &self.rules
    }

    /// Class names in emission order; these are the name-list entries.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.class_name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Variables the rules use that are not in `defined`, in rule order.
    pub fn undefined_variables<'a>(&'a self, defined: &'a HashSet<String>) -> impl Iterator<Item = &'a str> {
        self.rules
            .iter()
            .map(|r| r.variable.as_str())
            .filter(move |v| !defined.contains(*v))
    }

    /// Renders every rule followed by a blank line.
    pub fn render(&self) -> String {
        self.rules
            .iter()
            .map(|rule| format!("{}\n\n", rule.render()))
            .collect()
    }
}

/// Inputs describing one utility spec after its property and token source
/// have been settled.
#[derive(Debug, Clone, Copy)]
pub struct UtilityTarget<'a> {
    pub prefix: &'a str,
    pub property: &'a str,
    pub pseudo: Option<&'a str>,
    /// Variable stem already in delimited form, or `None` for unprefixed
    /// (primitive) variables.
    pub stem: Option<&'a str>,
}

/// Builds one rule per token key.
pub fn emit_utility_sheet(target: &UtilityTarget<'_>, tokens: &Category) -> UtilitySheet {
    let rules = tokens
        .keys()
        .map(|key| {
            let leaf = to_delimited(key);
            UtilityRule {
                class_name: class_name(target.prefix, key),
                pseudo: target.pseudo.map(str::to_string),
                property: target.property.to_string(),
                variable: match target.stem {
                    Some(stem) => format!("{}-{}", stem, leaf),
                    None => leaf,
                },
            }
        })
        .collect();

    UtilitySheet { rules }
}

/// `prefix` + capitalized(delimited(key)), e.g. `background` + `backgroundHover`
/// → `backgroundBackgroundHover`.
pub fn class_name(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, to_capitalized(&to_delimited(key)))
}

/// Legacy property guess from a prefix, used only when explicitly enabled.
///
/// | prefix contains | property           |
/// |-----------------|--------------------|
/// | `background`    | `background-color` |
/// | `border`        | `border`           |
/// | anything else   | `color`            |
pub fn derive_property(prefix: &str) -> &'static str {
    let lower = prefix.to_lowercase();
    if lower.contains("background") {
        "background-color"
    } else if lower.contains("border") {
        BORDER_PROPERTY
    } else {
        "color"
    }
}
