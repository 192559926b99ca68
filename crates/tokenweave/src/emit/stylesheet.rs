//! Theme-paired CSS custom-property sheets.
//!
//! Each token category becomes two rule blocks with the same variable names:
//!
//! ```css
//! html {
//!   --gray150: #e9e9eb;
//! }
//!
//! html[data-theme="dark"] {
//!   --gray150: #2e2e2e;
//! }
//! ```
//!
//! Theme pairs contribute their `light` side to the default block and their
//! `dark` side to the alternate block. Everything else is written identically
//! to both. Declarations follow document order.

use std::collections::HashSet;

use crate::config::ThemeSelectors;
use crate::graph::{Category, TokenDefinition};
use crate::naming::to_delimited;
use crate::reference::{resolve_shallow, TokenValue};

/// One `--name: value;` line. `name` excludes the leading dashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// The default and alternate blocks for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSheet {
    default: Vec<Declaration>,
    alternate: Vec<Declaration>,
}

impl VariableSheet {
    pub fn default_block(&self) -> &[Declaration] {
        &self.default
    }

    pub fn alternate_block(&self) -> &[Declaration] {
        &self.alternate
    }

    /// Variable names in emission order; these are also the name-list entries.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.default.iter().map(|d| d.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_empty()
    }

    /// Renders both blocks, default first.
    pub fn render(&self, selectors: &ThemeSelectors) -> String {
        format!(
            "{}\n{}",
            render_block(&selectors.default_selector, &self.default),
            render_block(&selectors.alternate_selector, &self.alternate)
        )
    }
}

fn render_block(selector: &str, declarations: &[Declaration]) -> String {
    let mut out = format!("{} {{\n", selector);
    for decl in declarations {
        out.push_str(&format!("  --{}: {};\n", decl.name, decl.value));
    }
    out.push_str("}\n");
    out
}

/// Builds the variable sheet for one category.
///
/// `stem` is the category name for semantic tokens (`--background-primary`)
/// and `None` for primitives (`--gray150`). `defined` is the set of variable
/// names the whole graph produces; references whose leaf is not in it are
/// still emitted, with a warning.
pub fn emit_variable_sheet(tokens: &Category, stem: Option<&str>, defined: &HashSet<String>) -> VariableSheet {
    let stem = stem.map(to_delimited);
    let mut sheet = VariableSheet::default();

    for (key, definition) in tokens {
        let leaf = to_delimited(key);
        let name = match &stem {
            Some(stem) => format!("{}-{}", stem, leaf),
            None => leaf,
        };

        let (light, dark) = match definition {
            TokenDefinition::Themed { light, dark } => {
                (resolve_checked(light, &name, defined), resolve_checked(dark, &name, defined))
            }
            TokenDefinition::Single(value) => {
                let value = resolve_checked(value, &name, defined);
                (value.clone(), value)
            }
            TokenDefinition::Opaque(text) => (text.clone(), text.clone()),
        };

        sheet.default.push(Declaration {
            name: name.clone(),
            value: light,
        });
        sheet.alternate.push(Declaration { name, value: dark });
    }

    sheet
}

fn resolve_checked(value: &TokenValue, variable: &str, defined: &HashSet<String>) -> String {
    if let TokenValue::Reference(reference) = value {
        let target = to_delimited(reference.leaf());
        if !defined.contains(&target) {
            log::warn!(
                "--{} references {} but no token defines --{}; the variable will dangle",
                variable,
                reference,
                target
            );
        }
    }
    resolve_shallow(value)
}
