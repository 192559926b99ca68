//! Typed enumerations and plain name lists.
//!
//! Every identifier set is written twice from the same [`NameList`]:
//!
//! ```ts
//! // *-types.d.ts
//! export const coreColorsPrimitiveTokens = [
//!   "black",
//!   "white"
//! ] as const;
//! export type coreColorsPrimitiveToken = typeof coreColorsPrimitiveTokens[number];
//!
//! // *-names.js
//! export const coreColorsPrimitiveTokenNames = [
//!   "black",
//!   "white"
//! ];
//! ```
//!
//! Both renderings share one literal, so the sequences cannot drift apart.

use std::collections::BTreeSet;

use serde_json::Value;

/// A deduplicated, lexicographically sorted list of identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Collects identifiers, dropping duplicates and sorting.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            names: set.into_iter().collect(),
        }
    }

    /// Sorted, deduplicated union of several lists.
    pub fn union<'a, I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a NameList>,
    {
        Self::new(lists.into_iter().flat_map(|l| l.names.iter().cloned()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The shared literal: a JSON array with two-space indentation, or `[]`.
    pub fn literal(&self) -> String {
        let array = Value::Array(self.names.iter().cloned().map(Value::String).collect());
        format!("{:#}", array)
    }
}

/// Export identifiers for one artifact pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNames {
    /// Constant in the typed file, e.g. `coreColorsPrimitiveTokens`.
    pub constant: String,
    /// Type alias, e.g. `coreColorsPrimitiveToken`.
    pub type_alias: String,
    /// Constant in the plain file, e.g. `coreColorsPrimitiveTokenNames`.
    pub names_constant: String,
}

impl ExportNames {
    /// Builds the three identifiers from a base and the singular/plural kind.
    pub fn new(base: &str, singular: &str, plural: &str) -> Self {
        Self {
            constant: format!("{}{}", base, plural),
            type_alias: format!("{}{}", base, singular),
            names_constant: format!("{}{}Names", base, singular),
        }
    }
}

/// Renders the typed enumeration.
pub fn render_typed(list: &NameList, header: &str, exports: &ExportNames) -> String {
    format!(
        "// {header}\nexport const {constant} = {literal} as const;\nexport type {alias} = typeof {constant}[number];\n",
        header = header,
        constant = exports.constant,
        literal = list.literal(),
        alias = exports.type_alias,
    )
}

/// Renders the plain list.
pub fn render_plain(list: &NameList, header: &str, exports: &ExportNames) -> String {
    format!(
        "// {}\nexport const {} = {};\n",
        header,
        exports.names_constant,
        list.literal()
    )
}
