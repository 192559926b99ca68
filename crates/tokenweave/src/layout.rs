//! Output tree layout.
//!
//! ```text
//! <out>/
//!   index.css
//!   css/<tier>/<group>/<category>.css
//!   ts/<tier>/<group>/<category>-types.d.ts
//!   ts/<tier>/<group>/<aggregate>-types.d.ts
//!   ts/<tier>/<aggregate>-types.d.ts
//!   names/<tier>/<group>/<category>-names.js
//!   names/<tier>/<group>/<aggregate>-names.js
//!   names/<tier>/<aggregate>-names.js
//! ```
//!
//! Paths are relative and always use `/`.

use crate::naming::{identifier_stem, to_capitalized, to_delimited};

/// Root directory of the style sheets, relative to the output directory.
pub const CSS_ROOT: &str = "css";
pub const TS_ROOT: &str = "ts";
pub const NAMES_ROOT: &str = "names";

/// The three sections of a token document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Primitives,
    SemanticTokens,
    UtilityClasses,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Primitives, Tier::SemanticTokens, Tier::UtilityClasses];

    /// Folder under `css/`, `ts/` and `names/`.
    pub fn folder(self) -> &'static str {
        match self {
            Tier::Primitives => "variables",
            Tier::SemanticTokens => "tokens",
            Tier::UtilityClasses => "utils",
        }
    }

    /// File stem of aggregate lists.
    pub fn aggregate(self) -> &'static str {
        match self {
            Tier::Primitives => "primitives",
            Tier::SemanticTokens => "tokens",
            Tier::UtilityClasses => "utils",
        }
    }

    /// Human label used in file headers.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Primitives => "primitives",
            Tier::SemanticTokens => "semantic tokens",
            Tier::UtilityClasses => "utility classes",
        }
    }

    /// Singular export suffix (type alias).
    pub fn singular(self) -> &'static str {
        match self {
            Tier::Primitives => "PrimitiveToken",
            Tier::SemanticTokens => "SemanticToken",
            Tier::UtilityClasses => "UtilityClass",
        }
    }

    /// Plural export suffix (typed constant).
    pub fn plural(self) -> &'static str {
        match self {
            Tier::Primitives => "PrimitiveTokens",
            Tier::SemanticTokens => "SemanticTokens",
            Tier::UtilityClasses => "UtilityClasses",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn group_dir(root: &str, tier: Tier, group: &str) -> String {
    format!("{}/{}/{}", root, tier.folder(), to_delimited(group))
}

pub fn category_css_path(tier: Tier, group: &str, category: &str) -> String {
    format!("{}/{}.css", group_dir(CSS_ROOT, tier, group), to_delimited(category))
}

pub fn category_types_path(tier: Tier, group: &str, category: &str) -> String {
    format!("{}/{}-types.d.ts", group_dir(TS_ROOT, tier, group), to_delimited(category))
}

pub fn category_names_path(tier: Tier, group: &str, category: &str) -> String {
    format!("{}/{}-names.js", group_dir(NAMES_ROOT, tier, group), to_delimited(category))
}

pub fn group_types_path(tier: Tier, group: &str) -> String {
    format!("{}/{}-types.d.ts", group_dir(TS_ROOT, tier, group), tier.aggregate())
}

pub fn group_names_path(tier: Tier, group: &str) -> String {
    format!("{}/{}-names.js", group_dir(NAMES_ROOT, tier, group), tier.aggregate())
}

pub fn global_types_path(tier: Tier) -> String {
    format!("{}/{}/{}-types.d.ts", TS_ROOT, tier.folder(), tier.aggregate())
}

pub fn global_names_path(tier: Tier) -> String {
    format!("{}/{}/{}-names.js", NAMES_ROOT, tier.folder(), tier.aggregate())
}

/// Export base for a category list: `growwprimary` + `InteractionHover`.
pub fn category_export_base(group: &str, category: &str) -> String {
    format!("{}{}", identifier_stem(group), to_capitalized(&to_delimited(category)))
}

/// Export base for a group aggregate.
pub fn group_export_base(group: &str) -> String {
    identifier_stem(group)
}
