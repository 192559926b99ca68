//! Tokenweave - design tokens to theme-aware CSS, utility classes, and typed name lists.
//!
//! A token document has three tiers:
//!
//! - **primitives**: raw values per group and category, optionally split into
//!   a `light`/`dark` pair
//! - **semanticTokens**: named roles whose values are literals or references
//!   to primitives
//! - **utilityClasses**: class generators binding one CSS property to every
//!   token of a referenced category
//!
//! From it Tokenweave produces, for every category, a CSS sheet with two theme
//! blocks, a TypeScript enumeration, and a plain JavaScript name list. The two
//! list artifacts are rendered from the same sorted identifiers the CSS used,
//! and are aggregated per group and globally.
//!
//! # Quick Start
//!
//! ```rust
//! use tokenweave::{generate, GeneratorConfig, TokenGraph};
//!
//! let graph = TokenGraph::from_yaml(r##"
//! primitives:
//!   core:
//!     colors:
//!       gray150: { light: "#e9e9eb", dark: "#2e2e2e" }
//! semanticTokens:
//!   core:
//!     background:
//!       secondary: "{core.colors.gray150}"
//! utilityClasses:
//!   core:
//!     background:
//!       prefix: background
//!       property: background-color
//!       tokens: "{semanticTokens.core.background}"
//! "##).unwrap();
//!
//! let artifacts = generate(&graph, &GeneratorConfig::default()).unwrap();
//!
//! let utils = artifacts.get("css/utils/core/background.css").unwrap();
//! assert_eq!(
//!     utils.contents,
//!     ".backgroundSecondary { background-color: var(--background-secondary); }\n\n"
//! );
//! ```
//!
//! # References
//!
//! `{a.b.c}` strings are resolved two ways. Inside style-sheet values only the
//! leaf matters ([`resolve_shallow`]): `{core.colors.gray150}` becomes
//! `var(--gray150)`. Utility classes walk the full path ([`resolve_graph`]) to
//! fetch the category they iterate over. See [`reference`] for the lookup
//! order.
//!
//! # Output
//!
//! [`generate`] returns an [`ArtifactSet`] and writes nothing. Call
//! [`ArtifactSet::write_to`] once generation has succeeded. The layout is
//! described in [`layout`].

pub mod config;
pub mod emit;
pub mod error;
pub mod graph;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod reference;

mod generate;

pub use config::{GeneratorConfig, ThemeSelectors, UnresolvedPolicy};
pub use error::{ConfigError, GenerateError, GraphError, WriteError};
pub use generate::{generate, Generator};
pub use graph::{parse_tokens, Category, TokenDefinition, TokenGraph, UtilitySpec, UtilityTokens};
pub use layout::Tier;
pub use manifest::IndexManifest;
pub use output::{Artifact, ArtifactKind, ArtifactSet};
pub use reference::{resolve_graph, resolve_shallow, Namespace, Reference, Resolution, ResolvedCollection, TokenValue};
