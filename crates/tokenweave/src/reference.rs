//! Token values and the two reference-resolution strategies.
//!
//! A token value is either a literal (`#e9e9eb`, `1px`, `0.3`) or a
//! [`Reference`]: a bracketed dotted path such as `{groww-primary.colors.gray150}`
//! pointing somewhere else in the [`TokenGraph`].
//!
//! Two resolvers coexist because call sites need different things:
//!
//! - [`resolve_shallow`] only looks at the last path segment and turns it into a
//!   CSS variable handle (`var(--gray150)`). It never consults the graph, so two
//!   groups defining the same leaf name share one variable.
//! - [`resolve_graph`] walks the full path through the namespaces and returns
//!   the token collection it addresses, for utility classes that iterate over a
//!   whole category.
//!
//! Strings that do not have the exact `{...}` shape are literals. Malformed
//! references are never an error.

use indexmap::IndexMap;

use crate::graph::{TokenDefinition, TokenGraph};
use crate::naming::to_delimited;

/// Root segment selecting the primitive namespace.
pub const PRIMITIVES_ROOT: &str = "primitives";

/// Root segment selecting the semantic-token namespace.
pub const SEMANTIC_ROOT: &str = "semanticTokens";

/// A bracketed dotted path as authored, e.g. `{semanticTokens.core.background}`.
///
/// Segments are kept raw; casing is applied by whoever consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    path: Vec<String>,
}

impl Reference {
    /// Parses a reference, returning `None` for anything that is not exactly
    /// `{` + one or more non-`}` characters + `}`.
    ///
    /// ```rust
    /// use tokenweave::Reference;
    ///
    /// let r = Reference::parse("{colors.gray150}").unwrap();
    /// assert_eq!(r.segments(), ["colors", "gray150"]);
    /// assert!(Reference::parse("colors.gray150").is_none());
    /// assert!(Reference::parse("{}").is_none());
    /// assert!(Reference::parse("{a}b}").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
        if inner.is_empty() || inner.contains('}') {
            return None;
        }
        Some(Self {
            path: inner.split('.').map(str::to_string).collect(),
        })
    }

    /// Builds a reference from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the raw path segments.
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// Returns the final path segment (the leaf token name).
    pub fn leaf(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    fn segment(&self, index: usize) -> Option<&str> {
        self.path.get(index).map(String::as_str)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.path.join("."))
    }
}

/// A single token value: literal text or a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// Emitted verbatim.
    Literal(String),
    /// Resolved before emission.
    Reference(Reference),
}

impl TokenValue {
    /// Classifies an authored string.
    pub fn parse(raw: &str) -> Self {
        match Reference::parse(raw) {
            Some(reference) => TokenValue::Reference(reference),
            None => TokenValue::Literal(raw.to_string()),
        }
    }

    /// Returns the reference if this value is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            TokenValue::Reference(r) => Some(r),
            TokenValue::Literal(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(raw: &str) -> Self {
        TokenValue::parse(raw)
    }
}

/// Leaf-only resolution: literals pass through, references become
/// `var(--<delimited leaf>)`.
///
/// ```rust
/// use tokenweave::{resolve_shallow, TokenValue};
///
/// let v = TokenValue::parse("{groww-primary.colors.gray150}");
/// assert_eq!(resolve_shallow(&v), "var(--gray150)");
/// assert_eq!(resolve_shallow(&TokenValue::parse("#fff")), "#fff");
/// ```
pub fn resolve_shallow(value: &TokenValue) -> String {
    match value {
        TokenValue::Literal(text) => text.clone(),
        TokenValue::Reference(reference) => variable_handle(&to_delimited(reference.leaf())),
    }
}

/// Wraps a bare variable name (without leading dashes) in `var(--...)`.
pub fn variable_handle(name: &str) -> String {
    format!("var(--{})", name)
}

/// Namespace a resolved collection was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Primitives,
    SemanticTokens,
}

/// A token category located by [`resolve_graph`].
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCollection<'g> {
    /// Namespace the category lives in.
    pub namespace: Namespace,
    /// Group name as authored.
    pub group: &'g str,
    /// Category name as authored.
    pub category: &'g str,
    /// The tokens themselves, in document order.
    pub tokens: &'g IndexMap<String, TokenDefinition>,
}

/// Outcome of a graph walk.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'g> {
    Resolved(ResolvedCollection<'g>),
    Unresolved,
}

impl<'g> Resolution<'g> {
    /// Converts into an `Option`, dropping the unresolved case.
    pub fn ok(self) -> Option<ResolvedCollection<'g>> {
        match self {
            Resolution::Resolved(collection) => Some(collection),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Graph-walk resolution of a reference to a token category.
///
/// Attempts, in order:
///
/// 1. `primitives.<group>.<category>`
/// 2. `semanticTokens.<group>.<category>`
/// 3. `<group>.<category>` looked up in primitives, then in semantic tokens
///
/// Returns [`Resolution::Unresolved`] when nothing matches; that is not an
/// error here, callers apply their own policy.
pub fn resolve_graph<'g>(reference: &Reference, graph: &'g TokenGraph) -> Resolution<'g> {
    let first = reference.segment(0);

    if first == Some(PRIMITIVES_ROOT) {
        if let Some(found) = lookup(graph, Namespace::Primitives, reference.segment(1), reference.segment(2)) {
            return Resolution::Resolved(found);
        }
    }

    if first == Some(SEMANTIC_ROOT) {
        if let Some(found) = lookup(graph, Namespace::SemanticTokens, reference.segment(1), reference.segment(2)) {
            return Resolution::Resolved(found);
        }
    }

    let fallback = lookup(graph, Namespace::Primitives, first, reference.segment(1))
        .or_else(|| lookup(graph, Namespace::SemanticTokens, first, reference.segment(1)));

    match fallback {
        Some(found) => Resolution::Resolved(found),
        None => Resolution::Unresolved,
    }
}

fn lookup<'g>(
    graph: &'g TokenGraph,
    namespace: Namespace,
    group: Option<&str>,
    category: Option<&str>,
) -> Option<ResolvedCollection<'g>> {
    let (group, category) = (group?, category?);
    let groups = match namespace {
        Namespace::Primitives => graph.primitives(),
        Namespace::SemanticTokens => graph.semantic_tokens(),
    };
    let (group_name, categories) = groups.get_key_value(group)?;
    let (category_name, tokens) = categories.get_key_value(category)?;
    Some(ResolvedCollection {
        namespace,
        group: group_name,
        category: category_name,
        tokens,
    })
}
