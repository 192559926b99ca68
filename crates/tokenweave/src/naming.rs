//! Identifier casing shared by every emitted artifact.
//!
//! Tokens are authored with free-form keys (`gray150`, `backgroundHover`,
//! `data viz`). Every name that reaches an output file is derived from the
//! authored key through these functions, never cased by hand:
//!
//! | Artifact            | Derivation                                   | Example            |
//! |---------------------|----------------------------------------------|--------------------|
//! | CSS variable        | `--` + [`to_delimited`]                      | `--background-hover` |
//! | Utility class       | prefix + [`to_capitalized`]([`to_delimited`]) | `backgroundBackgroundHover` |
//! | Name list entry     | same string as the CSS side                  | `background-hover` |
//!
//! Because the three artifact kinds are emitted independently, routing all of
//! them through one pair of functions is what keeps them byte-identical.

/// Separator used by the delimited form.
pub const SEPARATOR: char = '-';

/// Converts an identifier to its delimited-lowercase form.
///
/// A separator is inserted at every ASCII lowercase → uppercase boundary,
/// runs of whitespace collapse into a single separator, and the result is
/// lowercased. Already-delimited input comes back unchanged.
///
/// ```rust
/// use tokenweave::naming::to_delimited;
///
/// assert_eq!(to_delimited("backgroundHover"), "background-hover");
/// assert_eq!(to_delimited("data viz"), "data-viz");
/// assert_eq!(to_delimited("gray150"), "gray150");
/// assert_eq!(to_delimited("groww-primary"), "groww-primary");
/// ```
pub fn to_delimited(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_whitespace = false;

    for ch in identifier.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(SEPARATOR);
                in_whitespace = true;
            }
            prev = Some(ch);
            continue;
        }
        in_whitespace = false;

        if ch.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push(SEPARATOR);
        }
        out.push(ch);
        prev = Some(ch);
    }

    out.to_lowercase()
}

/// Converts a delimited identifier to its capitalized-concatenation form.
///
/// Splits on [`SEPARATOR`], uppercases the first character of each segment
/// and joins with nothing in between. Casing inside a segment is kept as-is,
/// so this is not an inverse of [`to_delimited`].
///
/// ```rust
/// use tokenweave::naming::to_capitalized;
///
/// assert_eq!(to_capitalized("background-hover"), "BackgroundHover");
/// assert_eq!(to_capitalized("gray150"), "Gray150");
/// assert_eq!(to_capitalized("interactionHover"), "InteractionHover");
/// ```
pub fn to_capitalized(identifier: &str) -> String {
    identifier
        .split(SEPARATOR)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .concat()
}

/// Strips every non-word character from a group name so it can start a
/// TypeScript export identifier (`groww-primary` → `growwprimary`).
pub fn identifier_stem(group: &str) -> String {
    group
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // to_delimited
    // =========================================================================

    #[test]
    fn test_delimited_camel_case() {
        assert_eq!(to_delimited("dataVizLilac"), "data-viz-lilac");
        assert_eq!(to_delimited("dangerouslySetPrimaryBg"), "dangerously-set-primary-bg");
    }

    #[test]
    fn test_delimited_digits_do_not_split() {
        assert_eq!(to_delimited("gray150"), "gray150");
        assert_eq!(to_delimited("overlay00"), "overlay00");
    }

    #[test]
    fn test_delimited_uppercase_runs_split_once() {
        // Only a lowercase letter followed by an uppercase one is a boundary.
        assert_eq!(to_delimited("tempNBTPink"), "temp-nbtpink");
        assert_eq!(to_delimited("URLValue"), "urlvalue");
    }

    #[test]
    fn test_delimited_whitespace_collapses() {
        assert_eq!(to_delimited("primary  text"), "primary-text");
        assert_eq!(to_delimited("primary\tText"), "primary-text");
    }

    #[test]
    fn test_delimited_empty() {
        assert_eq!(to_delimited(""), "");
    }

    // =========================================================================
    // to_capitalized
    // =========================================================================

    #[test]
    fn test_capitalized_segments() {
        assert_eq!(to_capitalized("data-viz-lilac"), "DataVizLilac");
        assert_eq!(to_capitalized("primary"), "Primary");
    }

    #[test]
    fn test_capitalized_keeps_inner_case() {
        assert_eq!(to_capitalized("interactionHover"), "InteractionHover");
    }

    #[test]
    fn test_capitalized_empty_segments_vanish() {
        assert_eq!(to_capitalized("a--b"), "AB");
        assert_eq!(to_capitalized(""), "");
    }

    #[test]
    fn test_identifier_stem() {
        assert_eq!(identifier_stem("groww-primary"), "growwprimary");
        assert_eq!(identifier_stem("data viz.v2"), "datavizv2");
        assert_eq!(identifier_stem("temporary_1"), "temporary_1");
    }

    proptest! {
        #[test]
        fn delimited_is_idempotent(s in "[a-zA-Z0-9 ]{0,24}") {
            let once = to_delimited(&s);
            prop_assert_eq!(to_delimited(&once), once.clone());
        }

        #[test]
        fn delimited_has_no_uppercase_or_whitespace(s in "[a-zA-Z0-9 \t]{0,24}") {
            let out = to_delimited(&s);
            prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()));
        }

        #[test]
        fn capitalized_has_no_separator(s in "[a-z0-9-]{0,24}") {
            prop_assert!(!to_capitalized(&s).contains(SEPARATOR));
        }
    }
}
