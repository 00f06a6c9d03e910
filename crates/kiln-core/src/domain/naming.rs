//! Component names and the case conversions derived from them.
//!
//! Two families of helpers live here:
//!
//! - **Identifier cases** ([`camel_case`], [`kebab_case`], [`capitalize_first`])
//!   used by the settings resolver. Words are split by `heck`, with digit
//!   runs treated as separate words the way lodash's `kebabCase` splits them.
//! - **Slug helpers** ([`humanize`], [`slugify`], [`camelize`]) used by the
//!   destination helpers to turn free-form paths into file names.
//!
//! | Input           | `camel_case`   | `kebab_case`      |
//! |-----------------|----------------|-------------------|
//! | `peer-groups`   | `peerGroups`   | `peer-groups`     |
//! | `PeerGroups`    | `peerGroups`   | `peer-groups`     |
//! | `HTTPServer`    | `httpServer`   | `http-server`     |
//! | `h1Title`       | `h1Title`      | `h-1-title`       |
//! | `Item2`         | `item2`        | `item-2`          |

use heck::{ToKebabCase, ToLowerCamelCase};
use serde::Serialize;

use crate::domain::error::DomainError;

// ── ComponentName ────────────────────────────────────────────────────────────

/// A validated component name plus its derived case variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    raw: String,
    variants: NameVariants,
}

impl ComponentName {
    /// Validate `raw` and derive its variants.
    ///
    /// Names must be a single path segment: anything containing `/` is
    /// rejected. No other validation happens here.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.contains('/') {
            return Err(DomainError::InvalidName {
                name: raw,
                reason: "name must not contain '/'".into(),
            });
        }
        let variants = NameVariants::derive(&raw);
        Ok(Self { raw, variants })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn variants(&self) -> &NameVariants {
        &self.variants
    }

    pub fn into_variants(self) -> NameVariants {
        self.variants
    }
}

/// Case variants of a component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameVariants {
    pub camel_case: String,
    pub kebab_case: String,
    pub pascal_case: String,
}

impl NameVariants {
    /// Derive the variants from a raw name.
    ///
    /// A name containing `-` is taken to already be kebab-case and is kept
    /// verbatim as the kebab form. Any other name is kept verbatim as the
    /// canonical identifier and the kebab form is derived from it.
    pub fn derive(name: &str) -> Self {
        let (camel_case, kebab_case) = if name.contains('-') {
            (camel_case(name), name.to_string())
        } else {
            (name.to_string(), kebab_case(name))
        };
        let pascal_case = capitalize_first(&camel_case);

        Self {
            camel_case,
            kebab_case,
            pascal_case,
        }
    }
}

// ── Identifier cases ─────────────────────────────────────────────────────────

/// `peer-groups` → `peerGroups`.
pub fn camel_case(s: &str) -> String {
    separate_digits(s).to_lower_camel_case()
}

/// `PeerGroups` → `peer-groups`, `h1Title` → `h-1-title`.
pub fn kebab_case(s: &str) -> String {
    separate_digits(s).to_kebab_case()
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Digit runs are words of their own: `Item2` reads as `Item 2`.
///
/// `heck` handles separators, camel humps and acronyms but keeps digits glued
/// to their neighbours, so the letter/digit transitions are marked first.
fn separate_digits(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        let transition = prev.is_some_and(|p| {
            (p.is_alphabetic() && c.is_ascii_digit()) || (p.is_ascii_digit() && c.is_alphabetic())
        });
        if transition {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

// ── Slug helpers ─────────────────────────────────────────────────────────────

/// `peerGroups_id` → `Peer groups`.
///
/// Splits camel humps with `_`, folds dashes and whitespace into `_`, drops a
/// trailing `_id`, turns underscores into spaces and capitalizes the result.
pub fn humanize(s: &str) -> String {
    let underscored = underscored(s);
    let stripped = underscored.strip_suffix("_id").unwrap_or(&underscored);
    capitalize_first(stripped.replace('_', " ").trim())
}

/// `Peer Groups!` → `peer-groups`.
///
/// Anything outside `[A-Za-z0-9_]`, whitespace and `-` becomes `-`; runs of
/// `-`, `_` and whitespace collapse to a single `-`; leading and trailing
/// dashes are trimmed.
pub fn slugify(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    collapse_separators(replaced.trim(), '-')
        .trim_matches('-')
        .to_string()
}

/// `peer-groups` → `peerGroups`, `peer groups` → `peerGroups`.
///
/// Removes runs of `-`, `_` and whitespace and upper-cases the character that
/// follows each run. The first character is left as-is.
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;

    for c in s.trim().chars() {
        if is_separator(c) {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

fn underscored(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.trim().chars() {
        // start of an upper-case run after a lower-case letter or digit
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('_');
        }
        out.push(c);
        prev = Some(c);
    }

    collapse_separators_matching(&out, |c| c == '-' || c.is_whitespace(), '_').to_lowercase()
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn collapse_separators(s: &str, with: char) -> String {
    collapse_separators_matching(s, is_separator, with)
}

fn collapse_separators_matching(s: &str, is_sep: impl Fn(char) -> bool, with: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.chars() {
        if is_sep(c) {
            if !in_run {
                out.push(with);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── identifier cases ─────────────────────────────────────────────────────

    #[test]
    fn camel_case_from_kebab() {
        assert_eq!(camel_case("peer-groups"), "peerGroups");
        assert_eq!(camel_case("a-b-c"), "aBC");
    }

    #[test]
    fn camel_case_normalises_shouting_words() {
        assert_eq!(camel_case("PEER-GROUPS"), "peerGroups");
        assert_eq!(camel_case("HTTPServer"), "httpServer");
    }

    #[test]
    fn kebab_case_from_pascal() {
        assert_eq!(kebab_case("PeerGroups"), "peer-groups");
        assert_eq!(kebab_case("peerGroups"), "peer-groups");
        assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
    }

    #[test]
    fn kebab_case_splits_digit_runs_into_words() {
        assert_eq!(kebab_case("h1Title"), "h-1-title");
        assert_eq!(kebab_case("Item2"), "item-2");
        assert_eq!(kebab_case("Section10Header"), "section-10-header");
    }

    #[test]
    fn camel_case_joins_digit_words() {
        assert_eq!(camel_case("h-1-title"), "h1Title");
        assert_eq!(camel_case("nav-bar-2"), "navBar2");
    }

    #[test]
    fn kebab_case_treats_punctuation_as_separator() {
        assert_eq!(kebab_case("peer_groups"), "peer-groups");
        assert_eq!(kebab_case("peer.groups v2"), "peer-groups-v-2");
    }

    #[test]
    fn capitalize_first_only_touches_first_char() {
        assert_eq!(capitalize_first("peerGroups"), "PeerGroups");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }

    // ── variants ─────────────────────────────────────────────────────────────

    #[test]
    fn hyphenated_input_is_kept_as_kebab() {
        let v = NameVariants::derive("peer-groups");
        assert_eq!(v.kebab_case, "peer-groups");
        assert_eq!(v.camel_case, "peerGroups");
        assert_eq!(v.pascal_case, "PeerGroups");
    }

    #[test]
    fn plain_input_is_kept_as_identifier() {
        let v = NameVariants::derive("PeerGroups");
        assert_eq!(v.camel_case, "PeerGroups");
        assert_eq!(v.kebab_case, "peer-groups");
        assert_eq!(v.pascal_case, "PeerGroups");
    }

    #[test]
    fn both_input_forms_agree_on_pascal_and_kebab() {
        let a = NameVariants::derive("peer-groups");
        let b = NameVariants::derive("PeerGroups");
        assert_eq!(a.pascal_case, b.pascal_case);
        assert_eq!(a.kebab_case, b.kebab_case);
    }

    #[test]
    fn kebab_round_trip_holds_for_canonical_kebab_names() {
        for name in ["peer-groups", "a-b", "user-profile-card", "h-1-title", "nav-bar-2"] {
            let camel = NameVariants::derive(name).camel_case;
            assert_eq!(kebab_case(&camel), name, "round trip failed for {name}");
        }
    }

    #[test]
    fn hyphen_free_names_have_lowercase_kebab_and_upper_pascal() {
        for name in ["PeerGroups", "button", "NavBar", "HTTPServer", "x"] {
            let v = NameVariants::derive(name);
            assert!(!v.kebab_case.chars().any(char::is_uppercase), "{name}");
            assert!(v.pascal_case.starts_with(|c: char| c.is_uppercase()), "{name}");
        }
    }

    #[test]
    fn slash_is_rejected() {
        assert!(matches!(
            ComponentName::parse("peer/groups"),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn names_without_slash_are_accepted() {
        for name in ["peer-groups", "PeerGroups", "x", "with space", ""] {
            assert!(ComponentName::parse(name).is_ok(), "{name:?}");
        }
    }

    // ── slug helpers ─────────────────────────────────────────────────────────

    #[test]
    fn humanize_splits_humps_and_drops_id() {
        assert_eq!(humanize("peerGroups"), "Peer groups");
        assert_eq!(humanize("user_id"), "User");
        assert_eq!(humanize("  peer-groups  "), "Peer groups");
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("Peer groups"), "peer-groups");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("--a__b--"), "a-b");
    }

    #[test]
    fn camelize_removes_separators() {
        assert_eq!(camelize("peer-groups"), "peerGroups");
        assert_eq!(camelize("peer_groups list"), "peerGroupsList");
        assert_eq!(camelize("Peer-groups"), "PeerGroups");
    }
}
