//! Choice catalog: where each kind of file goes and which suffix it gets.
//!
//! Every path and style suffix the generator knows about is described exactly
//! once in [`CHOICE_REGISTRY`]. Lookups go through the [`ChoiceProvider`]
//! trait so the resolver can be driven by an alternative table in tests.
//!
//! # Adding a Choice
//!
//! 1. Add one [`ChoiceDef`] entry to [`CHOICE_REGISTRY`]
//! 2. That's it. The index is rebuilt from the registry on first use.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::StyleLanguage};

/// Lookup namespace for a [`Choice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceCategory {
    /// Output directories per file kind (`component`, `style`, `test`, ...).
    Path,
    /// Style languages and their file suffixes.
    Style,
}

impl ChoiceCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Style => "style",
        }
    }
}

impl fmt::Display for ChoiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceDef {
    pub category: ChoiceCategory,
    pub key: &'static str,
    pub path: Option<&'static str>,
    pub suffix: Option<&'static str>,
}

impl ChoiceDef {
    const fn path(key: &'static str, path: &'static str) -> Self {
        Self {
            category: ChoiceCategory::Path,
            key,
            path: Some(path),
            suffix: None,
        }
    }

    const fn style(style: StyleLanguage) -> Self {
        Self {
            category: ChoiceCategory::Style,
            key: style.as_str(),
            path: None,
            suffix: Some(style.suffix()),
        }
    }
}

/// Result of a catalog lookup.
///
/// Owned so that providers other than the static one can build entries at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub key: String,
    pub path: Option<String>,
    pub suffix: Option<String>,
}

impl Choice {
    /// The `path` field, or `MissingChoice` naming the absent field.
    pub fn require_path(&self, category: ChoiceCategory) -> Result<&str, DomainError> {
        self.path.as_deref().ok_or_else(|| DomainError::MissingChoice {
            category: category.to_string(),
            key: self.key.clone(),
            field: Some("path"),
        })
    }

    /// The `suffix` field, or `MissingChoice` naming the absent field.
    pub fn require_suffix(&self, category: ChoiceCategory) -> Result<&str, DomainError> {
        self.suffix
            .as_deref()
            .ok_or_else(|| DomainError::MissingChoice {
                category: category.to_string(),
                key: self.key.clone(),
                field: Some("suffix"),
            })
    }
}

impl From<&ChoiceDef> for Choice {
    fn from(def: &ChoiceDef) -> Self {
        Self {
            key: def.key.to_string(),
            path: def.path.map(str::to_string),
            suffix: def.suffix.map(str::to_string),
        }
    }
}

/// Single source of truth for output paths and style suffixes.
pub static CHOICE_REGISTRY: &[ChoiceDef] = &[
    // ── Paths ────────────────────────────────────────────────────────────────
    ChoiceDef::path("action", "src/actions"),
    ChoiceDef::path("source", "src/"),
    ChoiceDef::path("component", "src/components"),
    ChoiceDef::path("style", "src/styles"),
    ChoiceDef::path("store", "src/stores"),
    ChoiceDef::path("test", "test"),
    // ── Styles ───────────────────────────────────────────────────────────────
    ChoiceDef::style(StyleLanguage::Css),
    ChoiceDef::style(StyleLanguage::Sass),
    ChoiceDef::style(StyleLanguage::Scss),
    ChoiceDef::style(StyleLanguage::Less),
    ChoiceDef::style(StyleLanguage::Stylus),
];

/// Port for category + key lookups.
pub trait ChoiceProvider: Send + Sync {
    /// Find the choice registered under `key` in `category`.
    fn choice_by_key(&self, category: ChoiceCategory, key: &str) -> Result<Choice, DomainError>;

    /// All choices in a category, in registration order.
    fn choices(&self, category: ChoiceCategory) -> Vec<Choice>;
}

/// [`ChoiceProvider`] backed by [`CHOICE_REGISTRY`].
#[derive(Debug)]
pub struct StaticCatalog {
    index: HashMap<ChoiceCategory, HashMap<&'static str, &'static ChoiceDef>>,
}

impl StaticCatalog {
    /// The process-wide catalog, indexed on first use.
    pub fn global() -> &'static StaticCatalog {
        static CATALOG: OnceLock<StaticCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self::from_registry(CHOICE_REGISTRY))
    }

    fn from_registry(registry: &'static [ChoiceDef]) -> Self {
        let mut index: HashMap<_, HashMap<_, _>> = HashMap::new();
        for def in registry {
            index.entry(def.category).or_default().insert(def.key, def);
        }
        Self { index }
    }
}

impl ChoiceProvider for StaticCatalog {
    fn choice_by_key(&self, category: ChoiceCategory, key: &str) -> Result<Choice, DomainError> {
        self.index
            .get(&category)
            .and_then(|by_key| by_key.get(key))
            .map(|def| Choice::from(*def))
            .ok_or_else(|| DomainError::MissingChoice {
                category: category.to_string(),
                key: key.into(),
                field: None,
            })
    }

    fn choices(&self, category: ChoiceCategory) -> Vec<Choice> {
        CHOICE_REGISTRY
            .iter()
            .filter(|def| def.category == category)
            .map(Choice::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Keys are unique per category, path entries carry a path, style
    /// entries a suffix, and every [`StyleLanguage`] is registered.
    #[test]
    fn registry_is_consistent() {
        let mut seen = HashSet::new();
        for def in CHOICE_REGISTRY {
            assert!(
                seen.insert((def.category, def.key)),
                "duplicate choice {}/{}",
                def.category,
                def.key
            );
            match def.category {
                ChoiceCategory::Path => assert!(def.path.is_some(), "path {} has no path", def.key),
                ChoiceCategory::Style => {
                    assert!(def.suffix.is_some(), "style {} has no suffix", def.key)
                }
            }
        }
        for style in StyleLanguage::ALL {
            assert!(
                seen.contains(&(ChoiceCategory::Style, style.as_str())),
                "style {style} missing from registry"
            );
        }
    }

    #[test]
    fn looks_up_component_path() {
        let choice = StaticCatalog::global()
            .choice_by_key(ChoiceCategory::Path, "component")
            .unwrap();
        assert_eq!(choice.path.as_deref(), Some("src/components"));
        assert_eq!(choice.suffix, None);
    }

    #[test]
    fn looks_up_stylus_suffix() {
        let choice = StaticCatalog::global()
            .choice_by_key(ChoiceCategory::Style, "stylus")
            .unwrap();
        assert_eq!(choice.suffix.as_deref(), Some(".styl"));
    }

    #[test]
    fn unknown_key_is_missing_choice() {
        let err = StaticCatalog::global()
            .choice_by_key(ChoiceCategory::Path, "reducer")
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingChoice { ref key, .. } if key == "reducer"));
    }

    #[test]
    fn categories_do_not_leak() {
        // "style" is a path key, not a style language
        assert!(
            StaticCatalog::global()
                .choice_by_key(ChoiceCategory::Style, "style")
                .is_err()
        );
    }

    #[test]
    fn require_suffix_names_missing_field() {
        let choice = StaticCatalog::global()
            .choice_by_key(ChoiceCategory::Path, "test")
            .unwrap();
        let err = choice.require_suffix(ChoiceCategory::Path).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingChoice {
                category: "path".into(),
                key: "test".into(),
                field: Some("suffix"),
            }
        );
    }

    #[test]
    fn lists_styles_in_order() {
        let keys: Vec<_> = StaticCatalog::global()
            .choices(ChoiceCategory::Style)
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, ["css", "sass", "scss", "less", "stylus"]);
    }
}
