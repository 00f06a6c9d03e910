//! Domain value objects: StyleLanguage, TemplateSetVersion, ClassBase,
//! ComponentKind, StyleUsage.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Path and suffix lookups by string key live in `catalog.rs`; this file only
//! defines the types, their string representations, and their `FromStr`
//! parsers.
//!
//! # Adding a Style Language
//!
//! 1. Add the enum variant and its `as_str`/`suffix` arms here
//! 2. Add it to [`StyleLanguage::ALL`]
//! 3. Add a `ChoiceDef` in `catalog.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── StyleLanguage ────────────────────────────────────────────────────────────

/// A supported style language for the generated style file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLanguage {
    #[default]
    Css,
    Sass,
    Scss,
    Less,
    Stylus,
}

impl StyleLanguage {
    /// Every supported style, in display order.
    pub const ALL: [StyleLanguage; 5] = [
        Self::Css,
        Self::Sass,
        Self::Scss,
        Self::Less,
        Self::Stylus,
    ];

    /// Catalog key for this style.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Sass => "sass",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Stylus => "stylus",
        }
    }

    /// File suffix, including the leading dot.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Css => ".css",
            Self::Sass => ".sass",
            Self::Scss => ".scss",
            Self::Less => ".less",
            Self::Stylus => ".styl",
        }
    }

    /// Whether the syntax uses indentation instead of braces.
    pub const fn is_indented(&self) -> bool {
        matches!(self, Self::Sass | Self::Stylus)
    }
}

impl fmt::Display for StyleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "sass" => Ok(Self::Sass),
            "scss" => Ok(Self::Scss),
            "less" => Ok(Self::Less),
            "stylus" | "styl" => Ok(Self::Stylus),
            _ => Err(DomainError::UnknownStyle { style: s.into() }),
        }
    }
}

// ── TemplateSetVersion ───────────────────────────────────────────────────────

/// Family of templates and path conventions to generate with.
///
/// Only one version exists today. Unknown numbers are rejected at parse time
/// instead of producing an empty file set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TemplateSetVersion {
    #[default]
    V4,
}

impl TemplateSetVersion {
    pub const CURRENT: Self = Self::V4;

    pub const fn number(&self) -> u32 {
        match self {
            Self::V4 => 4,
        }
    }
}

impl TryFrom<u32> for TemplateSetVersion {
    type Error = DomainError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            4 => Ok(Self::V4),
            other => Err(DomainError::UnsupportedVersion { version: other }),
        }
    }
}

impl From<TemplateSetVersion> for u32 {
    fn from(version: TemplateSetVersion) -> Self {
        version.number()
    }
}

impl fmt::Display for TemplateSetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ── ClassBase ────────────────────────────────────────────────────────────────

/// Base class the generated component extends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassBase {
    /// Re-renders on every parent update.
    #[default]
    #[serde(rename = "React.Component")]
    Component,
    /// Shallow-compares props and state before re-rendering.
    #[serde(rename = "React.PureComponent")]
    PureComponent,
}

impl ClassBase {
    pub const fn for_purity(is_pure: bool) -> Self {
        if is_pure {
            Self::PureComponent
        } else {
            Self::Component
        }
    }

    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Component => "React.Component",
            Self::PureComponent => "React.PureComponent",
        }
    }
}

impl fmt::Display for ClassBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

// ── ComponentKind / StyleUsage ───────────────────────────────────────────────

/// Shape of the generated component source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Stateful,
    Stateless,
}

impl ComponentKind {
    pub const fn from_stateless(is_stateless: bool) -> Self {
        if is_stateless {
            Self::Stateless
        } else {
            Self::Stateful
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stateful => "Stateful",
            Self::Stateless => "Stateless",
        }
    }
}

/// Whether a style file is generated and imported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleUsage {
    #[default]
    WithStyles,
    NoStyles,
}

impl StyleUsage {
    pub const fn from_flag(use_styles: bool) -> Self {
        if use_styles {
            Self::WithStyles
        } else {
            Self::NoStyles
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithStyles => "WithStyles",
            Self::NoStyles => "NoStyles",
        }
    }

    pub const fn uses_styles(&self) -> bool {
        matches!(self, Self::WithStyles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!("SCSS".parse::<StyleLanguage>().unwrap(), StyleLanguage::Scss);
        assert_eq!("styl".parse::<StyleLanguage>().unwrap(), StyleLanguage::Stylus);
    }

    #[test]
    fn unknown_style_is_explicit_error() {
        assert_eq!(
            "postcss".parse::<StyleLanguage>(),
            Err(DomainError::UnknownStyle {
                style: "postcss".into()
            })
        );
    }

    #[test]
    fn version_four_is_current() {
        assert_eq!(TemplateSetVersion::try_from(4).unwrap(), TemplateSetVersion::CURRENT);
        assert_eq!(TemplateSetVersion::default(), TemplateSetVersion::CURRENT);
    }

    #[test]
    fn other_versions_are_rejected() {
        for v in [0, 3, 5] {
            assert_eq!(
                TemplateSetVersion::try_from(v),
                Err(DomainError::UnsupportedVersion { version: v })
            );
        }
    }

    #[test]
    fn class_base_follows_purity() {
        assert_eq!(ClassBase::for_purity(true).identifier(), "React.PureComponent");
        assert_eq!(ClassBase::for_purity(false).identifier(), "React.Component");
    }

    #[test]
    fn class_base_serializes_as_identifier() {
        let json = serde_json::to_string(&ClassBase::PureComponent).unwrap();
        assert_eq!(json, "\"React.PureComponent\"");
    }
}
