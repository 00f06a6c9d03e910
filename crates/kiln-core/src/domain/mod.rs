// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! Pure logic only: name derivation, the choice catalog, the settings
//! resolver, destination helpers and the render plan. Template lookup,
//! rendering and file writes are reached through the ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable results**: A `GeneratedFileSet` is never mutated after creation
//! - **Static configuration**: Paths and suffixes come from one registry
//!
// Public API - what the world sees
pub mod catalog;
pub mod destination;
pub mod entities;
pub mod error;
pub mod naming;
pub mod settings;
pub mod value_objects;

// Re-exports for convenience
pub use catalog::{
    CHOICE_REGISTRY, Choice, ChoiceCategory, ChoiceDef, ChoiceProvider, StaticCatalog,
};
pub use entities::{
    FileToWrite, PlannedFile, RelativePath, RenderPlan, RenderedComponent, TemplateId,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{ComponentName, NameVariants};
pub use settings::{
    ComponentSettings, GeneratedFileSet, SettingsResolver, StyleSettings, TestSettings, resolve,
};
pub use value_objects::{ClassBase, ComponentKind, StyleLanguage, StyleUsage, TemplateSetVersion};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Resolver properties
    // ========================================================================

    const NAMES: &[&str] = &[
        "peer-groups",
        "PeerGroups",
        "button",
        "NavBar",
        "user-profile-card",
        "HTTPServer",
        "item2",
        "a",
    ];

    #[test]
    fn every_slash_free_name_resolves() {
        for name in NAMES {
            assert!(resolve(name, None, None, None).is_ok(), "{name}");
        }
    }

    #[test]
    fn any_slash_fails() {
        for name in ["a/b", "/a", "a/", "peer/groups"] {
            assert!(
                matches!(
                    resolve(name, None, None, None),
                    Err(DomainError::InvalidName { .. })
                ),
                "{name}"
            );
        }
    }

    #[test]
    fn file_names_derive_from_kebab() {
        for name in NAMES {
            let set = resolve(name, None, None, None).unwrap();
            let kebab = &set.names.kebab_case;
            assert_eq!(set.component.file_name, format!("{kebab}.tsx"));
            assert_eq!(set.test.file_name, format!("{kebab}.spec.ts"));
        }
    }

    #[test]
    fn omitted_purity_is_mutable_base() {
        let set = resolve("button", None, None, None).unwrap();
        assert_eq!(set.component.class_base, ClassBase::Component);
    }

    #[test]
    fn every_style_resolves() {
        for style in StyleLanguage::ALL {
            let set = resolve("button", Some(style), None, None).unwrap();
            assert_eq!(set.style.suffix, style.suffix());
            assert!(set.style.file_name.ends_with(style.suffix()));
        }
    }

    // ========================================================================
    // Plan
    // ========================================================================

    #[test]
    fn plan_files_live_under_component_dir() {
        let set = resolve("NavBar", None, None, None).unwrap();
        let plan = RenderPlan::build(
            &set,
            TemplateSetVersion::CURRENT,
            StyleLanguage::Css,
            ComponentKind::Stateful,
            StyleUsage::WithStyles,
        )
        .unwrap();

        for file in plan.files() {
            assert!(
                file.path
                    .as_path()
                    .starts_with("src/components/nav-bar"),
                "{}",
                file.path
            );
        }
    }
}
