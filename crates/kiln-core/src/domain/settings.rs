//! Settings resolver: component name + options → [`GeneratedFileSet`].
//!
//! The resolver is pure. It reads only the choice catalog and returns the
//! descriptors that drive template rendering; it never touches the
//! filesystem.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    catalog::{ChoiceCategory, ChoiceProvider, StaticCatalog},
    error::DomainError,
    naming::{ComponentName, NameVariants},
    value_objects::{ClassBase, StyleLanguage, TemplateSetVersion},
};

/// Suffix of the generated component source file.
pub const COMPONENT_SUFFIX: &str = ".tsx";

/// Suffix of the generated test file.
pub const TEST_SUFFIX: &str = ".spec.ts";

/// Style file descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSettings {
    pub path: String,
    pub file_name: String,
    pub class_name: String,
    pub suffix: String,
}

/// Component source descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSettings {
    pub path: String,
    pub style_file_name: String,
    pub file_name: String,
    pub class_name: String,
    pub class_base: ClassBase,
    pub display_name: String,
    pub component_name: String,
    pub suffix: String,
}

/// Test file descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSettings {
    pub path: String,
    pub style_file_name: String,
    pub class_name: String,
    pub file_name: String,
}

/// Everything needed to render one component, its style and its test.
///
/// All three descriptors share one `path` and one set of name variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFileSet {
    pub names: NameVariants,
    pub style: StyleSettings,
    pub component: ComponentSettings,
    pub test: TestSettings,
}

impl GeneratedFileSet {
    /// Serialize into the context handed to template renderers.
    pub fn to_context(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Resolver over an arbitrary [`ChoiceProvider`].
pub struct SettingsResolver<'a, P: ChoiceProvider + ?Sized> {
    catalog: &'a P,
}

impl<'a, P: ChoiceProvider + ?Sized> SettingsResolver<'a, P> {
    pub fn new(catalog: &'a P) -> Self {
        Self { catalog }
    }

    /// Derive the file set for `name`.
    ///
    /// Omitted options default to `css`, a non-pure base class and the
    /// current template-set version.
    pub fn resolve(
        &self,
        name: &str,
        style: Option<StyleLanguage>,
        is_pure: Option<bool>,
        version: Option<TemplateSetVersion>,
    ) -> Result<GeneratedFileSet, DomainError> {
        let style = style.unwrap_or_default();
        let class_base = ClassBase::for_purity(is_pure.unwrap_or(false));
        let version = version.unwrap_or_default();

        let names = ComponentName::parse(name)?.into_variants();

        let style_choice = self
            .catalog
            .choice_by_key(ChoiceCategory::Style, style.as_str())?;
        let style_suffix = style_choice.require_suffix(ChoiceCategory::Style)?;

        // v4 colocates every file, but the style and test paths must exist
        self.catalog
            .choice_by_key(ChoiceCategory::Path, "style")?
            .require_path(ChoiceCategory::Path)?;
        self.catalog
            .choice_by_key(ChoiceCategory::Path, "test")?
            .require_path(ChoiceCategory::Path)?;

        let component_choice = self
            .catalog
            .choice_by_key(ChoiceCategory::Path, "component")?;
        let component_path = component_choice.require_path(ChoiceCategory::Path)?;

        let path = normalize_dir(&format!("{component_path}/{}/", names.kebab_case));
        let style_file_name = format!("{}{style_suffix}", names.kebab_case);

        let file_set = match version {
            TemplateSetVersion::V4 => {
                let pascal = names.pascal_case.clone();
                GeneratedFileSet {
                    style: StyleSettings {
                        path: path.clone(),
                        file_name: style_file_name.clone(),
                        class_name: pascal.clone(),
                        suffix: style_suffix.to_string(),
                    },
                    component: ComponentSettings {
                        path: path.clone(),
                        style_file_name: style_file_name.clone(),
                        file_name: format!("{}{COMPONENT_SUFFIX}", names.kebab_case),
                        class_name: pascal.clone(),
                        class_base,
                        display_name: pascal.clone(),
                        component_name: pascal.clone(),
                        suffix: COMPONENT_SUFFIX.to_string(),
                    },
                    test: TestSettings {
                        path,
                        style_file_name,
                        class_name: pascal,
                        file_name: format!("{}{TEST_SUFFIX}", names.kebab_case),
                    },
                    names,
                }
            }
        };

        debug!(
            component = name,
            style = %style,
            class_base = %class_base,
            version = %version,
            path = %file_set.component.path,
            "Resolved component settings"
        );

        Ok(file_set)
    }
}

/// Resolve against the built-in catalog.
pub fn resolve(
    name: &str,
    style: Option<StyleLanguage>,
    is_pure: Option<bool>,
    version: Option<TemplateSetVersion>,
) -> Result<GeneratedFileSet, DomainError> {
    SettingsResolver::new(StaticCatalog::global()).resolve(name, style, is_pure, version)
}

/// Normalize a `/`-separated directory path and keep one trailing `/`.
///
/// Empty and `.` segments are dropped; `..` pops the previous segment when
/// there is one.
pub(crate) fn normalize_dir(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{joined}/"),
        (false, true) => "./".to_string(),
        (false, false) => format!("{joined}/"),
    }
}
