//! Templates compiled into the binary.
//!
//! The sources live under `templates/<version>/` in this crate and are
//! embedded with `include_str!`, so the binary works without any template
//! files on disk.

use kiln_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateId, TemplateSetVersion},
    error::KilnResult,
};

/// Template set version 4, keyed by template name.
pub static BUILTIN_V4: &[(&str, &str)] = &[
    (
        "components/StatefulNoStyles",
        include_str!("../../templates/4/components/StatefulNoStyles.tpl"),
    ),
    (
        "components/StatefulWithStyles",
        include_str!("../../templates/4/components/StatefulWithStyles.tpl"),
    ),
    (
        "components/StatelessNoStyles",
        include_str!("../../templates/4/components/StatelessNoStyles.tpl"),
    ),
    (
        "components/StatelessWithStyles",
        include_str!("../../templates/4/components/StatelessWithStyles.tpl"),
    ),
    (
        "styles/Braces",
        include_str!("../../templates/4/styles/Braces.tpl"),
    ),
    (
        "styles/Indented",
        include_str!("../../templates/4/styles/Indented.tpl"),
    ),
    ("tests/Base", include_str!("../../templates/4/tests/Base.tpl")),
];

/// Store over the embedded template sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    fn set(version: TemplateSetVersion) -> &'static [(&'static str, &'static str)] {
        match version {
            TemplateSetVersion::V4 => BUILTIN_V4,
        }
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(&self, id: &TemplateId) -> KilnResult<String> {
        Self::set(id.version())
            .iter()
            .find(|(name, _)| *name == id.name())
            .map(|(_, source)| source.to_string())
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() }.into())
    }

    fn list(&self, version: TemplateSetVersion) -> KilnResult<Vec<TemplateId>> {
        Ok(Self::set(version)
            .iter()
            .map(|(name, _)| TemplateId::new(version, *name))
            .collect())
    }
}
