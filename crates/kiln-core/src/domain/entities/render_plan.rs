//! Render plan: which files a component produces and which template each
//! one comes from.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    destination::component_template_name,
    entities::common::RelativePath,
    error::DomainError,
    settings::GeneratedFileSet,
    value_objects::{ComponentKind, StyleLanguage, StyleUsage, TemplateSetVersion},
};

/// Identifies one template inside a template set: `4/components/StatefulWithStyles`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId {
    version: TemplateSetVersion,
    /// `/`-separated name without extension (e.g. `tests/Base`)
    name: String,
}

impl TemplateId {
    pub fn new(version: TemplateSetVersion, name: impl Into<String>) -> Self {
        Self {
            version,
            name: name.into(),
        }
    }

    /// Parse from `version/name` format.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (version, name) = s.split_once('/').ok_or_else(|| DomainError::MissingChoice {
            category: "template".into(),
            key: s.into(),
            field: None,
        })?;
        let number: u32 = version
            .parse()
            .map_err(|_| DomainError::MissingChoice {
                category: "template".into(),
                key: s.into(),
                field: None,
            })?;
        Ok(Self::new(TemplateSetVersion::try_from(number)?, name))
    }

    pub fn version(&self) -> TemplateSetVersion {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.version, self.name)
    }
}

/// One file to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: RelativePath,
    pub template: TemplateId,
}

/// Ordered list of files for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    files: Vec<PlannedFile>,
}

impl RenderPlan {
    /// Build the plan for a resolved file set.
    ///
    /// Always plans the component and its test; the style file only when
    /// `usage` asks for styles.
    pub fn build(
        file_set: &GeneratedFileSet,
        version: TemplateSetVersion,
        style: StyleLanguage,
        kind: ComponentKind,
        usage: StyleUsage,
    ) -> Result<Self, DomainError> {
        let component = &file_set.component;
        let test = &file_set.test;

        let mut files = vec![
            PlannedFile {
                path: RelativePath::try_new(format!("{}{}", component.path, component.file_name))?,
                template: TemplateId::new(
                    version,
                    format!("components/{}", component_template_name(kind, usage)),
                ),
            },
            PlannedFile {
                path: RelativePath::try_new(format!("{}{}", test.path, test.file_name))?,
                template: TemplateId::new(version, "tests/Base"),
            },
        ];

        if usage.uses_styles() {
            let syntax = if style.is_indented() { "Indented" } else { "Braces" };
            files.push(PlannedFile {
                path: RelativePath::try_new(format!(
                    "{}{}",
                    file_set.style.path, file_set.style.file_name
                ))?,
                template: TemplateId::new(version, format!("styles/{syntax}")),
            });
        }

        let plan = Self { files };
        plan.validate(&file_set.names.pascal_case)?;
        Ok(plan)
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn validate(&self, component: &str) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyRenderPlan {
                component: component.into(),
            });
        }
        ensure_unique(self.files.iter().map(|f| f.path.as_path()))
    }
}

/// A rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Rendered files ready to be written under `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    root: PathBuf,
    files: Vec<FileToWrite>,
}

impl RenderedComponent {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.files.push(FileToWrite { path, content });
    }

    pub fn with_file(mut self, path: RelativePath, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    /// Absolute (root-joined) target of every file, in plan order.
    pub fn targets(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|f| f.path.under(&self.root))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyRenderPlan {
                component: self.root.display().to_string(),
            });
        }
        ensure_unique(self.files.iter().map(|f| f.path.as_path()))
    }
}

fn ensure_unique<'a>(paths: impl Iterator<Item = &'a Path>) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for path in paths {
        if !seen.insert(path) {
            return Err(DomainError::DuplicatePath {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}
