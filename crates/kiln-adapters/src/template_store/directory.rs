//! User template overrides read from disk.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! └── 4/
//!     ├── components/
//!     │   └── StatefulWithStyles.tpl
//!     └── tests/
//!         └── Base.tpl
//! ```
//!
//! Any template missing from the directory falls back to the built-in one,
//! so an override set only needs the files it changes.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use kiln_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateId, TemplateSetVersion},
    error::{KilnError, KilnResult},
};

use super::BuiltinTemplates;

const EXTENSION: &str = "tpl";

/// Templates loaded from a directory, layered over [`BuiltinTemplates`].
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
    overrides: HashMap<TemplateId, String>,
    fallback: BuiltinTemplates,
}

impl DirectoryTemplates {
    /// Load every `<version>/<name>.tpl` file under `root`.
    ///
    /// Version directories that are not a supported template-set version
    /// are skipped with a warning. Files with another extension are ignored.
    ///
    /// # Errors
    ///
    /// `FilesystemError` if `root` is missing or a file cannot be read.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn load(root: impl AsRef<Path>) -> KilnResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(fs_error(&root, "templates directory not found"));
        }

        let mut overrides = HashMap::new();

        for entry in WalkDir::new(&root).min_depth(2).sort_by_file_name() {
            let entry = entry.map_err(|e| fs_error(&root, &format!("directory walk error: {e}")))?;
            let path = entry.path();

            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION)
            {
                continue;
            }

            let Some(id) = template_id(&root, path) else {
                warn!(path = %path.display(), "skipping template outside a supported version directory");
                continue;
            };

            let source =
                fs::read_to_string(path).map_err(|e| fs_error(path, &format!("read failed: {e}")))?;
            debug!(%id, "loaded template override");
            overrides.insert(id, source);
        }

        debug!(count = overrides.len(), "finished loading templates");
        Ok(Self {
            root,
            overrides,
            fallback: BuiltinTemplates,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of templates found on disk.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_overridden(&self, id: &TemplateId) -> bool {
        self.overrides.contains_key(id)
    }
}

impl TemplateStore for DirectoryTemplates {
    fn get(&self, id: &TemplateId) -> KilnResult<String> {
        match self.overrides.get(id) {
            Some(source) => Ok(source.clone()),
            None => self.fallback.get(id),
        }
    }

    fn list(&self, version: TemplateSetVersion) -> KilnResult<Vec<TemplateId>> {
        let mut names: BTreeSet<String> = self
            .fallback
            .list(version)?
            .into_iter()
            .map(|id| id.name().to_string())
            .collect();
        names.extend(
            self.overrides
                .keys()
                .filter(|id| id.version() == version)
                .map(|id| id.name().to_string()),
        );

        Ok(names
            .into_iter()
            .map(|name| TemplateId::new(version, name))
            .collect())
    }
}

/// `<root>/4/components/X.tpl` → `4/components/X`.
fn template_id(root: &Path, path: &Path) -> Option<TemplateId> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let mut segments = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?
        .into_iter();

    let version = segments.next()?.parse::<u32>().ok()?;
    let version = TemplateSetVersion::try_from(version).ok()?;
    let name = segments.collect::<Vec<_>>().join("/");

    (!name.is_empty()).then(|| TemplateId::new(version, name))
}

fn fs_error(path: &Path, reason: &str) -> KilnError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn base_id() -> TemplateId {
        TemplateId::new(TemplateSetVersion::V4, "tests/Base")
    }

    #[test]
    fn override_wins_over_builtin() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "4/tests/Base.tpl", "custom {{ names.kebabCase }}");

        let store = DirectoryTemplates::load(dir.path()).unwrap();

        assert_eq!(store.override_count(), 1);
        assert!(store.is_overridden(&base_id()));
        assert_eq!(store.get(&base_id()).unwrap(), "custom {{ names.kebabCase }}");
    }

    #[test]
    fn missing_names_fall_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryTemplates::load(dir.path()).unwrap();

        let source = store.get(&base_id()).unwrap();
        assert!(source.contains("describe("));
    }

    #[test]
    fn unsupported_versions_and_other_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "3/tests/Base.tpl", "old");
        write(dir.path(), "4/tests/README.md", "notes");

        let store = DirectoryTemplates::load(dir.path()).unwrap();
        assert_eq!(store.override_count(), 0);
    }

    #[test]
    fn list_merges_overrides_with_builtins() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "4/components/Extra.tpl", "x");

        let store = DirectoryTemplates::load(dir.path()).unwrap();
        let names: Vec<_> = store
            .list(TemplateSetVersion::V4)
            .unwrap()
            .into_iter()
            .map(|id| id.name().to_string())
            .collect();

        assert!(names.contains(&"components/Extra".to_string()));
        assert!(names.contains(&"tests/Base".to_string()));
        assert_eq!(names.len(), crate::template_store::BUILTIN_V4.len() + 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(DirectoryTemplates::load(dir.path().join("nope")).is_err());
    }
}
