//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{TemplateId, TemplateSetVersion};
use crate::error::KilnResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> KilnResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> KilnResult<()>;
}

/// Port for template source lookup.
///
/// Implemented by:
/// - `kiln_adapters::template_store::BuiltinTemplates` (compiled in)
/// - `kiln_adapters::template_store::DirectoryTemplates` (user overrides)
pub trait TemplateStore: Send + Sync {
    /// Source text of one template.
    fn get(&self, id: &TemplateId) -> KilnResult<String>;

    /// Every template available for a version, sorted by name.
    fn list(&self, version: TemplateSetVersion) -> KilnResult<Vec<TemplateId>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `kiln_adapters::renderer::SimpleRenderer` (`{{ path }}` substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against a serialized `GeneratedFileSet`.
    fn render(&self, source: &str, context: &serde_json::Value) -> KilnResult<String>;
}
