//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template registered under the requested id.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Template rendering failed.
    #[error("Template rendering failed for {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A target file already exists and overwriting was not requested.
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template named '{id}'"),
                "Check the files in your --templates directory".into(),
                "Or omit --templates to use the built-in set".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{template}' references an unknown field"),
                "Run: kiln settings <NAME> to see the available fields".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FileExists { path } => vec![
                format!("{} is already there", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different component name".into(),
            ],
            Self::StoreLockError => vec![
                "The filesystem store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Partially written file left behind: {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FileExists { .. } => ErrorCategory::Conflict,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}
