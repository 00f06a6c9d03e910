// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid component name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("unknown style language '{style}'")]
    UnknownStyle { style: String },

    #[error("unsupported template-set version {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate path in render plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Render plan for '{component}' produces no files")]
    EmptyRenderPlan { component: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("no '{category}' choice named '{key}'{}", missing_field(.field))]
    MissingChoice {
        category: String,
        key: String,
        field: Option<&'static str>,
    },
}

fn missing_field(field: &Option<&'static str>) -> String {
    field.map(|f| format!(" (missing '{f}')")).unwrap_or_default()
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Please specify the component name correctly".into(),
                "For example: `peer-groups` or `PeerGroups`".into(),
                "Nested folders are not supported; pass a single name".into(),
            ],
            Self::UnknownStyle { style } => {
                let mut out = vec![format!("'{style}' is not a known style language")];
                out.push("Supported styles:".into());
                out.extend(
                    crate::domain::StyleLanguage::ALL
                        .iter()
                        .map(|s| format!("  • {:<7} ({})", s.as_str(), s.suffix())),
                );
                out
            }
            Self::UnsupportedVersion { version } => vec![
                format!("Template-set version {version} is not available"),
                format!(
                    "Use --template-version {} (the current version)",
                    crate::domain::TemplateSetVersion::CURRENT.number()
                ),
            ],
            Self::MissingChoice { category, key, .. } => vec![
                format!("The built-in catalog has no '{key}' entry under '{category}'"),
                "Try: kiln styles to see the available choices".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::UnknownStyle { .. }
            | Self::UnsupportedVersion { .. } => ErrorCategory::Validation,
            Self::MissingChoice { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
