//! Unified error handling for dtgen core.
//!
//! Domain and application errors are wrapped in a single [`DtgenError`] so the
//! front-end can render any failure with the same suggestions and category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for dtgen core operations.
#[derive(Debug, Error, Clone)]
pub enum DtgenError {
    /// Caller contract violations (bad name, missing option).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures while validating, rendering or writing.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DtgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run 'dt config list' to inspect the effective configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in dtgen".into(),
                "Re-run with -vvv and include the output when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller asked for something invalid.
    Validation,
    /// A project, stub or directory does not exist.
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type DtgenResult<T> = Result<T, DtgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_validation() {
        let err: DtgenError = DomainError::InvalidOption {
            option: "path",
            reason: "absolute".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("Invalid value for --path"));
    }

    #[test]
    fn missing_stub_is_not_found() {
        let err: DtgenError = ApplicationError::TemplateNotFound {
            name: "gizmo".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn internal_error_asks_for_report() {
        let err = DtgenError::Internal {
            message: "poisoned".into(),
        };
        assert!(err.to_string().contains("bug"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
