//! Application layer errors.
//!
//! These errors represent failures while talking to the outside world
//! (project manifest, stub store, renderer, filesystem). Caller contract
//! violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target directory has no manifest depending on the host framework.
    #[error("{path} is not a {framework} project")]
    NotAHostProject { path: PathBuf, framework: String },

    /// The manifest looked valid but its details could not be read.
    #[error("Could not read project manifest at {path}: {reason}")]
    ManifestUnreadable { path: PathBuf, reason: String },

    /// No stub directory at the configured or discovered location.
    #[error("Stub directory not found: {path}")]
    TemplateDirectoryNotFound { path: PathBuf },

    /// The active stub store has no stub with this name.
    #[error("Stub template '{name}' not found")]
    TemplateNotFound { name: String },

    /// Stub compilation or rendering failed.
    #[error("Failed to render stub '{stub}': {reason}")]
    RenderingFailed { stub: String, reason: String },

    /// Destination exists and overwriting was not requested.
    #[error("File already exists: {path}")]
    FileAlreadyExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAHostProject { path, framework } => vec![
                format!("No package.json depending on {} in {}", framework, path.display()),
                "Run dt from the root of your project, or pass -C <dir>".into(),
                format!("Install the framework: npm install {}", framework),
            ],
            Self::ManifestUnreadable { path, .. } => vec![
                format!("Check that {} is valid JSON", path.display()),
            ],
            Self::TemplateDirectoryNotFound { path } => vec![
                format!("Create {} or point stubs.dir at an existing directory", path.display()),
                "Unset stubs.dir to use the built-in stubs".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("Add {}.stub to the stub directory", name),
                "Run 'dt stubs:list' to see available stubs".into(),
            ],
            Self::RenderingFailed { stub, .. } => vec![
                format!("Check the template syntax in {}.stub", stub),
            ],
            Self::FileAlreadyExists { .. } => vec![
                "Use --force to overwrite the existing file".into(),
                "Or choose a different component name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAHostProject { .. } | Self::FileAlreadyExists { .. } => {
                ErrorCategory::Validation
            }
            Self::TemplateDirectoryNotFound { .. } | Self::TemplateNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ManifestUnreadable { .. }
            | Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_project_names_framework() {
        let err = ApplicationError::NotAHostProject {
            path: PathBuf::from("/tmp/x"),
            framework: "digitaltwin-core".into(),
        };
        assert_eq!(err.to_string(), "/tmp/x is not a digitaltwin-core project");
        assert!(err.suggestions().iter().any(|s| s.contains("-C")));
    }

    #[test]
    fn existing_file_suggests_force() {
        let err = ApplicationError::FileAlreadyExists {
            path: PathBuf::from("a.ts"),
        };
        assert!(err.suggestions()[0].contains("--force"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
