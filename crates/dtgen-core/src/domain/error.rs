// ============================================================================
// domain/error.rs - caller contract violations
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Domain errors are raised before any I/O happens: a request that fails
/// here never touches the filesystem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("Invalid value for --{option}: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("--{option} is required for {component} components: {hint}")]
    MissingRequiredOption {
        option: &'static str,
        component: &'static str,
        hint: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentName { name, .. } => vec![
                format!("'{}' cannot be turned into a class or file name", name),
                "Use letters, digits, hyphens or underscores".into(),
                "Examples: weather-collector, TrafficHandler, map_layers".into(),
            ],
            Self::InvalidOption { option, .. } => vec![
                format!("Check the value passed to --{}", option),
                "Use --help for usage information".into(),
            ],
            Self::MissingRequiredOption { option, hint, .. } => vec![
                format!("Pass --{} <value>", option),
                (*hint).to_string(),
            ],
        }
    }

    /// Error category for CLI display styling.
    ///
    /// Every domain error is a caller contract violation.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_option_mentions_flag() {
        let err = DomainError::MissingRequiredOption {
            option: "source",
            component: "harvester",
            hint: "Specify which collector to harvest from",
        };
        assert!(err.to_string().contains("--source"));
        assert!(err.suggestions().iter().any(|s| s.contains("--source")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn invalid_name_has_examples() {
        let err = DomainError::InvalidComponentName {
            name: "--".into(),
            reason: "no letters or digits".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("Examples")));
    }
}
