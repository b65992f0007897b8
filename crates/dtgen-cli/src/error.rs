//! CLI error type and its rendering.
//!
//! Every failure that reaches `main` is a [`CliError`]. It carries:
//! - a one-line message (always printed)
//! - the cause chain and actionable suggestions (printed with `-v`)
//! - the exit code for its category

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use dtgen_core::error::{DtgenError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The directory given with `--project-dir` does not exist.
    #[error("Project directory not found: {}", path.display())]
    ProjectDirNotFound { path: PathBuf },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `dtgen-core` or an adapter.
    #[error(transparent)]
    Core(#[from] DtgenError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Build a [`CliError::ConfigError`] from a serialisation or lookup failure.
    pub fn config(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectDirNotFound { path } => vec![
                format!("Check that '{}' exists", path.display()),
                "Omit -C/--project-dir to use the current directory".into(),
            ],

            Self::ConfigError { .. } => vec![
                format!("Check your config file at {}", crate::config::AppConfig::config_path().display()),
                "Run 'dt config list' to see the effective configuration".into(),
                "Run 'dt init --force' to recreate a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectDirNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Format the error with colors. Without `verbose` this is a single line.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!("{} {}\n", "error:".red().bold(), self.to_string().red());

        if verbose {
            for cause in self.causes() {
                output.push_str(&format!("  {} {}\n", "caused by:".dimmed(), cause.dimmed()));
            }
            let suggestions = self.suggestions();
            if !suggestions.is_empty() {
                output.push_str(&format!("{}\n", "Suggestions:".yellow().bold()));
                for suggestion in suggestions {
                    output.push_str(&format!("  {suggestion}\n"));
                }
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("error: {self}\n");

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("  caused by: {cause}\n"));
            }
            let suggestions = self.suggestions();
            if !suggestions.is_empty() {
                out.push_str("Suggestions:\n");
                for s in &suggestions {
                    out.push_str(&format!("  {s}\n"));
                }
            }
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// Logged at debug level so the default run prints only the one-line
    /// message from [`Self::format_plain`].
    pub fn log(&self) {
        tracing::debug!(
            category = ?self.category(),
            exit_code = self.exit_code(),
            "Command failed: {}",
            self
        );
    }

    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        causes
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    Configuration,
    /// Internal/system error.
    Internal,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert I/O failures into [`CliError`] at call-sites
/// with a descriptive context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
