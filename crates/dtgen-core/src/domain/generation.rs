//! Generation requests and their results.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    component::{ComponentKind, ComponentOptions},
    error::DomainError,
};

/// Directory, relative to the project's source directory, that receives
/// generated components.
pub const COMPONENTS_DIR: &str = "components";

/// One "make a component" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Raw component name, captured once and never mutated.
    pub name: String,
    pub options: ComponentOptions,
    /// Optional sub-directory of `components/`.
    pub sub_path: Option<PathBuf>,
    /// Compute and report, but do not write.
    pub dry_run: bool,
    /// Replace an existing file.
    pub force: bool,
}

impl GenerationRequest {
    pub fn new(name: impl Into<String>, options: ComponentOptions) -> Self {
        Self {
            name: name.into(),
            options,
            sub_path: None,
            dry_run: false,
            force: false,
        }
    }

    pub fn with_sub_path(mut self, sub_path: impl Into<PathBuf>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.options.kind()
    }

    /// Check the name, the sub-path and the kind's options, in that order.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_component_name(&self.name)?;
        if let Some(sub_path) = &self.sub_path {
            validate_sub_path(sub_path)?;
        }
        self.options.validate()
    }

    /// Directory (relative to the project's source directory) the component
    /// lands in.
    pub fn components_dir(&self) -> PathBuf {
        let base = PathBuf::from(COMPONENTS_DIR);
        match &self.sub_path {
            Some(sub) => base.join(sub),
            None => base,
        }
    }
}

fn validate_component_name(name: &str) -> Result<(), DomainError> {
    if !name.chars().any(char::is_alphanumeric) {
        return Err(DomainError::InvalidComponentName {
            name: name.to_string(),
            reason: "it must contain at least one letter or digit".into(),
        });
    }
    if name.contains(['/', '\\']) {
        return Err(DomainError::InvalidComponentName {
            name: name.to_string(),
            reason: "path separators are not allowed (use --path for sub-directories)".into(),
        });
    }
    Ok(())
}

fn validate_sub_path(sub_path: &Path) -> Result<(), DomainError> {
    for component in sub_path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(DomainError::InvalidOption {
                    option: "path",
                    reason: format!(
                        "'{}' escapes the {} directory",
                        sub_path.display(),
                        COMPONENTS_DIR
                    ),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(DomainError::InvalidOption {
                    option: "path",
                    reason: format!("'{}' must be a relative path", sub_path.display()),
                });
            }
        }
    }
    Ok(())
}

/// A caller-relevant fact about the generated component, e.g.
/// `Endpoint: GET /api/weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedFact {
    pub label: String,
    pub value: String,
}

impl DerivedFact {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Outcome of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub kind: ComponentKind,
    /// Absolute destination path.
    pub path: PathBuf,
    /// Destination relative to the project root.
    pub relative_path: PathBuf,
    /// `false` for dry runs.
    pub written: bool,
    pub bytes: usize,
    pub content: String,
    pub facts: Vec<DerivedFact>,
}

/// Stages of the scaffold workflow, used in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Validate,
    DeriveNaming,
    Render,
    DryRunReport,
    Write,
    Summarize,
}

impl GenerationStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::DeriveNaming => "derive-naming",
            Self::Render => "render",
            Self::DryRunReport => "dry-run-report",
            Self::Write => "write",
            Self::Summarize => "summarize",
        }
    }
}

impl std::fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(name: &str) -> GenerationRequest {
        GenerationRequest::new(name, ComponentOptions::defaults(ComponentKind::Collector))
    }

    #[test]
    fn rejects_names_without_word_characters() {
        for name in ["", "--", "  ", "_-_"] {
            assert!(
                matches!(
                    collector(name).validate(),
                    Err(DomainError::InvalidComponentName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_names_with_separators() {
        assert!(collector("weather/station").validate().is_err());
        assert!(collector("weather\\station").validate().is_err());
    }

    #[test]
    fn sub_path_must_stay_inside_components() {
        let escaping = collector("weather").with_sub_path("../outside");
        assert!(matches!(
            escaping.validate(),
            Err(DomainError::InvalidOption { option: "path", .. })
        ));

        let absolute = collector("weather").with_sub_path("/etc");
        assert!(absolute.validate().is_err());

        let nested = collector("weather").with_sub_path("sensors/outdoor");
        assert!(nested.validate().is_ok());
        assert_eq!(
            nested.components_dir(),
            PathBuf::from("components/sensors/outdoor")
        );
    }

    #[test]
    fn name_is_checked_before_options() {
        let request = GenerationRequest::new("--", ComponentOptions::defaults(ComponentKind::Harvester));
        assert!(matches!(
            request.validate(),
            Err(DomainError::InvalidComponentName { .. })
        ));
    }

    #[test]
    fn builder_flags() {
        let request = collector("weather").dry_run(true).force(true);
        assert!(request.dry_run);
        assert!(request.force);
        assert_eq!(request.kind(), ComponentKind::Collector);
        assert_eq!(request.components_dir(), PathBuf::from(COMPONENTS_DIR));
    }
}
