//! Project Validator - decides whether a directory is a host project.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestReader},
    },
    domain::{PackageManifest, ProjectInfo},
    error::DtgenResult,
};

const MANIFEST_FILE: &str = "package.json";
const TSCONFIG_FILE: &str = "tsconfig.json";
const SRC_DIR: &str = "src";

/// Validates host projects by their `package.json`.
///
/// A directory is a host project when its manifest lists the host framework
/// as a dependency or dev-dependency. Missing, unreadable or malformed
/// manifests all make the directory invalid.
pub struct ProjectValidator {
    manifests: Box<dyn ManifestReader>,
    filesystem: Box<dyn Filesystem>,
    host_framework: String,
}

impl ProjectValidator {
    pub fn new(
        manifests: Box<dyn ManifestReader>,
        filesystem: Box<dyn Filesystem>,
        host_framework: impl Into<String>,
    ) -> Self {
        Self {
            manifests,
            filesystem,
            host_framework: host_framework.into(),
        }
    }

    /// Package a host project must depend on.
    pub fn host_framework(&self) -> &str {
        &self.host_framework
    }

    pub fn is_valid_project(&self, root: &Path) -> bool {
        self.manifest(root)
            .is_some_and(|manifest| manifest.depends_on(&self.host_framework))
    }

    /// Project details, or `None` when the manifest is missing or malformed.
    pub fn project_info(&self, root: &Path) -> Option<ProjectInfo> {
        let manifest = self.manifest(root)?;
        Some(ProjectInfo::from_manifest(
            &manifest,
            self.filesystem.exists(&root.join(SRC_DIR)),
            self.filesystem.exists(&root.join(TSCONFIG_FILE)),
        ))
    }

    #[instrument(skip(self), fields(root = %root.display(), framework = %self.host_framework))]
    pub fn validate_project(&self, root: &Path) -> DtgenResult<()> {
        if self.is_valid_project(root) {
            debug!("Host project detected");
            Ok(())
        } else {
            Err(ApplicationError::NotAHostProject {
                path: root.to_path_buf(),
                framework: self.host_framework.clone(),
            }
            .into())
        }
    }

    /// Validate and read the project in one step.
    pub fn inspect(&self, root: &Path) -> DtgenResult<ProjectInfo> {
        self.validate_project(root)?;
        self.project_info(root).ok_or_else(|| {
            ApplicationError::ManifestUnreadable {
                path: root.join(MANIFEST_FILE),
                reason: "manifest could not be read after validation".into(),
            }
            .into()
        })
    }

    fn manifest(&self, root: &Path) -> Option<PackageManifest> {
        match self.manifests.read_manifest(root) {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!(error = %e, root = %root.display(), "Ignoring unreadable manifest");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::{MockFilesystem, MockManifestReader};
    use crate::domain::DEFAULT_HOST_FRAMEWORK;
    use crate::error::DtgenError;

    fn manifest_with(dep: &str) -> PackageManifest {
        PackageManifest {
            name: Some("twin".into()),
            version: Some("0.3.0".into()),
            dependencies: [(dep.to_string(), "^1.0.0".to_string())].into(),
            ..Default::default()
        }
    }

    fn reader(result: DtgenResult<Option<PackageManifest>>) -> Box<MockManifestReader> {
        let mut reader = MockManifestReader::new();
        reader
            .expect_read_manifest()
            .returning(move |_| result.clone());
        Box::new(reader)
    }

    fn filesystem(existing: &'static [&'static str]) -> Box<MockFilesystem> {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.iter().any(|e| p.ends_with(e)));
        Box::new(fs)
    }

    #[test]
    fn valid_when_framework_is_a_dependency() {
        let validator = ProjectValidator::new(
            reader(Ok(Some(manifest_with(DEFAULT_HOST_FRAMEWORK)))),
            filesystem(&[]),
            DEFAULT_HOST_FRAMEWORK,
        );
        assert!(validator.is_valid_project(Path::new("/p")));
        assert!(validator.validate_project(Path::new("/p")).is_ok());
    }

    #[test]
    fn invalid_without_framework() {
        let validator = ProjectValidator::new(
            reader(Ok(Some(manifest_with("express")))),
            filesystem(&[]),
            DEFAULT_HOST_FRAMEWORK,
        );
        let err = validator.validate_project(Path::new("/p")).unwrap_err();
        assert!(matches!(
            err,
            DtgenError::Application(ApplicationError::NotAHostProject { ref framework, .. })
                if framework == DEFAULT_HOST_FRAMEWORK
        ));
    }

    #[test]
    fn malformed_manifest_is_just_invalid() {
        let validator = ProjectValidator::new(
            reader(Err(ApplicationError::ManifestUnreadable {
                path: PathBuf::from("/p/package.json"),
                reason: "expected value at line 1".into(),
            }
            .into())),
            filesystem(&[]),
            DEFAULT_HOST_FRAMEWORK,
        );
        assert!(!validator.is_valid_project(Path::new("/p")));
        assert!(validator.project_info(Path::new("/p")).is_none());
        assert!(matches!(
            validator.validate_project(Path::new("/p")),
            Err(DtgenError::Application(ApplicationError::NotAHostProject { .. }))
        ));
    }

    #[test]
    fn missing_manifest_is_invalid() {
        let validator =
            ProjectValidator::new(reader(Ok(None)), filesystem(&[]), DEFAULT_HOST_FRAMEWORK);
        assert!(!validator.is_valid_project(Path::new("/p")));
    }

    #[test]
    fn info_detects_src_and_typescript() {
        let validator = ProjectValidator::new(
            reader(Ok(Some(manifest_with(DEFAULT_HOST_FRAMEWORK)))),
            filesystem(&["src", "tsconfig.json"]),
            DEFAULT_HOST_FRAMEWORK,
        );
        let info = validator.inspect(Path::new("/p")).unwrap();
        assert_eq!(info.name, "twin");
        assert_eq!(info.version, "0.3.0");
        assert_eq!(info.src_dir, "src");
        assert!(info.has_typescript);
    }

    #[test]
    fn custom_host_framework() {
        let validator = ProjectValidator::new(
            reader(Ok(Some(manifest_with("my-twin-fork")))),
            filesystem(&[]),
            "my-twin-fork",
        );
        assert_eq!(validator.host_framework(), "my-twin-fork");
        assert!(validator.is_valid_project(Path::new("/p")));
    }
}
