//! `package.json` reader.

use std::{fs, io, path::Path};

use dtgen_core::{
    application::{ApplicationError, ports::ManifestReader},
    domain::PackageManifest,
    error::DtgenResult,
};
use tracing::debug;

const MANIFEST_FILE: &str = "package.json";

/// Reads `package.json` from a project root with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonReader;

impl PackageJsonReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for PackageJsonReader {
    fn read_manifest(&self, root: &Path) -> DtgenResult<Option<PackageManifest>> {
        let path = root.join(MANIFEST_FILE);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No manifest");
                return Ok(None);
            }
            Err(e) => {
                return Err(ApplicationError::ManifestUnreadable {
                    path,
                    reason: e.to_string(),
                }
                .into());
            }
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            ApplicationError::ManifestUnreadable {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtgen_core::error::DtgenError;
    use tempfile::TempDir;

    #[test]
    fn missing_manifest_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(PackageJsonReader.read_manifest(temp.path()).unwrap(), None);
    }

    #[test]
    fn parses_dependencies() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{
                "name": "city-twin",
                "version": "0.2.0",
                "dependencies": { "digitaltwin-core": "^0.5.0" },
                "devDependencies": { "typescript": "^5.4.0" }
            }"#,
        )
        .unwrap();

        let manifest = PackageJsonReader.read_manifest(temp.path()).unwrap().unwrap();
        assert_eq!(manifest.name.as_deref(), Some("city-twin"));
        assert!(manifest.depends_on("digitaltwin-core"));
        assert!(manifest.depends_on("typescript"));
    }

    #[test]
    fn null_dependencies_still_read() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name":"reef-twin","dependencies":null,"devDependencies":{"digitaltwin-core":"^0.6.0"}}"#,
        )
        .unwrap();

        let manifest = PackageJsonReader.read_manifest(temp.path()).unwrap().unwrap();
        assert!(manifest.depends_on("digitaltwin-core"));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();

        assert!(matches!(
            PackageJsonReader.read_manifest(temp.path()),
            Err(DtgenError::Application(ApplicationError::ManifestUnreadable { .. }))
        ));
    }
}
