//! Host project description.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Framework a host project must depend on unless configured otherwise.
pub const DEFAULT_HOST_FRAMEWORK: &str = "digitaltwin-core";

/// The parts of `package.json` the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// An explicit `null` dependency table reads as an empty one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PackageManifest {
    /// Whether `package` is listed as a runtime or development dependency.
    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}

/// Summary of a valid host project, read fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub has_typescript: bool,
    /// `src` when the project has one, else `.`.
    pub src_dir: String,
}

impl ProjectInfo {
    pub const UNKNOWN_NAME: &'static str = "unknown";
    pub const DEFAULT_VERSION: &'static str = "1.0.0";

    pub fn from_manifest(manifest: &PackageManifest, has_src_dir: bool, has_tsconfig: bool) -> Self {
        Self {
            name: manifest
                .name
                .clone()
                .unwrap_or_else(|| Self::UNKNOWN_NAME.to_string()),
            version: manifest
                .version
                .clone()
                .unwrap_or_else(|| Self::DEFAULT_VERSION.to_string()),
            has_typescript: has_tsconfig,
            src_dir: if has_src_dir { "src" } else { "." }.to_string(),
        }
    }
}
