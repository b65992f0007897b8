//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `DTGEN_<SECTION>__<KEY>` (e.g. `DTGEN_STUBS__DIR`)
//! 3. The file passed with `--config`, or else `.dtgen.toml` in the project
//!    directory over the user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use dtgen_core::domain::DEFAULT_HOST_FRAMEWORK;

use crate::cli::OutputFormat;

/// File name of a project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".dtgen.toml";

const ENV_PREFIX: &str = "DTGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Host project detection.
    pub project: ProjectConfig,
    /// Where stub templates come from.
    pub stubs: StubsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Dependency that marks a directory as a host project.
    pub host_framework: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            host_framework: DEFAULT_HOST_FRAMEWORK.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Directory of `<kind>.stub` files overriding the built-in set.
    pub dir: Option<PathBuf>,
    /// Look for a `stubs/` directory above the executable when `dir` is unset.
    pub search_upward: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration by layering defaults, files and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when it is
    /// given it must exist and replaces the implicit files. `project_dir` is
    /// where `.dtgen.toml` is looked up.
    pub fn load(config_file: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder
                .add_source(
                    File::from(Self::config_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(project_dir.join(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dtgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "digitaltwin", "dtgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file that configuration was read from, in the order `load` prefers.
    pub fn active_path(config_file: Option<&Path>, project_dir: &Path) -> PathBuf {
        if let Some(path) = config_file {
            return path.to_path_buf();
        }
        let local = project_dir.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_host_framework_is_digitaltwin_core() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.project.host_framework, DEFAULT_HOST_FRAMEWORK);
        assert!(cfg.stubs.dir.is_none());
        assert!(!cfg.stubs.search_upward);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dt.conf");
        fs::write(
            &path,
            "[stubs]\ndir = \"/opt/stubs\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path), temp.path()).unwrap();
        assert_eq!(cfg.stubs.dir, Some(PathBuf::from("/opt/stubs")));
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.project.host_framework, DEFAULT_HOST_FRAMEWORK);
    }

    #[test]
    fn local_file_is_picked_up() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(LOCAL_CONFIG_FILE),
            "[project]\nhost_framework = \"@acme/twin\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(None, temp.path()).unwrap();
        assert_eq!(cfg.project.host_framework, "@acme/twin");
        assert_eq!(
            AppConfig::active_path(None, temp.path()),
            temp.path().join(LOCAL_CONFIG_FILE)
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing), temp.path()).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[stubs\n").unwrap();
        assert!(AppConfig::load(Some(&path), temp.path()).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
