//! Command handlers, one module per subcommand group.
//!
//! Handlers receive parsed arguments plus the loaded [`AppConfig`] and build
//! the core services they need from the adapters crate.

use std::path::PathBuf;

use tracing::debug;

use dtgen_adapters::{
    BuiltinStubs, JinjaRenderer, LocalFilesystem, PackageJsonReader, StubDirectory,
};
use dtgen_core::prelude::{ProjectValidator, ScaffoldService, StubGenerator, StubStore};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod make;
pub mod project;
pub mod stubs;

/// Directory the command operates on: `--project-dir`, else the cwd.
pub fn project_root(global: &GlobalArgs) -> CliResult<PathBuf> {
    let root = match &global.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .with_cli_context(|| "Failed to determine the current directory")?,
    };
    if !root.is_dir() {
        return Err(CliError::ProjectDirNotFound { path: root });
    }
    Ok(root)
}

/// Wire the scaffold service with production adapters.
pub fn scaffold_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let stubs = stub_store(config)?;
    Ok(ScaffoldService::new(
        ProjectValidator::new(
            Box::new(PackageJsonReader),
            Box::new(LocalFilesystem),
            config.project.host_framework.clone(),
        ),
        StubGenerator::new(stubs, Box::new(JinjaRenderer), Box::new(LocalFilesystem)),
    ))
}

/// Pick the stub store: configured directory, discovered directory, or the
/// stubs compiled into the binary.
fn stub_store(config: &AppConfig) -> CliResult<Box<dyn StubStore>> {
    if let Some(dir) = &config.stubs.dir {
        debug!(dir = %dir.display(), "Using configured stub directory");
        return Ok(Box::new(StubDirectory::open(dir)?));
    }

    if config.stubs.search_upward {
        let exe = std::env::current_exe()
            .with_cli_context(|| "Failed to locate the dt executable")?;
        let start = exe.parent().map(PathBuf::from).unwrap_or_default();
        return Ok(Box::new(StubDirectory::discover(&start)?));
    }

    Ok(Box::new(BuiltinStubs::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;

    fn global(project_dir: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            project_dir,
        }
    }

    #[test]
    fn explicit_project_dir_is_used() {
        let temp = TempDir::new().unwrap();
        let root = project_root(&global(Some(temp.path().to_path_buf()))).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn missing_project_dir_is_reported() {
        let temp = TempDir::new().unwrap();
        let err = project_root(&global(Some(temp.path().join("absent")))).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn builtin_stubs_are_the_default() {
        let stubs = stub_store(&AppConfig::default()).unwrap();
        assert!(stubs.list().unwrap().contains(&"collector".to_string()));
    }

    #[test]
    fn configured_stub_dir_must_exist() {
        let temp = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.stubs.dir = Some(temp.path().join("missing"));
        let err = stub_store(&config).err().unwrap();
        assert_eq!(err.exit_code(), 3);
    }
}
