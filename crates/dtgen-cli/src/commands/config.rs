//! `dt config`: inspect the effective configuration.

use std::path::Path;

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&display_value(&value))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised = toml::to_string_pretty(&config)
                    .map_err(|e| CliError::config("Failed to serialise config", e))?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            let project_dir = global.project_dir.as_deref().unwrap_or(Path::new("."));
            let path = AppConfig::active_path(global.config.as_deref(), project_dir);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `stubs.dir` in the effective configuration.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config)
        .map_err(|e| CliError::config("Failed to serialise config", e))?;

    key.split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "(not set)".to_string(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
