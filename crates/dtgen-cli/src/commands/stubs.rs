//! `dt stubs:list`: show the stub templates the active store provides.

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let stubs = super::scaffold_service(&config)?.available_stubs()?;

    if output.is_json() {
        output.json(&stubs)?;
        return Ok(());
    }

    let source = match &config.stubs.dir {
        Some(dir) => dir.display().to_string(),
        None if config.stubs.search_upward => "discovered stubs/ directory".to_string(),
        None => "built-in".to_string(),
    };
    output.header(&format!("Available stubs ({source}):"))?;
    if stubs.is_empty() {
        output.warning("No .stub files found")?;
    }
    for stub in &stubs {
        output.print(&format!("  {stub}"))?;
    }
    Ok(())
}
