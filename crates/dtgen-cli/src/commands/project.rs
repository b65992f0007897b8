//! `dt project:info`: describe the host project in the working directory.

use crate::{
    cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = super::project_root(&global)?;
    let service = super::scaffold_service(&config)?;
    let info = service.project_info(&root)?;

    if output.is_json() {
        output.json(&info)?;
        return Ok(());
    }

    output.header(&format!("{} v{}", info.name, info.version))?;
    output.print(&format!("  Root:        {}", root.display()))?;
    output.print(&format!("  Framework:   {}", service.host_framework()))?;
    output.print(&format!("  Sources:     {}", info.src_dir))?;
    output.print(&format!(
        "  TypeScript:  {}",
        if info.has_typescript { "yes" } else { "no (tsconfig.json missing)" }
    ))?;
    Ok(())
}
