//! `dt make:<kind>`: generate one component.

use tracing::{info, instrument};

use dtgen_core::prelude::{
    CommonOptions, ComponentOptions, GenerationRequest, HttpMethod, TriggerMode,
};

use crate::{
    cli::{
        GlobalArgs, MakeArgs, MakeAssetsManagerArgs, MakeCollectorArgs, MakeHandlerArgs,
        MakeHarvesterArgs, MethodArg, TriggerModeArg,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// A `make:*` invocation, already narrowed to its kind.
#[derive(Debug)]
pub enum MakeCommand {
    Collector(MakeCollectorArgs),
    Handler(MakeHandlerArgs),
    Harvester(MakeHarvesterArgs),
    AssetsManager(MakeAssetsManagerArgs),
    TilesetManager(MakeArgs),
    MapManager(MakeArgs),
}

/// Generate the component and report it.
#[instrument(skip_all, fields(kind = %request.kind(), name = %request.name))]
fn generate(
    request: GenerationRequest,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = super::project_root(global)?;
    let service = super::scaffold_service(config)?;

    let result = service.generate(&root, &request)?;
    info!(path = %result.path.display(), written = result.written, "Generation finished");

    output.generation(&result)?;
    Ok(())
}

pub fn execute(
    cmd: MakeCommand,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    generate(cmd.into_request(), &global, &config, &output)
}

impl MakeCommand {
    /// Translate parsed flags into the core request.
    pub fn into_request(self) -> GenerationRequest {
        match self {
            Self::Collector(args) => {
                let (base, common) = args.common.split();
                base.build(ComponentOptions::Collector {
                    common,
                    schedule: args.schedule,
                })
            }
            Self::Handler(args) => {
                let (base, common) = args.common.split();
                base.build(ComponentOptions::Handler {
                    common,
                    method: args.method.into(),
                })
            }
            Self::Harvester(args) => {
                let (base, common) = args.common.split();
                base.build(ComponentOptions::Harvester {
                    common,
                    source: args.source,
                    dependencies: args.dependencies,
                    source_range: args.source_range,
                    trigger_mode: args.trigger_mode.into(),
                })
            }
            Self::AssetsManager(args) => {
                let (base, common) = args.common.split();
                base.build(ComponentOptions::AssetsManager {
                    common,
                    content_type: args.content_type,
                })
            }
            Self::TilesetManager(args) => {
                let (base, common) = args.split();
                base.build(ComponentOptions::TilesetManager { common })
            }
            Self::MapManager(args) => {
                let (base, common) = args.split();
                base.build(ComponentOptions::MapManager { common })
            }
        }
    }
}

/// The parts of [`MakeArgs`] that shape the request rather than the options.
struct RequestBase {
    name: String,
    path: Option<std::path::PathBuf>,
    dry_run: bool,
    force: bool,
}

impl RequestBase {
    fn build(self, options: ComponentOptions) -> GenerationRequest {
        let request = GenerationRequest::new(self.name, options)
            .dry_run(self.dry_run)
            .force(self.force);
        match self.path {
            Some(path) => request.with_sub_path(path),
            None => request,
        }
    }
}

impl MakeArgs {
    fn split(self) -> (RequestBase, CommonOptions) {
        (
            RequestBase {
                name: self.name,
                path: self.path,
                dry_run: self.dry_run,
                force: self.force,
            },
            CommonOptions {
                description: self.description,
                tags: self.tags,
                endpoint: self.endpoint,
            },
        )
    }
}

impl From<MethodArg> for HttpMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Get => Self::Get,
            MethodArg::Post => Self::Post,
            MethodArg::Put => Self::Put,
            MethodArg::Delete => Self::Delete,
        }
    }
}

impl From<TriggerModeArg> for TriggerMode {
    fn from(mode: TriggerModeArg) -> Self {
        match mode {
            TriggerModeArg::OnSource => Self::OnSource,
            TriggerModeArg::Scheduled => Self::Scheduled,
        }
    }
}
