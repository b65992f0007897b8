//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "dt",
    bin_name = "dt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate digitaltwin-core components from stub templates",
    long_about = "dt generates ready-to-edit TypeScript components (collectors, \
                  handlers, harvesters and asset managers) inside a \
                  digitaltwin-core project, with consistent naming.",
    after_help = "EXAMPLES:\n\
        \x20 dt make:collector weather-station --schedule '0 */15 * * * *'\n\
        \x20 dt make:handler traffic --method post\n\
        \x20 dt make:harvester traffic-stats --source traffic-collector\n\
        \x20 dt completions bash > /usr/share/bash-completion/completions/dt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a collector (scheduled data source).
    #[command(
        name = "make:collector",
        after_help = "EXAMPLES:\n\
            \x20 dt make:collector weather-station\n\
            \x20 dt make:collector buoy -s '0 0 * * * *' -t ocean,sensors --path ocean"
    )]
    MakeCollector(MakeCollectorArgs),

    /// Generate an HTTP handler.
    #[command(
        name = "make:handler",
        after_help = "EXAMPLES:\n\
            \x20 dt make:handler traffic\n\
            \x20 dt make:handler upload-report -m post --endpoint reports/upload"
    )]
    MakeHandler(MakeHandlerArgs),

    /// Generate a harvester (derives data from a collector).
    #[command(
        name = "make:harvester",
        after_help = "EXAMPLES:\n\
            \x20 dt make:harvester traffic-stats --source traffic-collector\n\
            \x20 dt make:harvester daily-avg --source weather --source-range 24h --trigger-mode scheduled"
    )]
    MakeHarvester(MakeHarvesterArgs),

    /// Generate an assets manager.
    #[command(name = "make:assets-manager")]
    MakeAssetsManager(MakeAssetsManagerArgs),

    /// Generate a 3D tileset manager.
    #[command(name = "make:tileset-manager")]
    MakeTilesetManager(MakeArgs),

    /// Generate a map layer manager.
    #[command(name = "make:map-manager")]
    MakeMapManager(MakeArgs),

    /// List available stub templates.
    #[command(name = "stubs:list")]
    StubsList,

    /// Show information about the current project.
    #[command(name = "project:info")]
    ProjectInfo,

    /// Initialise a dt configuration file.
    #[command(
        after_help = "EXAMPLES:\n\
            \x20 dt init           # user configuration directory\n\
            \x20 dt init --local   # .dtgen.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        after_help = "EXAMPLES:\n\
            \x20 dt completions bash > ~/.local/share/bash-completion/completions/dt\n\
            \x20 dt completions zsh  > ~/.zfunc/_dt\n\
            \x20 dt completions fish > ~/.config/fish/completions/dt.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dt config get stubs.dir\n\
            \x20 dt config list\n\
            \x20 dt config path"
    )]
    Config(ConfigCommands),
}

// ── make:* ────────────────────────────────────────────────────────────────────

/// Arguments shared by every `make:*` command.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Component name, e.g. `weather-station` or `WeatherStation`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Description embedded in the component.
    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Comma-separated tags.
    #[arg(short = 't', long = "tags", value_name = "TAGS", value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Endpoint the component is served under (defaults to the kebab-case name).
    #[arg(long = "endpoint", value_name = "ENDPOINT")]
    pub endpoint: Option<String>,

    /// Sub-directory of `components/` to place the file in.
    #[arg(long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Show what would be generated without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct MakeCollectorArgs {
    #[command(flatten)]
    pub common: MakeArgs,

    /// Cron schedule with seconds (default: every five minutes).
    #[arg(short = 's', long = "schedule", value_name = "CRON")]
    pub schedule: Option<String>,
}

#[derive(Debug, Args)]
pub struct MakeHandlerArgs {
    #[command(flatten)]
    pub common: MakeArgs,

    /// HTTP method the handler answers.
    #[arg(short = 'm', long = "method", value_enum, default_value = "get")]
    pub method: MethodArg,
}

#[derive(Debug, Args)]
pub struct MakeHarvesterArgs {
    #[command(flatten)]
    pub common: MakeArgs,

    /// Collector to harvest from (required).
    #[arg(long = "source", value_name = "COLLECTOR")]
    pub source: Option<String>,

    /// Comma-separated components this harvester also reads.
    #[arg(long = "dependencies", value_name = "DEPS", value_delimiter = ',')]
    pub dependencies: Vec<String>,

    /// Records or time window to read, e.g. `100`, `1h`, `30m`.
    #[arg(long = "source-range", value_name = "RANGE")]
    pub source_range: Option<String>,

    /// When the harvester runs.
    #[arg(long = "trigger-mode", value_enum, default_value = "on-source")]
    pub trigger_mode: TriggerModeArg,
}

#[derive(Debug, Args)]
pub struct MakeAssetsManagerArgs {
    #[command(flatten)]
    pub common: MakeArgs,

    /// MIME type of the managed assets, e.g. `model/gltf-binary`.
    #[arg(long = "content-type", value_name = "MIME")]
    pub content_type: Option<String>,
}

/// HTTP methods accepted by `make:handler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MethodArg {
    Get,
    Post,
    Put,
    Delete,
}

/// Trigger modes accepted by `make:harvester`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TriggerModeArg {
    OnSource,
    Scheduled,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dt init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.dtgen.toml` in the current directory instead.
    #[arg(long = "local", help = "Create local configuration in current directory")]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dt completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dt config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.host_framework`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
