//! Flags accepted before or after any subcommand.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Flags shared by every `dt` subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug (one event per workflow stage), `-vvv` trace.
    /// Any `-v` also expands error reports.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output and detailed errors (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Also switched on by `NO_COLOR`; empty, `0`, `false`, `no` and `off`
    /// leave colours enabled.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Plain text without ANSI colours"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE only"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 'C',
        long = "project-dir",
        global = true,
        value_name = "DIR",
        help = "Run as if started in DIR (default: current directory)"
    )]
    pub project_dir: Option<PathBuf>,
}

/// Result rendering. `auto` picks `human` on a terminal, `plain` otherwise.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Auto,
    Human,
    Plain,
    /// `GenerationResult`, `ProjectInfo` etc. as pretty JSON.
    Json,
}
