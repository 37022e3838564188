//! CLI argument definitions for the blood test planner.

use std::path::PathBuf;

use bloods_model::CkdStage;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bloods",
    version,
    about = "Chronic disease blood test planner",
    long_about = "Work out which routine blood tests a patient needs, and how often,\n\
                  from their chronic conditions and current medication."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Work out the blood tests required for a patient.
    Evaluate(EvaluateArgs),

    /// List the supported diseases and their follow-up questions.
    Diseases,

    /// List the blood tests in display order.
    Tests,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// TOML profile with diseases and modifiers; flags are merged on top.
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Disease to select (repeatable, case-insensitive).
    #[arg(short = 'd', long = "disease", value_name = "NAME")]
    pub diseases: Vec<String>,

    /// Patient is on a DOAC.
    #[arg(long = "doac")]
    pub doac: bool,

    /// Patient is on lithium.
    #[arg(long = "lithium")]
    pub lithium: bool,

    /// Patient is on metformin.
    #[arg(long = "metformin")]
    pub metformin: bool,

    /// CKD stage (3a, 3b, 4 or 5).
    #[arg(long = "ckd-stage", value_name = "STAGE")]
    pub ckd_stage: Option<CkdStage>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
