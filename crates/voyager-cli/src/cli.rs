use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use voyager_model::{Account, EnvType, Label, Region, ServiceName};
use voyager_observe::{LoggerFormat, LoggerLevel};

/// Inspect and render voyager deployment locations.
#[derive(Debug, Parser)]
#[command(name = "voyager-loc", version)]
pub struct Cli {
    /// Log output format (text|json).
    #[arg(long, global = true, env = "VOYAGER_LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,

    /// Log filter directives; logs are written to stderr.
    #[arg(long, global = true, env = "VOYAGER_LOG", default_value = "warn")]
    pub log_level: LoggerLevel,

    /// Disable colored log output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical name of a location.
    Describe(DescribeArgs),

    /// Read JSON locations from a file (or stdin) and print their names.
    Parse {
        /// Input file; stdin when omitted or `-`.
        file: Option<PathBuf>,
    },

    /// Print the well-known metadata labels for a service.
    Labels {
        #[arg(long)]
        service: ServiceName,

        #[arg(long, default_value = "")]
        label: Label,
    },

    /// Validate resource names.
    CheckName {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the JSON schema of a resource name.
    Schema,
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Environment tier (dev|staging|prod).
    #[arg(long = "env")]
    pub env_type: EnvType,

    #[arg(long)]
    pub account: Account,

    #[arg(long)]
    pub region: Region,

    /// Sub-environment label.
    #[arg(long, default_value = "")]
    pub label: Label,

    /// Describe the cluster only, ignoring the label.
    #[arg(long)]
    pub cluster: bool,

    /// Emit JSON instead of the display form.
    #[arg(long)]
    pub json: bool,
}
