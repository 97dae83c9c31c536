use clap::{Parser, Subcommand};

use crate::types::{FieldArg, LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "regview")]
#[command(about = "Browse, filter and sort schema registry artifacts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/regview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Catalog JSON file; overrides `catalog` in the config
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive artifact browser (default)
    Browse,

    /// Print the artifact list for one filter/sort combination
    List {
        /// Field the filter applies to; omitted means everything
        #[arg(long)]
        field: Option<FieldArg>,

        #[arg(long, default_value = "")]
        filter: String,

        /// Sort names Z to A
        #[arg(long)]
        desc: bool,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
