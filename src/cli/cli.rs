use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Explore an in-memory directory tree from an interactive prompt.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML file describing the initial tree
    #[clap(long, short)]
    pub fixture: Option<PathBuf>,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
