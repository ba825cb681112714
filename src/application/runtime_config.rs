use std::path::PathBuf;

use crate::application::data::ColorChoice;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// YAML tree to start from instead of the built-in sample.
    pub fixture: Option<PathBuf>,
    pub color: ColorChoice,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            fixture: cli.fixture,
            color: cli.color,
        }
    }
}
