use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::filesystem::{FixtureError, FixtureFile, Tree, sample_tree};
use crate::navigator::Navigator;
use crate::shell::{Shell, ShellError};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let tree = Self::load_tree(&app_config).await?;
        let color = app_config.color.apply();

        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        Shell::new(Navigator::new(tree), stdin, stdout, color)
            .run()
            .context(ShellSnafu)?;

        Ok(())
    }

    async fn load_tree(app_config: &RuntimeConfig) -> Result<Tree, ApplicationError> {
        match &app_config.fixture {
            Some(path) => FixtureFile::from_path(path).await.context(FixtureSnafu),
            None => {
                info!("Using the built-in sample tree");
                Ok(sample_tree())
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the fixture"))]
    FixtureError { source: FixtureError },
    #[snafu(display("Critical failure encountered during the shell session"))]
    ShellError { source: ShellError },
}
