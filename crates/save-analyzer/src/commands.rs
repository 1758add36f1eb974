use super::args::Cli;
use super::handlers;
use crate::config::{self, Config, Settings};
use anyhow::{Result, bail};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let file_config = match config::resolve_config_path(cli.config.as_deref()) {
        Some(path) => {
            if cli.config.is_some() && !path.exists() {
                bail!("config file does not exist: {}", path.display());
            }
            debug!("Using config file {}", path.display());
            Config::load_from(&path)?
        }
        None => Config::default(),
    };

    let settings = Settings::resolve(&cli, file_config)?;
    handlers::analyze::handle(&settings, cli.format)
}
