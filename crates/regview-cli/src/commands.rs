use anyhow::{Context, Result};

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use crate::logging::{self, LogTarget};
use crate::types::LogLevel;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let level = cli
        .log_level
        .or(config.log.level)
        .unwrap_or(LogLevel::Warn);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            // The terminal belongs to the UI; logs only go to a file.
            let target = config
                .log_file()
                .map(LogTarget::File)
                .unwrap_or(LogTarget::Disabled);
            logging::init(level, target)?;

            let catalog = handlers::load_catalog(&config, cli.catalog.as_deref())?;
            handlers::browse::handle(catalog)
        }

        Commands::List {
            field,
            filter,
            desc,
            format,
        } => {
            logging::init(level, LogTarget::Stderr)?;

            let catalog = handlers::load_catalog(&config, cli.catalog.as_deref())?;
            let request = handlers::list::ListRequest {
                field: field.map(Into::into),
                filter,
                descending: desc,
            };
            handlers::list::handle(&catalog, request, format)
        }
    }
}
