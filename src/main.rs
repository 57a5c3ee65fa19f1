//! Monkeyhub CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use monkeyhub::cli::{commands, Cli, Commands};
use monkeyhub::infrastructure::logging::{LogConfig, LoggerImpl};
use monkeyhub::{AppContext, Config, ConfigLoader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        monkeyhub::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        json,
        config,
        command,
    } = cli;

    match command {
        // init must work even when the existing config is broken
        Commands::Init(args) => {
            let _logger = LoggerImpl::init(&LogConfig::default())?;
            commands::init::execute(args, json).await
        }
        Commands::Serve(args) => {
            let (context, _logger) = bootstrap(config.as_deref())?;
            commands::serve::execute(args, &context).await
        }
        Commands::Monkey(args) => {
            let (context, _logger) = bootstrap(config.as_deref())?;
            commands::monkey::execute(args, &context, json).await
        }
        Commands::Status => {
            let (context, _logger) = bootstrap(config.as_deref())?;
            commands::status::execute(&context, json).await
        }
    }
}

/// Load configuration, start logging and wire the application context.
fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, LoggerImpl)> {
    let config = load_config(config_path)?;
    let logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
    let context = AppContext::from_config(config)?;
    Ok((context, logger))
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}
