mod app;
mod cli;
mod commands;
mod error;
mod logging;
mod pager;
mod progress;
mod render;
mod surfaces;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use error::{CliError, Result};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(run(cli)),
        Err(err) => Err(CliError::from(err).context("Failed to start async runtime")),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { force } = cli.command {
        return commands::init::execute(cli.config, force);
    }

    let app = App::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Gateways { action } => commands::gateways::execute(&app, action).await,
        Commands::Stages { action } => commands::stages::execute(&app, action).await,
        Commands::Releases { action } => commands::releases::execute(&app, action).await,
        Commands::Plugins { action } => commands::plugins::execute(&app, action).await,
        Commands::Permissions { action } => commands::permissions::execute(&app, action).await,
        Commands::AccessLogs {
            gateway_id,
            stage,
            query,
            since_minutes,
            paging,
        } => {
            commands::access_logs::execute(&app, gateway_id, stage, query, since_minutes, paging)
                .await
        }
    }
}
