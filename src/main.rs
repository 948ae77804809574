//! Entrypoint for the Fuel v1 deploy script

use std::process;

use clap::Parser;
use fuel_deploy::{cli::Cli, commands::deploy, config::DeploymentConfig, errors::ScriptError};
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().pretty().init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli).await {
        error!("{e}");
        process::exit(e.exit_code());
    }
}

/// Resolve the configuration and run the deployment
async fn run(cli: &Cli) -> Result<(), ScriptError> {
    let config = DeploymentConfig::from_env()?;
    deploy(cli, &config).await
}
