//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use clap::Parser;

/// Deploy the Fuel v1 settlement contract and its faucet token to the
/// network named in the environment, then record the contract address in the
/// deployment registry
#[derive(Debug, Parser)]
pub struct Cli {
    /// Path to the deployment registry file
    #[arg(long, default_value = "deployments/Fuel.json")]
    pub deployments_path: PathBuf,

    /// Path to the compiled settlement contract artifact
    #[arg(long, default_value = "artifacts/Fuel.json")]
    pub fuel_artifact: PathBuf,

    /// Path to the compiled faucet token artifact
    #[arg(long, default_value = "artifacts/ERC20.json")]
    pub erc20_artifact: PathBuf,

    /// Override the RPC endpoint derived from the network name
    #[arg(long)]
    pub rpc_url: Option<String>,
}
