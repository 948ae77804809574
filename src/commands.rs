//! The deployment flow.
//!
//! Strictly sequential: every chain call blocks until its result or receipt
//! arrives, nothing is submitted in parallel, and a failed step aborts the
//! run with no retry. A run that fails after the settlement contract is
//! created leaves that contract on chain with no registry entry and an
//! unfunded faucet; re-running the script deploys fresh contracts rather than
//! resuming.

use std::str::FromStr;

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::{Ethereum, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::info;

use crate::{
    cli::Cli,
    config::DeploymentConfig,
    constants::{CONTRACT_VERSION, FAUCET_TOKEN_SUPPLY, GAS_LIMIT},
    errors::ScriptError,
    gas::{fetch_gas_prices, GasPriceTiers},
    params::{erc20_constructor_args, DeploymentParameters},
    registry::record_deployment,
    solidity::{ContractArtifact, ERC20, Fuel},
    wallets::resolve_addresses,
};

/// The call builder type used by the deploy flow
type DeployCallBuilder<'a, C> = CallBuilder<&'a DynProvider, C, Ethereum>;

/// Run one full deployment against the configured network
pub async fn deploy(cli: &Cli, config: &DeploymentConfig) -> Result<(), ScriptError> {
    // Artifacts are loaded up front so a bad path fails before any
    // transaction is submitted
    let fuel_artifact = ContractArtifact::from_file(&cli.fuel_artifact)?;
    let erc20_artifact = ContractArtifact::from_file(&cli.erc20_artifact)?;

    let signer = PrivateKeySigner::from_str(config.primary_key())
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let primary_wallet = signer.address();

    let rpc_url = cli.rpc_url.clone().unwrap_or_else(|| config.rpc_url());
    let provider = setup_client(signer, &rpc_url)?;

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let addresses = resolve_addresses(config, primary_wallet)?;
    info!("operator address @ {}", addresses.operator);
    info!("faucet address @ {}", addresses.faucet);

    let gas = fetch_gas_prices(&provider).await?;
    let params = DeploymentParameters::build(config, &addresses, chain_id)?;

    // Settlement contract
    let fuel_address =
        deploy_contract(&provider, &fuel_artifact, params.to_constructor_args(), &gas).await?;
    info!("settlement contract deployed @ {}", fuel_address);

    // Faucet token, minted in full to the primary wallet
    let token_args = erc20_constructor_args(primary_wallet, FAUCET_TOKEN_SUPPLY);
    let erc20_address = deploy_contract(&provider, &erc20_artifact, token_args, &gas).await?;
    info!("faucet token deployed @ {}", erc20_address);

    // Move the full supply to the faucet's funnel and record the deposit
    let fuel = Fuel::new(fuel_address, provider.clone());
    let erc20 = ERC20::new(erc20_address, provider.clone());

    let funnel = fuel
        .funnel(addresses.faucet)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    send_tx(
        "erc20 transfer",
        erc20
            .transfer(funnel, FAUCET_TOKEN_SUPPLY)
            .gas(GAS_LIMIT)
            .gas_price(gas.fast),
    )
    .await?;

    send_tx(
        "faucet deposit",
        fuel.deposit(addresses.faucet, erc20_address)
            .gas(GAS_LIMIT)
            .gas_price(gas.fast),
    )
    .await?;

    record_deployment(&cli.deployments_path, &config.network_name, fuel_address)?;

    info!(
        "Fuel Version {} deployed to {} @ address {} in file {}",
        CONTRACT_VERSION,
        config.network_name,
        fuel_address,
        cli.deployments_path.display()
    );

    Ok(())
}

/// Set up the signing provider for the target network
fn setup_client(signer: PrivateKeySigner, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok(DynProvider::new(provider))
}

/// Submit a contract creation transaction and block until it is mined,
/// returning the created contract's address
async fn deploy_contract(
    provider: &DynProvider,
    artifact: &ContractArtifact,
    constructor_args: Vec<u8>,
    gas: &GasPriceTiers,
) -> Result<Address, ScriptError> {
    let mut code = artifact.bytecode_bytes()?;
    code.extend(constructor_args);

    let tx = TransactionRequest::default()
        .with_deploy_code(code)
        .with_gas_limit(GAS_LIMIT)
        .with_gas_price(gas.fast);

    let receipt = provider
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(
            "deployment transaction reverted".to_string(),
        ));
    }

    receipt
        .contract_address
        .ok_or_else(|| ScriptError::ContractDeployment("no contract address in receipt".to_string()))
}

/// Send a contract call and block until its receipt confirms success
async fn send_tx<C: CallDecoder>(
    description: &str,
    tx: DeployCallBuilder<'_, C>,
) -> Result<TransactionReceipt, ScriptError> {
    let receipt = tx
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(format!("{description}: {e}")))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(format!("{description}: {e}")))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "{description}: transaction reverted"
        )));
    }

    Ok(receipt)
}
