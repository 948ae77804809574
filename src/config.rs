//! Resolution of the deployment configuration from the process environment.
//!
//! The environment is read exactly once, at the boundary, into an immutable
//! [`DeploymentConfig`]; no business logic reads environment variables ad hoc.

use std::env;

use crate::{
    constants::{
        BOND_SIZE_ENV_VAR, DEFAULT_BOND_SIZE, FAUCET_ENV_VAR, INFURA_ENV_VAR, KNOWN_NETWORKS,
        NETWORK_ENV_VAR, OPERATORS_ENV_VAR, SEED_ENV_VAR,
    },
    errors::ScriptError,
};

/// The resolved deployment configuration
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    /// The name of the network to deploy to
    pub network_name: String,
    /// The Infura project key used to reach the network
    pub infura_key: String,
    /// The operator private keys; index 0 signs every transaction
    pub operator_keys: Vec<String>,
    /// An optional mnemonic seed phrase; when set, its index-0 derived wallet
    /// becomes the block producer instead of the primary wallet
    pub seed_phrase: Option<String>,
    /// An optional explicit faucet private key
    pub faucet_key: Option<String>,
    /// The bond size as a decimal ether string
    pub bond_size: String,
}

impl DeploymentConfig {
    /// Resolve the configuration from the process environment
    pub fn from_env() -> Result<Self, ScriptError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Resolve the configuration through the given environment lookup.
    ///
    /// Empty values are treated as missing. Fails before any network object
    /// is constructed if a required value is absent or the network name is
    /// not a known network.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScriptError> {
        let get = |var| lookup(var).filter(|v: &String| !v.is_empty());

        let network_name = get(NETWORK_ENV_VAR).ok_or(ScriptError::MissingConfig(NETWORK_ENV_VAR))?;
        let infura_key = get(INFURA_ENV_VAR).ok_or(ScriptError::MissingConfig(INFURA_ENV_VAR))?;
        let operators = get(OPERATORS_ENV_VAR).ok_or(ScriptError::MissingConfig(OPERATORS_ENV_VAR))?;

        if !KNOWN_NETWORKS.contains(&network_name.as_str()) {
            return Err(ScriptError::UnknownNetwork(network_name));
        }

        let operator_keys: Vec<String> = operators
            .split(',')
            .map(|key| key.trim().to_string())
            .collect();
        if operator_keys[0].is_empty() {
            return Err(ScriptError::MissingConfig(OPERATORS_ENV_VAR));
        }

        Ok(Self {
            network_name,
            infura_key,
            operator_keys,
            seed_phrase: get(SEED_ENV_VAR),
            faucet_key: get(FAUCET_ENV_VAR),
            bond_size: get(BOND_SIZE_ENV_VAR).unwrap_or_else(|| DEFAULT_BOND_SIZE.to_string()),
        })
    }

    /// The private key of the primary wallet, operator key 0
    pub fn primary_key(&self) -> &str {
        &self.operator_keys[0]
    }

    /// The Infura RPC URL for the configured network
    pub fn rpc_url(&self) -> String {
        format!(
            "https://{}.infura.io/v3/{}",
            self.network_name, self.infura_key
        )
    }
}
