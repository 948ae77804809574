//! Construction of the settlement contract's constructor arguments.
//!
//! Pure: no I/O, no chain access. The argument order and the numeric
//! constants here are fixed by the deployed contract's constructor signature
//! and must be reproduced exactly.

use alloy::{
    primitives::{
        utils::parse_ether,
        Address, B256, U256,
    },
    sol_types::SolValue,
};

use crate::{
    config::DeploymentConfig,
    constants::{
        ASSUMED_BLOCK_TIME_SECONDS, CONTRACT_NAME, CONTRACT_VERSION, ONE_DAY_SECONDS,
        ONE_WEEK_SECONDS, PENALTY_DELAY_BLOCKS,
    },
    errors::ScriptError,
    wallets::ResolvedAddresses,
};

/// The ordered constructor arguments for the settlement contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    /// The block producer address
    pub operator: Address,
    /// The finalization delay window, in blocks
    pub finalization_delay: U256,
    /// The root submission delay window, in blocks
    pub submission_delay: U256,
    /// The penalty delay window, in blocks
    pub penalty_delay: U256,
    /// The block producer bond size, in wei
    pub bond_size: U256,
    /// The contract name
    pub name: String,
    /// The contract version
    pub version: String,
    /// The chain id of the target network
    pub chain_id: U256,
    /// The genesis block hash
    pub genesis_hash: B256,
}

/// Convert a duration in seconds to a block count at the assumed block time,
/// rounding to the nearest block
fn seconds_to_blocks(seconds: u64) -> u64 {
    (seconds + ASSUMED_BLOCK_TIME_SECONDS / 2) / ASSUMED_BLOCK_TIME_SECONDS
}

impl DeploymentParameters {
    /// Build the constructor arguments from the resolved configuration,
    /// addresses, and the chain id reported by the target network.
    ///
    /// Fails only on a malformed bond size string.
    pub fn build(
        config: &DeploymentConfig,
        addresses: &ResolvedAddresses,
        chain_id: u64,
    ) -> Result<Self, ScriptError> {
        let bond_size = parse_ether(&config.bond_size)
            .map_err(|e| ScriptError::InvalidBondSize(e.to_string()))?;

        Ok(Self {
            operator: addresses.operator,
            finalization_delay: U256::from(seconds_to_blocks(ONE_WEEK_SECONDS)),
            submission_delay: U256::from(seconds_to_blocks(ONE_DAY_SECONDS)),
            penalty_delay: U256::from(PENALTY_DELAY_BLOCKS),
            bond_size,
            name: CONTRACT_NAME.to_string(),
            version: CONTRACT_VERSION.to_string(),
            chain_id: U256::from(chain_id),
            // The settlement contract starts from an empty genesis
            genesis_hash: B256::ZERO,
        })
    }

    /// ABI-encode the arguments for appending to the contract creation
    /// bytecode
    pub fn to_constructor_args(&self) -> Vec<u8> {
        (
            self.operator,
            self.finalization_delay,
            self.submission_delay,
            self.penalty_delay,
            self.bond_size,
            self.name.clone(),
            self.version.clone(),
            self.chain_id,
            self.genesis_hash,
        )
            .abi_encode_params()
    }
}

/// ABI-encode the faucet token's constructor arguments: the initial holder
/// and the total supply minted to it
pub fn erc20_constructor_args(holder: Address, total_supply: U256) -> Vec<u8> {
    (holder, total_supply).abi_encode_params()
}
