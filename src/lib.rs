//! Deploy script for the Fuel v1 settlement contract and its faucet token.
//!
//! One invocation performs one deployment run: resolve configuration from the
//! environment, derive the operator and faucet identities, deploy the
//! settlement contract and an ERC20 used to pre-fund the faucet, wire the two
//! together, and record the settlement contract address in the local
//! deployment registry.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod gas;
pub mod params;
pub mod registry;
pub mod solidity;
pub mod wallets;
