//! Gas price tiers for the deployment transactions.
//!
//! Prices come in three tiers: safe-low, standard, and fast. Tier derivation
//! from the node's suggested price is pure; only the fetch touches the
//! network. Every transaction the script sends uses the fast tier.

use alloy::providers::{DynProvider, Provider};

use crate::errors::ScriptError;

/// The fast tier premium over the suggested gas price, in percent
const FAST_TIER_PERCENT: u128 = 120;

/// The safe-low tier discount under the suggested gas price, in percent
const SAFE_LOW_TIER_PERCENT: u128 = 90;

/// A tiered gas price structure, prices in wei
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasPriceTiers {
    /// The discounted, slow-confirmation price
    pub safe_low: u128,
    /// The node's suggested price
    pub standard: u128,
    /// The premium, fast-confirmation price
    pub fast: u128,
}

impl GasPriceTiers {
    /// Derive the tiers from a suggested base price
    pub fn from_base(base: u128) -> Self {
        Self {
            safe_low: base * SAFE_LOW_TIER_PERCENT / 100,
            standard: base,
            fast: base * FAST_TIER_PERCENT / 100,
        }
    }
}

/// Fetch the current gas price tiers from the target network
pub async fn fetch_gas_prices(provider: &DynProvider) -> Result<GasPriceTiers, ScriptError> {
    let base = provider
        .get_gas_price()
        .await
        .map_err(|e| ScriptError::GasPriceFetching(e.to_string()))?;

    Ok(GasPriceTiers::from_base(base))
}
