//! Derivation of operator wallets and resolution of the operator and faucet
//! addresses.
//!
//! Derivation is pure: the same mnemonic always yields the same 8 addresses,
//! in index order along the fixed path template. This must not change, prior
//! deployments depend on it.

use std::str::FromStr;

use alloy::{
    primitives::Address,
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
};

use crate::{
    config::DeploymentConfig,
    constants::{NUM_OPERATOR_WALLETS, OPERATOR_DERIVATION_PATH},
    errors::ScriptError,
};

/// The operator and faucet addresses used for the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddresses {
    /// The block producer address passed to the settlement contract
    pub operator: Address,
    /// The address pre-funded with the faucet token
    pub faucet: Address,
}

/// Derive the 8 operator wallets from a mnemonic seed phrase, in index order
/// along `m/44'/60'/0'/1/{i}`
pub fn derive_operator_wallets(mnemonic: &str) -> Result<Vec<PrivateKeySigner>, ScriptError> {
    (0..NUM_OPERATOR_WALLETS)
        .map(|i| {
            MnemonicBuilder::<English>::default()
                .phrase(mnemonic)
                .derivation_path(format!("{OPERATOR_DERIVATION_PATH}{i}"))
                .map_err(|e| ScriptError::WalletDerivation(e.to_string()))?
                .build()
                .map_err(|e| ScriptError::WalletDerivation(e.to_string()))
        })
        .collect()
}

/// Resolve the operator and faucet addresses from the configuration.
///
/// The operator is the seed phrase's index-0 wallet when a seed phrase is
/// configured, otherwise the primary wallet. The faucet is the address of the
/// explicit faucet key when one is configured, otherwise the operator.
pub fn resolve_addresses(
    config: &DeploymentConfig,
    primary_wallet: Address,
) -> Result<ResolvedAddresses, ScriptError> {
    let operator = match &config.seed_phrase {
        Some(seed) => derive_operator_wallets(seed)?[0].address(),
        None => primary_wallet,
    };

    let faucet = match &config.faucet_key {
        Some(key) => PrivateKeySigner::from_str(key)
            .map_err(|e| ScriptError::WalletDerivation(e.to_string()))?
            .address(),
        None => operator,
    };

    Ok(ResolvedAddresses { operator, faucet })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        FAUCET_ENV_VAR, INFURA_ENV_VAR, NETWORK_ENV_VAR, OPERATORS_ENV_VAR, SEED_ENV_VAR,
    };

    /// The standard Anvil test mnemonic
    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

    /// The first default Anvil private key and its address
    const TEST_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_PKEY_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    /// A config with the given optional seed phrase and faucet key
    fn config_with(seed: Option<&str>, faucet: Option<&str>) -> DeploymentConfig {
        DeploymentConfig::from_lookup(|var| match var {
            NETWORK_ENV_VAR => Some("ropsten".to_string()),
            INFURA_ENV_VAR => Some("key".to_string()),
            OPERATORS_ENV_VAR => Some(TEST_PKEY.to_string()),
            SEED_ENV_VAR => seed.map(str::to_string),
            FAUCET_ENV_VAR => faucet.map(str::to_string),
            _ => None,
        })
        .unwrap()
    }

    /// The addresses derived from [`TEST_MNEMONIC`] along `m/44'/60'/0'/1/{i}`,
    /// computed externally, pinning the path template itself: the standard
    /// `m/44'/60'/0'/0/{i}` wallets for this mnemonic are the familiar Anvil
    /// accounts, and none of them appear below
    const DERIVED_ADDRESSES: [&str; 8] = [
        "0x4b39f7b0624b9db86ad293686bc38b903142dbbc",
        "0x71b4a2d9b91726bdb5849d928967a1654d7f3de7",
        "0xca55ac8514b25c660151a8ae0c90f116df160daa",
        "0x74b5ccd17461cc0a1a5a53ef2d84f0c54d2bf0b6",
        "0x76f301a8b093046632f51c2c0c75b4dd9a043029",
        "0x84c7ead5ef72fc376617a8b3c17da24d95bdc8c2",
        "0xd73dd260b95a4e1b276f731a1bf6739a07ab289f",
        "0x09424fb68a5e0c2c05fdbe4aa8f7cb6140ddba9a",
    ];

    #[test]
    fn derivation_matches_known_addresses() {
        let wallets = derive_operator_wallets(TEST_MNEMONIC).unwrap();

        for (wallet, expected) in wallets.iter().zip(DERIVED_ADDRESSES) {
            assert_eq!(wallet.address(), expected.parse::<Address>().unwrap());
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = derive_operator_wallets(TEST_MNEMONIC).unwrap();
        let second = derive_operator_wallets(TEST_MNEMONIC).unwrap();

        assert_eq!(first.len(), NUM_OPERATOR_WALLETS);
        let first_addrs: Vec<Address> = first.iter().map(PrivateKeySigner::address).collect();
        let second_addrs: Vec<Address> = second.iter().map(PrivateKeySigner::address).collect();
        assert_eq!(first_addrs, second_addrs);
    }

    #[test]
    fn derived_wallets_are_distinct() {
        let wallets = derive_operator_wallets(TEST_MNEMONIC).unwrap();
        for (i, a) in wallets.iter().enumerate() {
            for b in wallets.iter().skip(i + 1) {
                assert_ne!(a.address(), b.address());
            }
        }
    }

    #[test]
    fn rejects_invalid_mnemonics() {
        let res = derive_operator_wallets("not a valid mnemonic phrase");
        assert!(matches!(res, Err(ScriptError::WalletDerivation(_))));
    }

    #[test]
    fn operator_defaults_to_primary_wallet() {
        let config = config_with(None, None);
        let primary = TEST_PKEY_ADDRESS.parse().unwrap();

        let resolved = resolve_addresses(&config, primary).unwrap();
        assert_eq!(resolved.operator, primary);
        assert_eq!(resolved.faucet, primary);
    }

    #[test]
    fn seed_phrase_overrides_operator() {
        let config = config_with(Some(TEST_MNEMONIC), None);
        let primary = TEST_PKEY_ADDRESS.parse().unwrap();

        let resolved = resolve_addresses(&config, primary).unwrap();
        let seed_wallet_0 = derive_operator_wallets(TEST_MNEMONIC).unwrap()[0].address();
        assert_ne!(resolved.operator, primary);
        assert_eq!(resolved.operator, seed_wallet_0);
        // The faucet follows the operator when no faucet key is set
        assert_eq!(resolved.faucet, seed_wallet_0);
    }

    #[test]
    fn explicit_faucet_key_overrides_faucet() {
        let config = config_with(None, Some(TEST_PKEY));
        let primary = Address::ZERO;

        let resolved = resolve_addresses(&config, primary).unwrap();
        assert_eq!(resolved.operator, primary);
        assert_eq!(
            resolved.faucet,
            TEST_PKEY_ADDRESS.parse::<Address>().unwrap()
        );
    }
}
