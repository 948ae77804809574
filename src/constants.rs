//! Constants used in the deploy script

use alloy::primitives::U256;

/// The environment variable holding the target network name
pub const NETWORK_ENV_VAR: &str = "fuel_v1_network";

/// The environment variable holding the Infura project key
pub const INFURA_ENV_VAR: &str = "fuel_v1_default_infura";

/// The environment variable holding the comma-separated operator private keys
pub const OPERATORS_ENV_VAR: &str = "fuel_v1_default_operators";

/// The environment variable holding the optional operator mnemonic seed phrase
pub const SEED_ENV_VAR: &str = "fuel_v1_default_seed";

/// The environment variable holding the optional faucet private key
pub const FAUCET_ENV_VAR: &str = "fuel_v1_default_faucet";

/// The environment variable holding the bond size as a decimal ether string
pub const BOND_SIZE_ENV_VAR: &str = "bond_size";

/// The bond size used when `bond_size` is unset
pub const DEFAULT_BOND_SIZE: &str = "0.1";

/// The networks reachable through Infura, the only networks this script
/// deploys to
pub const KNOWN_NETWORKS: [&str; 5] = ["mainnet", "ropsten", "rinkeby", "goerli", "kovan"];

/// The number of operator wallets derived from the seed phrase.
///
/// Must stay at 8, with the path template below, for address compatibility
/// with prior deployments.
pub const NUM_OPERATOR_WALLETS: usize = 8;

/// The BIP-44 derivation path prefix for operator wallets; the wallet index
/// is appended
pub const OPERATOR_DERIVATION_PATH: &str = "m/44'/60'/0'/1/";

/// One week in seconds
pub const ONE_WEEK_SECONDS: u64 = 604_800;

/// One day in seconds
pub const ONE_DAY_SECONDS: u64 = 86_400;

/// The assumed Ethereum block time in seconds, used to convert the delay
/// windows into block counts
pub const ASSUMED_BLOCK_TIME_SECONDS: u64 = 13;

/// The penalty delay in blocks, disabled for this deployment profile
pub const PENALTY_DELAY_BLOCKS: u64 = 0;

/// The settlement contract name constructor argument
pub const CONTRACT_NAME: &str = "Fuel";

/// The settlement contract version constructor argument
pub const CONTRACT_VERSION: &str = "1.0.0";

/// The gas limit applied to every transaction sent by the script
pub const GAS_LIMIT: u64 = 6_000_000;

/// The total supply minted for the faucet token, `0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF`
pub const FAUCET_TOKEN_SUPPLY: U256 = U256::from_limbs([u64::MAX, 0x00FF_FFFF_FFFF_FFFF, 0, 0]);

/// The version tag under which addresses are recorded in the deployment
/// registry
pub const REGISTRY_VERSION_KEY: &str = "v1";
