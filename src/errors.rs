//! Definitions of errors that can occur during the execution of the deploy
//! script, and their mapping to process exit codes

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The exit code for configuration errors
pub const CONFIG_EXIT_CODE: i32 = 2;

/// The exit code for malformed-input errors
pub const PARSE_EXIT_CODE: i32 = 3;

/// The exit code for chain interaction errors
pub const CHAIN_EXIT_CODE: i32 = 4;

/// The exit code for registry write errors
pub const REGISTRY_EXIT_CODE: i32 = 5;

/// Errors that can occur during the execution of the deploy script
#[derive(Debug)]
pub enum ScriptError {
    /// A required environment value is missing or empty
    MissingConfig(&'static str),
    /// The configured network name is not a known network
    UnknownNetwork(String),
    /// Error parsing the bond size from its decimal ether string
    InvalidBondSize(String),
    /// Error reading or parsing a contract compilation artifact
    ArtifactParsing(String),
    /// Error deriving a wallet from the configured credentials
    WalletDerivation(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error fetching the current gas price
    GasPriceFetching(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error writing the deployment registry file
    WriteDeployments(String),
}

impl ScriptError {
    /// The process exit code for this error.
    ///
    /// Each error class gets a distinct code so callers can tell a bad
    /// environment apart from a failed chain interaction or a registry write
    /// failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScriptError::MissingConfig(_) | ScriptError::UnknownNetwork(_) => CONFIG_EXIT_CODE,
            ScriptError::InvalidBondSize(_)
            | ScriptError::ArtifactParsing(_)
            | ScriptError::WalletDerivation(_) => PARSE_EXIT_CODE,
            ScriptError::ClientInitialization(_)
            | ScriptError::GasPriceFetching(_)
            | ScriptError::ContractDeployment(_)
            | ScriptError::ContractInteraction(_) => CHAIN_EXIT_CODE,
            ScriptError::WriteDeployments(_) => REGISTRY_EXIT_CODE,
        }
    }
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::MissingConfig(var) => {
                write!(f, "{} not specified in environment variables", var)
            }
            ScriptError::UnknownNetwork(name) => write!(f, "unknown network: {}", name),
            ScriptError::InvalidBondSize(s) => write!(f, "error parsing bond size: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::WalletDerivation(s) => write!(f, "error deriving wallet: {}", s),
            ScriptError::ClientInitialization(s) => {
                write!(f, "error initializing client: {}", s)
            }
            ScriptError::GasPriceFetching(s) => write!(f, "error fetching gas price: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
