//! Contract bindings and compilation artifact loading

use std::{fs, path::Path};

use alloy::sol;
use serde::Deserialize;

use crate::errors::ScriptError;

// `funnel` returns the deterministic per-depositor funnel address; `deposit`
// records token funds sitting at that funnel as deposited for the account.
sol! {
    #[sol(rpc)]
    interface Fuel {
        function funnel(address account) external view returns (address);
        function deposit(address account, address token) external;
    }

    #[sol(rpc)]
    interface ERC20 {
        function transfer(address recipient, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// A compiled contract artifact, the JSON shape produced by the contract
/// build pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// The 0x-prefixed creation bytecode
    pub bytecode: String,
}

impl ContractArtifact {
    /// Load an artifact from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))
    }

    /// Decode the creation bytecode into raw bytes
    pub fn bytecode_bytes(&self) -> Result<Vec<u8>, ScriptError> {
        let stripped = self.bytecode.trim_start_matches("0x");
        hex::decode(stripped).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}
