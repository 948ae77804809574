//! The local deployment registry.
//!
//! A single JSON file maps version tags to per-network contract addresses:
//! `{"v1": {"ropsten": "0x..."}}`. The file is the only persistent state the
//! script owns. A missing or unparsable file is treated as an empty registry;
//! the merged result is always written back in full, pretty-printed.

use std::{fs, path::Path};

use alloy::primitives::Address;
use serde_json::{Map, Value};

use crate::{constants::REGISTRY_VERSION_KEY, errors::ScriptError};

/// Read the registry from disk, yielding an empty registry when the file is
/// missing or does not parse as a JSON object.
///
/// The permissiveness is deliberate: a first deployment has no registry yet,
/// and a corrupt one should not block recording a fresh address.
fn read_registry(path: &Path) -> Map<String, Value> {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<Value>(&contents).ok())
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default()
}

/// Merge a network's contract address into the registry under the current
/// version tag, preserving every other entry at both levels
pub fn merge_deployment(registry: &mut Map<String, Value>, network: &str, address: Address) {
    let entry = registry
        .entry(REGISTRY_VERSION_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    // A non-object version entry is replaced wholesale
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }

    entry[network] = Value::String(format!("{address:#x}"));
}

/// Record a deployed contract address in the registry file.
///
/// The full merged registry is serialized first and written in a single call
/// so the file is never left partially written by this process.
pub fn record_deployment(
    path: &Path,
    network: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut registry = read_registry(path);
    merge_deployment(&mut registry, network, address);

    let contents = serde_json::to_string_pretty(&Value::Object(registry))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        }
    }

    fs::write(path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// A fixed address for the tests
    fn address() -> Address {
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap()
    }

    #[test]
    fn records_into_a_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Fuel.json");

        record_deployment(&path, "ropsten", address()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written["v1"]["ropsten"],
            Value::String(format!("{:#x}", address()))
        );
    }

    #[test]
    fn records_into_a_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Fuel.json");
        fs::write(&path, "{ not json").unwrap();

        record_deployment(&path, "ropsten", address()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = written["v1"].as_object().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("ropsten"));
    }

    #[test]
    fn preserves_unrelated_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Fuel.json");
        fs::write(
            &path,
            r#"{
  "v0": { "mainnet": "0x0000000000000000000000000000000000000001" },
  "v1": { "goerli": "0x0000000000000000000000000000000000000002" },
  "notes": "hand-maintained"
}"#,
        )
        .unwrap();

        record_deployment(&path, "ropsten", address()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written["v0"]["mainnet"],
            Value::String("0x0000000000000000000000000000000000000001".to_string())
        );
        assert_eq!(
            written["v1"]["goerli"],
            Value::String("0x0000000000000000000000000000000000000002".to_string())
        );
        assert_eq!(written["notes"], Value::String("hand-maintained".to_string()));
        assert_eq!(
            written["v1"]["ropsten"],
            Value::String(format!("{:#x}", address()))
        );
    }

    #[test]
    fn overwrites_the_same_network() {
        let mut registry = Map::new();
        merge_deployment(&mut registry, "ropsten", Address::ZERO);
        merge_deployment(&mut registry, "ropsten", address());

        let entries = registry["v1"].as_object().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries["ropsten"],
            Value::String(format!("{:#x}", address()))
        );
    }

    #[test]
    fn replaces_a_non_object_version_entry() {
        let mut registry = Map::new();
        registry.insert("v1".to_string(), Value::String("garbage".to_string()));

        merge_deployment(&mut registry, "ropsten", address());
        assert!(registry["v1"].is_object());
        assert_eq!(
            registry["v1"]["ropsten"],
            Value::String(format!("{:#x}", address()))
        );
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Fuel.json");

        let mut expected = Map::new();
        merge_deployment(&mut expected, "ropsten", address());
        record_deployment(&path, "ropsten", address()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, Value::Object(expected));
    }

    #[test]
    fn writes_two_space_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Fuel.json");

        record_deployment(&path, "ropsten", address()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"v1\""));
        assert!(contents.contains("\n    \"ropsten\""));
    }
}
