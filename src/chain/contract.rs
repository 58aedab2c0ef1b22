//! Contract binding — ABI, options and the binder/contract traits

use super::{Address, Subscription, BIRTH_EVENT};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

/// Inputs a usable `Birth` event must declare
const BIRTH_INPUTS: [&str; 5] = ["owner", "kittyId", "mumId", "dadId", "genes"];

/// Contract binding errors
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Failed to read ABI: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid ABI: {0}")]
    InvalidAbi(String),

    #[error("ABI does not declare event '{event}' with inputs {expected:?}")]
    MissingEvent { event: String, expected: Vec<String> },

    #[error("Failed to bind contract at {address}: {reason}")]
    Bind { address: Address, reason: String },
}

/// The contract's capability descriptor (a JSON ABI array)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAbi(Value);

impl ContractAbi {
    pub fn from_json(text: &str) -> Result<Self, ChainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ChainError::InvalidAbi(e.to_string()))?;
        if !value.is_array() {
            return Err(ChainError::InvalidAbi("expected a JSON array".to_string()));
        }
        Ok(Self(value))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The slice of the kitty contract ABI this crate consumes
    pub fn kitty_core() -> Self {
        let inputs: Vec<Value> = BIRTH_INPUTS
            .iter()
            .map(|name| {
                let ty = if *name == "owner" { "address" } else { "uint256" };
                json!({ "indexed": false, "name": name, "type": ty })
            })
            .collect();
        Self(json!([
            { "anonymous": false, "inputs": inputs, "name": BIRTH_EVENT, "type": "event" }
        ]))
    }

    /// Names of the events the ABI declares
    pub fn events(&self) -> Vec<&str> {
        self.entries()
            .filter(|e| e["type"] == "event")
            .filter_map(|e| e["name"].as_str())
            .collect()
    }

    /// Check that `Birth` is declared with the five expected inputs
    pub fn validate_birth(&self) -> Result<(), ChainError> {
        let declared = self
            .entries()
            .find(|e| e["type"] == "event" && e["name"] == BIRTH_EVENT)
            .and_then(|e| e["inputs"].as_array())
            .map(|inputs| {
                inputs
                    .iter()
                    .filter_map(|i| i["name"].as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        if BIRTH_INPUTS.iter().all(|name| declared.contains(name)) {
            Ok(())
        } else {
            Err(ChainError::MissingEvent {
                event: BIRTH_EVENT.to_string(),
                expected: BIRTH_INPUTS.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    fn entries(&self) -> impl Iterator<Item = &Value> {
        self.0.as_array().into_iter().flatten()
    }
}

/// Options attached to a contract binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractOptions {
    /// Account that sends transactions through the binding
    pub from: Address,
}

/// A bound contract instance
pub trait Contract: Send + Sync {
    fn address(&self) -> Address;

    fn options(&self) -> &ContractOptions;

    /// Open a subscription to `Birth` events
    fn subscribe_birth(&self) -> Subscription;
}

/// Creates contract bindings (the blockchain client)
pub trait ContractBinder {
    fn bind(
        &self,
        abi: &ContractAbi,
        address: Address,
        options: ContractOptions,
    ) -> Result<Box<dyn Contract>, ChainError>;
}
