//! AppConfig — contract address, palette and demo settings
//!
//! Loaded from a JSON file; every field has a default so an empty object
//! (or no file at all) is a valid configuration.

use crate::chain::{Address, ChainError, ContractAbi};
use crate::render::Palette;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Deployed kitty contract
pub const DEFAULT_CONTRACT_ADDRESS: Address = Address::new([
    0x2f, 0x04, 0xde, 0xf5, 0xd3, 0xb9, 0x4e, 0xf5, 0x10, 0x88, 0x08, 0x2b, 0x4c, 0x94, 0xf5, 0x8c,
    0x57, 0x65, 0xe0, 0xd4,
]);

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "KITTIES_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load ABI: {0}")]
    Abi(#[from] ChainError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address of the kitty contract to bind
    pub contract_address: Address,
    /// Custom palette; the built-in one when absent
    pub palette: Option<Palette>,
    /// Contract ABI file; the built-in Birth ABI when absent
    pub abi_path: Option<PathBuf>,
    /// Local chain demo: milliseconds between mints
    pub mint_interval_ms: u64,
    /// Local chain demo: account that owns minted kitties
    pub owner: Address,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            palette: None,
            abi_path: None,
            mint_interval_ms: 500,
            owner: Address::new([0x11; 20]),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&data)?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from `$KITTIES_CONFIG` when set, defaults otherwise
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette.clone().unwrap_or_default()
    }

    pub fn abi(&self) -> Result<ContractAbi, ConfigError> {
        match &self.abi_path {
            Some(path) => Ok(ContractAbi::load(path)?),
            None => Ok(ContractAbi::kitty_core()),
        }
    }
}
