//! Application layer — configuration and the cat controller

mod config;
mod controller;

pub use config::{AppConfig, ConfigError, CONFIG_ENV, DEFAULT_CONTRACT_ADDRESS};
pub use controller::Controller;
