//! WalletProvider — account authorization by an external wallet

use super::Address;
use async_trait::async_trait;
use log::info;

/// Wallet errors. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("User declined the authorization request")]
    Declined,

    #[error("Wallet authorized no accounts")]
    NoAccounts,

    #[error("Wallet provider error: {0}")]
    Provider(String),
}

/// An injected wallet (browser extension, hardware signer, ...)
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the user to authorize this page.
    ///
    /// Suspends until the user answers. Resolves to the authorized
    /// accounts, the selected one first.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;
}

/// Wallet that answers from a fixed account list
#[derive(Debug, Clone)]
pub struct StaticWallet {
    accounts: Vec<Address>,
    approve: bool,
}

impl StaticWallet {
    /// Approves every request with these accounts
    pub fn approving(accounts: Vec<Address>) -> Self {
        Self { accounts, approve: true }
    }

    /// Declines every request
    pub fn declining() -> Self {
        Self {
            accounts: Vec::new(),
            approve: false,
        }
    }
}

#[async_trait]
impl WalletProvider for StaticWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if !self.approve {
            info!("Static wallet declined authorization");
            return Err(WalletError::Declined);
        }
        info!("Static wallet authorized {} account(s)", self.accounts.len());
        Ok(self.accounts.clone())
    }
}
