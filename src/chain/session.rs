//! Session — page startup: authorize, bind the contract, subscribe

use super::{
    Address, ChainError, Contract, ContractAbi, ContractBinder, ContractOptions, Subscription,
    WalletError, WalletProvider,
};
use log::info;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Authorization failed: {0}")]
    Wallet(#[from] WalletError),

    #[error("Contract binding failed: {0}")]
    Chain(#[from] ChainError),
}

/// An authorized account bound to the kitty contract
pub struct Session {
    account: Address,
    contract: Box<dyn Contract>,
}

impl Session {
    /// Request authorization, then bind the contract at `address` with the
    /// first authorized account as sender.
    ///
    /// A declined request is returned as is; nothing is retried.
    pub async fn connect<W, B>(
        wallet: &W,
        binder: &B,
        abi: &ContractAbi,
        address: Address,
    ) -> Result<Self, SessionError>
    where
        W: WalletProvider + ?Sized,
        B: ContractBinder + ?Sized,
    {
        let accounts = wallet.request_accounts().await?;
        let account = *accounts.first().ok_or(WalletError::NoAccounts)?;
        info!("Authorized as {}", account);
        let contract = binder.bind(abi, address, ContractOptions { from: account })?;
        Ok(Self { account, contract })
    }

    pub fn account(&self) -> Address {
        self.account
    }

    pub fn contract(&self) -> &dyn Contract {
        self.contract.as_ref()
    }

    pub fn subscribe_birth(&self) -> Subscription {
        self.contract.subscribe_birth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{BirthWatcher, LocalChain, StaticWallet};
    use crate::render::MemoryView;

    fn contract_address() -> Address {
        "0x2f04dEf5D3B94Ef51088082b4C94f58C5765E0d4".parse().unwrap()
    }

    #[tokio::test]
    async fn test_connect_and_watch() {
        let chain = LocalChain::new(contract_address());
        let me = Address::new([0x42; 20]);
        let wallet = StaticWallet::approving(vec![me, Address::new([0x43; 20])]);

        let session = Session::connect(&wallet, &chain, &ContractAbi::kitty_core(), contract_address())
            .await
            .unwrap();
        assert_eq!(session.account(), me);
        assert_eq!(session.contract().options().from, me);
        assert_eq!(session.contract().address(), contract_address());

        let sub = session.subscribe_birth();
        chain.mint(me, 0, 0, 1013961011131311);

        let mut view = MemoryView::new();
        let stats = BirthWatcher::with_limit(1).run(sub, &mut view).await;
        assert_eq!(stats.births, 1);
        assert!(view.last_notification().unwrap().contains("kittyId:0"));
    }

    #[tokio::test]
    async fn test_declined_authorization_propagates() {
        let chain = LocalChain::new(contract_address());
        let result = Session::connect(
            &StaticWallet::declining(),
            &chain,
            &ContractAbi::kitty_core(),
            contract_address(),
        )
        .await;
        assert!(matches!(result, Err(SessionError::Wallet(WalletError::Declined))));
    }

    #[tokio::test]
    async fn test_empty_account_list() {
        let chain = LocalChain::new(contract_address());
        let result = Session::connect(
            &StaticWallet::approving(Vec::new()),
            &chain,
            &ContractAbi::kitty_core(),
            contract_address(),
        )
        .await;
        assert!(matches!(result, Err(SessionError::Wallet(WalletError::NoAccounts))));
    }
}
