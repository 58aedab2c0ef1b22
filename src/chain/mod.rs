//! Chain glue — wallet authorization, contract binding and the Birth feed
//!
//! The wallet and contract are external collaborators expressed as traits.
//! `LocalChain` and `StaticWallet` are in-memory stand-ins for demos and
//! tests.

mod address;
mod birth;
mod stream;
mod wallet;
mod contract;
mod local;
mod watcher;
mod session;

pub use address::{Address, AddressError};
pub use birth::{BirthEvent, BIRTH_EVENT};
pub use stream::{BirthFeed, StreamError, StreamItem, Subscription};
pub use wallet::{StaticWallet, WalletError, WalletProvider};
pub use contract::{ChainError, Contract, ContractAbi, ContractBinder, ContractOptions};
pub use local::LocalChain;
pub use watcher::{BirthWatcher, WatchStats};
pub use session::{Session, SessionError};
