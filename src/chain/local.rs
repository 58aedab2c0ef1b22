//! LocalChain — an in-memory kitty contract
//!
//! Mints kitties and emits `Birth` events to its subscribers. Stands in for
//! a node + deployed contract in the demo binary and in tests.

use super::{
    Address, BirthEvent, BirthFeed, ChainError, Contract, ContractAbi, ContractBinder,
    ContractOptions, StreamError, Subscription,
};
use crate::genome::Genome;
use log::{info, warn};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A chain with one kitty contract deployed at `address`
#[derive(Debug, Clone)]
pub struct LocalChain {
    address: Address,
    feed: BirthFeed,
    next_id: Arc<AtomicU64>,
}

impl LocalChain {
    pub fn new(address: Address) -> Self {
        info!("Local chain up, kitty contract at {}", address);
        Self {
            address,
            feed: BirthFeed::new(),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Number of kitties minted so far
    pub fn supply(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    /// Mint a kitty and emit its `Birth` event
    pub fn mint(&self, owner: Address, mum_id: u64, dad_id: u64, genes: u64) -> BirthEvent {
        let kitty_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let event = BirthEvent {
            owner,
            kitty_id,
            mum_id,
            dad_id,
            genes,
        };
        let delivered = self.feed.publish(Ok(event.clone()));
        info!("Minted kitty {} for {} ({} subscriber(s))", kitty_id, owner.short(), delivered);
        event
    }

    /// Mint a generation-0 kitty whose genes decode to `genome`
    pub fn mint_gen0(&self, owner: Address, genome: &Genome) -> Option<BirthEvent> {
        let genes = genome.encode()?.parse().ok()?;
        Some(self.mint(owner, 0, 0, genes))
    }

    /// Mint a kitty with random genes, bred from two existing kitties when
    /// there are at least two
    pub fn mint_random<R: Rng + ?Sized>(&self, owner: Address, rng: &mut R) -> BirthEvent {
        let supply = self.supply();
        let (mum_id, dad_id) = if supply >= 2 {
            (rng.gen_range(0..supply), rng.gen_range(0..supply))
        } else {
            (0, 0)
        };
        let genes = rng.gen_range(0..crate::genome::NUMERAL_SPACE);
        self.mint(owner, mum_id, dad_id, genes)
    }

    /// Push a provider error onto the stream
    pub fn emit_error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("Local chain emitting stream error: {}", message);
        self.feed.publish(Err(StreamError::Provider(message)));
    }
}

/// A binding to the local contract
struct LocalContract {
    address: Address,
    options: ContractOptions,
    feed: BirthFeed,
}

impl Contract for LocalContract {
    fn address(&self) -> Address {
        self.address
    }

    fn options(&self) -> &ContractOptions {
        &self.options
    }

    fn subscribe_birth(&self) -> Subscription {
        self.feed.subscribe()
    }
}

impl ContractBinder for LocalChain {
    fn bind(
        &self,
        abi: &ContractAbi,
        address: Address,
        options: ContractOptions,
    ) -> Result<Box<dyn Contract>, ChainError> {
        abi.validate_birth()?;
        if address != self.address {
            return Err(ChainError::Bind {
                address,
                reason: "no contract deployed at this address".to_string(),
            });
        }
        info!("Bound kitty contract {} from {}", address, options.from);
        Ok(Box::new(LocalContract {
            address,
            options,
            feed: self.feed.clone(),
        }))
    }
}
