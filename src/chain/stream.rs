//! Birth event stream — register, receive discrete messages, unsubscribe
//!
//! A `BirthFeed` fans events out to every live `Subscription` over a tokio
//! broadcast channel. Dropping a subscription unregisters it.

use super::{BirthEvent, BIRTH_EVENT};
use futures::Stream;
use log::info;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Buffered messages per subscriber before it starts lagging
const FEED_CAPACITY: usize = 256;

/// Errors delivered on the stream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Subscriber lagged, {0} events dropped")]
    Lagged(u64),
}

/// One message on the stream: an event or an error
pub type StreamItem = Result<BirthEvent, StreamError>;

/// Publishing side of the Birth stream
#[derive(Debug, Clone)]
pub struct BirthFeed {
    tx: broadcast::Sender<StreamItem>,
}

impl Default for BirthFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl BirthFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(FEED_CAPACITY);
        Self { tx }
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> Subscription {
        let subscription = Subscription {
            id: Uuid::new_v4().to_string(),
            rx: self.tx.subscribe(),
        };
        info!("Subscribed {} to {}", subscription.id, BIRTH_EVENT);
        subscription
    }

    /// Deliver a message to every live subscriber; returns how many got it
    pub fn publish(&self, item: StreamItem) -> usize {
        self.tx.send(item).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving side of the Birth stream
#[derive(Debug)]
pub struct Subscription {
    id: String,
    rx: broadcast::Receiver<StreamItem>,
}

impl Subscription {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Wait for the next message; `None` once the feed is gone
    pub async fn next_message(&mut self) -> Option<StreamItem> {
        match self.rx.recv().await {
            Ok(item) => Some(item),
            Err(broadcast::error::RecvError::Lagged(n)) => Some(Err(StreamError::Lagged(n))),
            Err(broadcast::error::RecvError::Closed) => None,
        }
    }

    /// Adapt into a `futures::Stream`
    pub fn into_stream(self) -> impl Stream<Item = StreamItem> {
        futures::stream::unfold(self, |mut sub| async move {
            sub.next_message().await.map(|item| (item, sub))
        })
    }

    /// Unregister from the feed
    pub fn unsubscribe(self) {
        info!("Unsubscribed {} from {}", self.id, BIRTH_EVENT);
    }
}
