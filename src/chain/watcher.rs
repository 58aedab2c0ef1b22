//! BirthWatcher — writes incoming Birth events onto the page
//!
//! Stream errors are logged and skipped. There is no retry and no
//! reconnection: the watcher ends when the stream closes.

use super::{BirthEvent, Subscription};
use crate::render::CatView;
use chrono::{DateTime, Duration, Utc};
use log::{error, info};

/// Counters from one watcher run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchStats {
    pub births: u64,
    pub errors: u64,
    /// Arrival of the first and the latest birth
    pub first_birth: Option<DateTime<Utc>>,
    pub last_birth: Option<DateTime<Utc>>,
}

impl WatchStats {
    fn record_birth(&mut self) {
        let now = Utc::now();
        self.first_birth.get_or_insert(now);
        self.last_birth = Some(now);
        self.births += 1;
    }

    /// Time between the first and the latest birth
    pub fn span(&self) -> Option<Duration> {
        Some(self.last_birth? - self.first_birth?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BirthWatcher {
    /// Stop after this many births
    limit: Option<u64>,
}

impl BirthWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: u64) -> Self {
        Self { limit: Some(limit) }
    }

    /// Show every event as a notification
    pub async fn run<V: CatView + ?Sized>(&self, subscription: Subscription, view: &mut V) -> WatchStats {
        self.run_with(subscription, view, |_, _| {}).await
    }

    /// Show every event as a notification, then hand it to `on_birth`
    pub async fn run_with<V, F>(&self, mut subscription: Subscription, view: &mut V, mut on_birth: F) -> WatchStats
    where
        V: CatView + ?Sized,
        F: FnMut(&BirthEvent, &mut V),
    {
        let mut stats = WatchStats::default();
        while self.limit.map_or(true, |limit| stats.births < limit) {
            match subscription.next_message().await {
                Some(Ok(event)) => {
                    info!("Birth: {}", event);
                    view.notify(&event.notification());
                    on_birth(&event, &mut *view);
                    stats.record_birth();
                }
                Some(Err(e)) => {
                    error!("Birth stream error: {}", e);
                    stats.errors += 1;
                }
                None => {
                    info!("Birth stream closed");
                    break;
                }
            }
        }
        subscription.unsubscribe();
        stats
    }
}
