//! Snapshot Store
//!
//! Holds the process-wide copy of the dataset. The document is fetched
//! exactly once; the result is published on a watch channel so every
//! subscriber sees the latest value immediately, including subscribers
//! that arrive after the load settled.
//!
//! A failed fetch is logged and collapses the snapshot to `Unavailable`.
//! Callers never see the underlying error, only the absence of data.

use std::sync::Arc;
use tokio::sync::{watch, OnceCell};
use tokio::task::JoinHandle;

use super::source::DataSource;
use super::types::Snapshot;

/// Current state of the shared snapshot
#[derive(Debug, Clone)]
pub enum SnapshotState {
    /// `load()` has not settled yet
    Loading,
    /// Dataset parsed and available
    Ready(Arc<Snapshot>),
    /// The fetch failed; no data for the rest of the session
    Unavailable,
}

impl SnapshotState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SnapshotState::Loading)
    }

    /// The held snapshot, absent while loading or after a failure
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        match self {
            SnapshotState::Ready(snapshot) => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotState::Loading => "loading",
            SnapshotState::Ready(_) => "ready",
            SnapshotState::Unavailable => "unavailable",
        }
    }
}

/// Owns the dataset source and the published snapshot
pub struct SnapshotStore {
    source: Box<dyn DataSource>,
    state_tx: watch::Sender<SnapshotState>,
    loaded: OnceCell<()>,
}

impl SnapshotStore {
    /// Create a store in the `Loading` state. Nothing is fetched until `load()`.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        let (state_tx, _) = watch::channel(SnapshotState::Loading);

        Self {
            source,
            state_tx,
            loaded: OnceCell::new(),
        }
    }

    /// Location of the underlying document
    pub fn source(&self) -> String {
        self.source.describe()
    }

    /// Fetch the dataset and publish the result.
    ///
    /// Only the first call performs a read. Concurrent callers wait for that
    /// read to settle; later calls return the settled snapshot as-is.
    pub async fn load(&self) -> Option<Arc<Snapshot>> {
        if self.loaded.initialized() {
            tracing::debug!(source = %self.source.describe(), "Dataset already loaded, skipping fetch");
        }

        self.loaded.get_or_init(|| self.fetch_and_publish()).await;
        self.current()
    }

    async fn fetch_and_publish(&self) {
        let source = self.source.describe();
        tracing::info!(source = %source, "Loading dataset");

        let state = match self.source.fetch().await {
            Ok(countries) => {
                tracing::info!(source = %source, countries = countries.len(), "Dataset loaded");
                SnapshotState::Ready(Arc::new(Snapshot::new(countries, source)))
            }
            Err(e) => {
                tracing::error!(source = %source, error = %e, "Failed to load dataset");
                SnapshotState::Unavailable
            }
        };

        // send_replace succeeds even when nobody is subscribed yet
        self.state_tx.send_replace(state);
    }

    /// Spawn `load()` on the runtime so callers can serve while it runs.
    /// Safe to call on a store that is already loaded.
    pub fn start_background_load(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.load().await;
        })
    }

    /// Latest snapshot, absent while loading or after a failed load
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.state_tx.borrow().snapshot()
    }

    /// Latest state including the loading/unavailable distinction
    pub fn state(&self) -> SnapshotState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to the snapshot. The latest value is replayed immediately.
    pub fn subscribe(&self) -> SnapshotSubscription {
        SnapshotSubscription {
            rx: self.state_tx.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.state_tx.receiver_count()
    }
}

/// A live view on the snapshot. Dropping it releases the subscription.
pub struct SnapshotSubscription {
    rx: watch::Receiver<SnapshotState>,
}

impl SnapshotSubscription {
    /// Latest published state without waiting
    pub fn latest(&self) -> SnapshotState {
        self.rx.borrow().clone()
    }

    /// Wait until loading has settled and return the terminal state.
    ///
    /// Only returns once `SnapshotStore::load` has run (directly or via
    /// `start_background_load`); on a store that is never loaded this
    /// waits until the store is dropped.
    pub async fn settled(&mut self) -> SnapshotState {
        match self.rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // Store dropped before the load settled
            Err(_) => SnapshotState::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::source::{FileSource, StaticSource};
    use crate::dataset::types::{Country, Participation};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample() -> Vec<Country> {
        vec![Country::new(1, "France").participation(Participation::new(1, 2000, 5, 10))]
    }

    struct CountingSource {
        fetches: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl DataSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        async fn fetch(&self) -> crate::dataset::SourceResult<Vec<Country>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(sample())
        }
    }

    #[tokio::test]
    async fn test_starts_loading_and_absent() {
        let store = SnapshotStore::new(Box::new(StaticSource::new(sample())));

        assert!(store.state().is_loading());
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_load_publishes_snapshot() {
        let store = SnapshotStore::new(Box::new(StaticSource::new(sample())));

        let snapshot = store.load().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.state().as_str(), "ready");
        assert_eq!(store.current().unwrap().countries()[0].country, "France");
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_absent_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(Box::new(FileSource::new(dir.path().join("missing.json"))));

        assert!(store.load().await.is_none());
        assert!(matches!(store.state(), SnapshotState::Unavailable));
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_load_fetches_once() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let store = SnapshotStore::new(Box::new(CountingSource {
            fetches: Arc::clone(&fetches),
        }));

        store.load().await;
        store.load().await;

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_background_load_after_load_does_not_refetch() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let store = Arc::new(SnapshotStore::new(Box::new(CountingSource {
            fetches: Arc::clone(&fetches),
        })));

        store.load().await;
        Arc::clone(&store).start_background_load().await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(store.current().is_some());
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_latest_value() {
        let store = SnapshotStore::new(Box::new(StaticSource::new(sample())));
        store.load().await;

        let subscription = store.subscribe();
        assert!(subscription.latest().snapshot().is_some());
    }

    #[tokio::test]
    async fn test_subscriber_waits_for_background_load() {
        let store = Arc::new(SnapshotStore::new(Box::new(StaticSource::new(sample()))));
        let mut subscription = store.subscribe();

        let handle = Arc::clone(&store).start_background_load();
        let state = subscription.settled().await;
        handle.await.unwrap();

        assert!(matches!(state, SnapshotState::Ready(_)));
    }

    #[tokio::test]
    async fn test_dropping_subscription_releases_it() {
        let store = SnapshotStore::new(Box::new(StaticSource::new(sample())));

        let first = store.subscribe();
        let second = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        drop(first);
        assert_eq!(store.subscriber_count(), 1);
        drop(second);
        assert_eq!(store.subscriber_count(), 0);
    }
}
