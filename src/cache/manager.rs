//! The shared cache handle and its background sweep task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cache::ResponseStore;

/// Errors from cache construction.
///
/// `get` and `put` themselves cannot fail; absence is signalled by `None`.
#[derive(Debug, Error)]
pub enum CacheConfigError {
    /// The entry lifetime was zero.
    #[error("cache lifetime must be greater than zero")]
    ZeroLifetime,

    /// The sweep interval was zero, which would spin the sweep task.
    #[error("cache sweep interval must be greater than zero")]
    ZeroSweepInterval,
}

/// A concurrent cache of raw HTTP response bodies, keyed by URL, with
/// time-based expiry.
///
/// One exclusive lock protects the whole store; `get`, `put`, and each
/// sweep pass hold it only for the duration of one in-memory operation.
/// Construction spawns a single background task that periodically removes
/// entries older than the configured lifetime. Reads deliberately do not
/// check age: a body can be served up to one sweep interval past its
/// nominal lifetime, which keeps `get` O(1) and lock-hold time minimal.
///
/// The handle is cheap to clone and safe to share across tasks. Call
/// [`shutdown`](ResponseCache::shutdown) to stop the sweep promptly; the
/// task also exits on its own once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<Mutex<ResponseStore>>,
    shutdown_tx: mpsc::Sender<()>,
    lifetime: Duration,
    sweep_interval: Duration,
}

impl ResponseCache {
    /// Creates a cache whose sweep runs once per `lifetime`.
    ///
    /// Must be called from within a tokio runtime, since the sweep task is
    /// spawned here.
    pub fn new(lifetime: Duration) -> Result<Self, CacheConfigError> {
        Self::with_sweep_interval(lifetime, lifetime)
    }

    /// Creates a cache with independently chosen lifetime and sweep period.
    ///
    /// A sweep interval shorter than the lifetime tightens the staleness
    /// window; a longer one lets entries linger further past their
    /// lifetime. Both durations must be non-zero.
    pub fn with_sweep_interval(
        lifetime: Duration,
        sweep_interval: Duration,
    ) -> Result<Self, CacheConfigError> {
        if lifetime.is_zero() {
            return Err(CacheConfigError::ZeroLifetime);
        }
        if sweep_interval.is_zero() {
            return Err(CacheConfigError::ZeroSweepInterval);
        }

        let store = Arc::new(Mutex::new(ResponseStore::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        spawn_sweep(Arc::clone(&store), lifetime, sweep_interval, shutdown_rx);

        Ok(Self {
            store,
            shutdown_tx,
            lifetime,
            sweep_interval,
        })
    }

    /// Returns the cached body for `key`, or `None` if absent.
    ///
    /// Age is not checked here; an entry past its lifetime is still
    /// returned until the sweep removes it. An empty body is a hit
    /// (`Some` of an empty vec), distinct from a miss.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock_store().lookup(key).map(|entry| entry.body.clone())
    }

    /// Inserts or overwrites the body for `key` with a fresh timestamp.
    pub fn put(&self, key: &str, body: Vec<u8>) {
        self.lock_store().insert(key.to_string(), body);
    }

    /// Signals the sweep task to exit.
    ///
    /// Safe to call any number of times from any handle; calls after the
    /// first are no-ops. Cached entries stay readable afterwards, they
    /// just stop being evicted.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }

    /// The configured entry lifetime.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// The configured sweep period.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    /// Number of entries currently stored, stale ones included.
    pub fn len(&self) -> usize {
        self.lock_store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_store().is_empty()
    }

    fn lock_store(&self) -> MutexGuard<'_, ResponseStore> {
        // A poisoned lock only means another task panicked mid-operation;
        // the map itself is still valid, so recover it rather than
        // propagate the panic.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Spawns the background task that evicts stale entries on a fixed period.
///
/// The task waits one full interval before its first pass, then on every
/// tick takes the store lock, drops entries older than `lifetime`, and
/// releases the lock before sleeping again. It exits when `shutdown` is
/// signalled or when every `ResponseCache` handle has been dropped.
fn spawn_sweep(
    store: Arc<Mutex<ResponseStore>>,
    lifetime: Duration,
    sweep_interval: Duration,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        // Skip the first tick (immediate)
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard =
                            store.lock().unwrap_or_else(PoisonError::into_inner);
                        guard.remove_stale(lifetime)
                    };
                    if removed > 0 {
                        debug!(removed, "cache sweep evicted stale responses");
                    }
                }
                _ = shutdown_rx.recv() => {
                    debug!("cache sweep stopping");
                    break;
                }
            }
        }
    });
}
