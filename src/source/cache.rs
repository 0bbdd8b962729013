// src/source/cache.rs
// =============================================================================
// A single time-windowed cache slot for the fetched project list.
//
// How it works:
// - store() replaces whatever was there and stamps it with Instant::now()
// - get() hands back the stored value while it is younger than the window
// - in AlwaysFresh mode nothing is ever kept, so every get() misses
//
// Concurrency:
// - the slot sits behind a tokio RwLock so many requests can read at once
// - two requests that both miss will both fetch upstream and both store;
//   the last store wins. There is no single-flight coordination.
//
// Values are shared as Arc<T> so a hit costs a reference count, not a copy.
// =============================================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

/// How long a fetched result may be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Reuse a stored result until it is older than the window
    Revalidate(Duration),
    /// Never reuse; for local development
    AlwaysFresh,
}

impl Default for Freshness {
    fn default() -> Self {
        Freshness::Revalidate(Duration::from_secs(60 * 60))
    }
}

#[derive(Debug)]
struct Entry<T> {
    stored_at: Instant,
    value: Arc<T>,
}

#[derive(Debug)]
pub struct RevalidatingCache<T> {
    freshness: Freshness,
    slot: RwLock<Option<Entry<T>>>,
}

impl<T> RevalidatingCache<T> {
    pub fn new(freshness: Freshness) -> Self {
        Self {
            freshness,
            slot: RwLock::new(None),
        }
    }

    /// The stored value, if there is one and it is still inside the window
    pub async fn get(&self) -> Option<Arc<T>> {
        let window = match self.freshness {
            Freshness::AlwaysFresh => return None,
            Freshness::Revalidate(window) => window,
        };

        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry) if entry.stored_at.elapsed() < window => {
                debug!("Cache hit, age {:?}", entry.stored_at.elapsed());
                Some(Arc::clone(&entry.value))
            }
            Some(_) => {
                debug!("Cache entry expired");
                None
            }
            None => None,
        }
    }

    /// Stores a freshly fetched value (last write wins) and returns it shared
    pub async fn store(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);

        if self.freshness == Freshness::AlwaysFresh {
            return value;
        }

        let mut slot = self.slot.write().await;
        *slot = Some(Entry {
            stored_at: Instant::now(),
            value: Arc::clone(&value),
        });

        value
    }
}
