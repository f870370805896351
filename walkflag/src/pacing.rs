//! Shared outbound request pacing.
//!
//! The public routing and geocoding endpoints are unauthenticated and rate
//! limited (Nominatim allows one request per second). A [`RequestPacer`]
//! enforces a minimum interval between consecutive requests from every
//! client that shares it, independently of the discovery engine's own
//! per-direction pause.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use walkflag::pacing::RequestPacer;
//!
//! let pacer = Arc::new(RequestPacer::new(Duration::from_secs(1)));
//! let router = OsrmRouter::new(http.clone(), url).with_pacer(pacer.clone());
//! let geocoder = NominatimGeocoder::new(http, url).with_pacer(pacer);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum-interval gate shared across external service clients.
#[derive(Debug)]
pub struct RequestPacer {
    /// Minimum spacing between request starts
    min_interval: Duration,

    /// Earliest instant the next request may start
    next_slot: Mutex<Option<Instant>>,

    /// Number of acquisitions that had to wait (for diagnostics)
    delayed: AtomicU64,
}

impl RequestPacer {
    /// Creates a pacer allowing one request per `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(None),
            delayed: AtomicU64::new(0),
        }
    }

    /// Waits until a request may be issued and reserves the following slot.
    ///
    /// Callers are served in the order they arrive; the lock is held while
    /// waiting so later callers queue behind the current one.
    pub async fn acquire(&self) {
        let mut next_slot = self.next_slot.lock().await;

        if let Some(slot) = *next_slot {
            if slot > Instant::now() {
                self.delayed.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(
                    wait_ms = (slot - Instant::now()).as_millis() as u64,
                    "Pacing outbound request"
                );
                tokio::time::sleep_until(slot).await;
            }
        }

        *next_slot = Some(Instant::now() + self.min_interval);
    }

    /// Returns the configured minimum interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Returns how many acquisitions have had to wait so far.
    pub fn delayed_count(&self) -> u64 {
        self.delayed.load(Ordering::Relaxed)
    }
}
