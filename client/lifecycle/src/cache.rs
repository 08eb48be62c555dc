//! Project→campaign index cache with wholesale TTL invalidation.
//!
//! The chain lookup behind [`IndexCache::resolve`] is expensive (a contract
//! scan), so resolved indices are memoized. Invalidation is deliberately
//! coarse: one shared stamp covers the whole map, and once it is older than
//! the TTL the *entire* map is flushed on the next miss — entries are never
//! expired individually. Expiry is checked lazily at access time; there is
//! no timer.
//!
//! Two callers racing on the same uncached index will each issue a fetch;
//! the lock is released across the await on purpose, and single-flight
//! deduplication is left to callers that need it.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Default time-to-live for the index cache, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 60;

#[derive(Default)]
struct CacheState {
    entries: HashMap<u64, i64>,
    /// When the current generation of entries was started. `None` after
    /// construction or an explicit reset.
    stamped_at: Option<DateTime<Utc>>,
}

/// Memoizes the project-index → campaign-index lookup.
///
/// Construct one per engine (or per test); there is no module-level
/// singleton to share state through.
pub struct IndexCache {
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl IndexCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECS as i64))
    }

    /// Resolve the campaign index for `project_index`, consulting the cache
    /// first and falling back to `fetch` (the injected chain call).
    ///
    /// A negative result means "no campaign yet" — it is returned to the
    /// caller but never cached, so a not-yet-created campaign is retried on
    /// every call. Fetch errors propagate verbatim and cache nothing.
    pub async fn resolve<F, Fut, E>(
        &self,
        project_index: u64,
        now: DateTime<Utc>,
        fetch: F,
    ) -> Result<i64, E>
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = Result<i64, E>>,
    {
        {
            let mut state = self.lock();

            // Hit check runs before the expiry check: an entry already in
            // the map is served even if the stamp has gone stale, and the
            // flush happens on the first miss after expiry.
            if let Some(&campaign_index) = state.entries.get(&project_index) {
                debug!("index cache hit: project {project_index} → campaign {campaign_index}");
                return Ok(campaign_index);
            }

            let expired = match state.stamped_at {
                Some(stamp) => now.signed_duration_since(stamp) > self.ttl,
                None => true,
            };
            if expired {
                if !state.entries.is_empty() {
                    debug!("index cache expired; flushing {} entries", state.entries.len());
                }
                state.entries.clear();
                state.stamped_at = Some(now);
            }
        }

        let campaign_index = fetch(project_index).await?;

        if campaign_index >= 0 {
            debug!("index resolved: project {project_index} → campaign {campaign_index}");
            self.lock().entries.insert(project_index, campaign_index);
        } else {
            debug!("no campaign for project {project_index} yet; not cached");
        }

        Ok(campaign_index)
    }

    /// Drop every entry and the stamp, unconditionally. For external
    /// invalidation, e.g. right after creating a new campaign.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.stamped_at = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
