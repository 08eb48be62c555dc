//! The lifecycle facade — the single surface callers go through.
//!
//! [`LifecycleEngine`] composes the clock, classifier, eligibility gate,
//! metrics, and index cache. Each call evaluates `now` exactly once and
//! resolves the campaign schedule exactly once, so phase, eligibility, and
//! the reported window bounds can never drift apart within a call — the
//! race that duplicated ad-hoc phase checks used to create.
//!
//! The engine owns its [`IndexCache`] instance. Independent engines (per
//! test, per tenant) share no state.

use std::future::Future;

use chrono::{DateTime, Duration, Utc};

use crate::cache::IndexCache;
use crate::clock::{self, YearMode};
use crate::config::EngineConfig;
use crate::eligibility;
use crate::metrics::{self, CampaignMetrics};
use crate::phase::{self, PhaseInfo};
use crate::types::{Campaign, InvestorTier};

pub struct LifecycleEngine {
    year_mode: YearMode,
    index_cache: IndexCache,
}

impl LifecycleEngine {
    pub fn new(config: EngineConfig) -> Self {
        LifecycleEngine {
            year_mode: config.year_mode,
            index_cache: IndexCache::new(Duration::seconds(config.index_cache_ttl_secs as i64)),
        }
    }

    /// Year convention this engine applies to campaign schedules.
    pub fn year_mode(&self) -> YearMode {
        self.year_mode
    }

    /// Classify the campaign at `now` and describe the resulting phase.
    pub fn describe_campaign(&self, campaign: &Campaign, now: DateTime<Utc>) -> PhaseInfo {
        let schedule = clock::resolve_schedule(&campaign.dates, self.year_mode);
        phase::describe(&schedule, now)
    }

    /// Can an investor of `tier` invest in this campaign at `now`?
    pub fn can_invest(&self, campaign: &Campaign, now: DateTime<Utc>, tier: InvestorTier) -> bool {
        let schedule = clock::resolve_schedule(&campaign.dates, self.year_mode);
        eligibility::can_invest(phase::classify(&schedule, now), tier)
    }

    /// Progress and funding-cap figures for the campaign.
    pub fn metrics(&self, campaign: &Campaign) -> CampaignMetrics {
        let caps = metrics::funding_caps(campaign);
        CampaignMetrics {
            progress_percent: metrics::progress_percent(campaign),
            min_cap: caps.min_cap,
            max_cap: caps.max_cap,
        }
    }

    /// Resolve the campaign index for `project_index` through the cache.
    ///
    /// `fetch` is the injected chain lookup; see [`IndexCache::resolve`]
    /// for the caching and not-found semantics.
    pub async fn resolve_campaign_index<F, Fut, E>(
        &self,
        project_index: u64,
        now: DateTime<Utc>,
        fetch: F,
    ) -> Result<i64, E>
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = Result<i64, E>>,
    {
        self.index_cache.resolve(project_index, now, fetch).await
    }

    /// Invalidate the index cache, e.g. after creating a new campaign.
    pub fn reset_index_cache(&self) {
        self.index_cache.reset();
    }
}

impl Default for LifecycleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
