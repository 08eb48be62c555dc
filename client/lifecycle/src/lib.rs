//! Fundraising lifecycle engine for the launchpad client.
//!
//! Derives a campaign's current phase from wall-clock time and its on-chain
//! schedule, gates investment by investor tier, computes progress and
//! funding-cap figures, and memoizes the project→campaign index lookup with
//! time-based invalidation.
//!
//! All classification is pure: `now` is an explicit parameter everywhere
//! and no global clock is ever consulted, so every result is deterministic
//! and testable. The only mutable state is the index cache, owned by the
//! [`LifecycleEngine`] instance that composes everything.
//!
//! Typical use goes through the facade:
//!
//! ```
//! use chrono::Utc;
//! use fundraising_lifecycle::{EngineConfig, InvestorTier, LifecycleEngine};
//!
//! # fn demo(campaign: &fundraising_lifecycle::Campaign) {
//! let engine = LifecycleEngine::new(EngineConfig::default());
//! let now = Utc::now();
//!
//! let info = engine.describe_campaign(campaign, now);
//! let open_to_me = engine.can_invest(campaign, now, InvestorTier(3));
//! let figures = engine.metrics(campaign);
//! # let _ = (info, open_to_me, figures);
//! # }
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod eligibility;
pub mod engine;
pub mod errors;
pub mod metrics;
pub mod phase;
pub mod types;

pub use cache::{IndexCache, DEFAULT_TTL_SECS};
pub use clock::{ResolvedSchedule, Window, YearMode};
pub use config::EngineConfig;
pub use engine::LifecycleEngine;
pub use errors::{EngineError, Result};
pub use metrics::{CampaignMetrics, FundingCaps};
pub use phase::{PhaseInfo, PhaseTraits};
pub use types::{Campaign, CampaignSchedule, ContractDate, InvestorTier, Phase, Project};
