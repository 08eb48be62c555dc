//! End-to-end facade scenarios: one engine, real campaign records, and a
//! single `now` per assertion.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

use fundraising_lifecycle::{
    Campaign, CampaignSchedule, ContractDate, EngineConfig, InvestorTier, LifecycleEngine, Phase,
    YearMode,
};

fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
}

/// Campaign with phase 1 on Jan 1-8 2025, phase 2 on Jan 8-10, phase 3 on
/// Jan 10-12, and listing on Feb 1. Years are stored as offsets from 2000.
fn campaign() -> Campaign {
    Campaign {
        index: 1,
        dates: CampaignSchedule {
            first_phase_start: ContractDate::new(25, 1, 1, 0),
            first_phase_end: ContractDate::new(25, 1, 8, 0),
            second_phase_start: ContractDate::new(25, 1, 8, 0),
            second_phase_end: ContractDate::new(25, 1, 10, 0),
            third_phase_start: ContractDate::new(25, 1, 10, 0),
            third_phase_end: ContractDate::new(25, 1, 12, 0),
            listing_start: ContractDate::new(25, 2, 1, 0),
        },
        token_price: 0.5,
        required_funds: 1000.0,
        raised_funds: 1500.0,
        sold_amount: 3000.0,
        threshold: 10.0,
    }
}

/// Same campaign but with degenerate (zero-length) second and third
/// windows, as chains sometimes hand out.
fn campaign_with_degenerate_late_phases() -> Campaign {
    let mut c = campaign();
    c.dates.second_phase_end = c.dates.second_phase_start;
    c.dates.third_phase_start = c.dates.second_phase_start;
    c.dates.third_phase_end = c.dates.second_phase_start;
    c
}

fn tiers() -> impl Iterator<Item = InvestorTier> {
    (0..=5).map(InvestorTier)
}

#[test]
fn campaign_walks_through_every_phase() {
    let engine = LifecycleEngine::default();
    let c = campaign();

    for (now, expected) in [
        (utc(2024, 12, 1, 0), Phase::Upcoming),
        (utc(2025, 1, 3, 0), Phase::Phase1),
        (utc(2025, 1, 9, 0), Phase::Phase2),
        (utc(2025, 1, 11, 0), Phase::Phase3),
        (utc(2025, 1, 20, 0), Phase::Closed),
        (utc(2025, 2, 1, 0), Phase::Claimable),
    ] {
        assert_eq!(engine.describe_campaign(&c, now).phase, expected, "at {now}");
    }
}

#[test]
fn gap_between_sale_and_listing_is_closed_for_everything() {
    let engine = LifecycleEngine::default();
    let c = campaign_with_degenerate_late_phases();
    let now = utc(2025, 1, 15, 0);

    let info = engine.describe_campaign(&c, now);
    assert_eq!(info.phase, Phase::Closed);
    assert!(!info.can_invest);
    assert!(!info.can_claim);
    for tier in tiers() {
        assert!(!engine.can_invest(&c, now, tier));
    }
}

#[test]
fn phase1_admits_all_tiers_phase2_only_the_top_two() {
    let engine = LifecycleEngine::default();
    let c = campaign();

    let during_phase1 = utc(2025, 1, 3, 0);
    for tier in tiers() {
        assert!(engine.can_invest(&c, during_phase1, tier), "tier {tier:?}");
    }

    let during_phase2 = utc(2025, 1, 9, 0);
    for tier in tiers() {
        assert_eq!(
            engine.can_invest(&c, during_phase2, tier),
            tier.rank() >= 4,
            "tier {tier:?}"
        );
    }
}

#[test]
fn claimable_campaign_rejects_investment_for_every_tier() {
    let engine = LifecycleEngine::default();
    let c = campaign();
    let now = utc(2025, 3, 1, 0);

    let info = engine.describe_campaign(&c, now);
    assert_eq!(info.phase, Phase::Claimable);
    assert!(info.can_claim);
    for tier in tiers() {
        assert!(!engine.can_invest(&c, now, tier));
    }
}

#[test]
fn metrics_report_clamped_progress_and_threshold_caps() {
    let engine = LifecycleEngine::default();
    let figures = engine.metrics(&campaign());

    // 1500 raised of 1000 required clamps to 100%.
    assert_eq!(figures.progress_percent, 100.0);
    // ±10% around the 1000 target.
    assert_eq!(figures.min_cap, 900.0);
    assert_eq!(figures.max_cap, 1100.0);
}

#[test]
fn full_year_mode_shifts_the_whole_schedule() {
    let engine = LifecycleEngine::new(EngineConfig {
        year_mode: YearMode::FullYear,
        ..EngineConfig::default()
    });
    let c = campaign();

    // Year 25 read literally puts the campaign two millennia in the past,
    // long after its listing date.
    let info = engine.describe_campaign(&c, utc(2025, 1, 3, 0));
    assert_eq!(info.phase, Phase::Claimable);
}

#[tokio::test]
async fn index_resolution_is_cached_within_the_ttl() {
    let engine = LifecycleEngine::default();
    let calls = AtomicUsize::new(0);
    let fetch = |_| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<i64, String>(4)
    };

    let t0 = utc(2025, 1, 1, 0);
    assert_eq!(engine.resolve_campaign_index(9, t0, fetch).await, Ok(4));
    assert_eq!(engine.resolve_campaign_index(9, t0, fetch).await, Ok(4));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn uncreated_campaign_is_retried_on_every_call() {
    let engine = LifecycleEngine::default();
    let calls = AtomicUsize::new(0);
    let fetch = |_| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<i64, String>(-1)
    };

    let t0 = utc(2025, 1, 1, 0);
    assert_eq!(engine.resolve_campaign_index(9, t0, fetch).await, Ok(-1));
    assert_eq!(engine.resolve_campaign_index(9, t0, fetch).await, Ok(-1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn cache_reset_invalidates_between_engines_calls() {
    let engine = LifecycleEngine::default();
    let calls = AtomicUsize::new(0);
    let fetch = |_| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<i64, String>(4)
    };

    let t0 = utc(2025, 1, 1, 0);
    assert_eq!(engine.resolve_campaign_index(9, t0, fetch).await, Ok(4));
    engine.reset_index_cache();
    assert_eq!(engine.resolve_campaign_index(9, t0, fetch).await, Ok(4));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn independent_engines_share_no_cache_state() {
    let first = LifecycleEngine::default();
    let second = LifecycleEngine::default();
    let calls = AtomicUsize::new(0);
    let fetch = |_| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<i64, String>(4)
    };

    let t0 = utc(2025, 1, 1, 0);
    assert_eq!(first.resolve_campaign_index(9, t0, fetch).await, Ok(4));
    assert_eq!(second.resolve_campaign_index(9, t0, fetch).await, Ok(4));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
