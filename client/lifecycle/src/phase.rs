//! Phase classification — one campaign, one instant, exactly one phase.
//!
//! [`classify`] is the only place in the crate that evaluates date windows.
//! Everything downstream (eligibility, descriptions, the facade) consumes
//! its result; re-deriving windows anywhere else is the duplication this
//! module exists to eliminate.
//!
//! The checks run in priority order and the first match wins. Campaigns can
//! arrive with overlapping or malformed windows, so the ordering is a
//! deliberate tie-break policy: an instant inside both the first and second
//! window classifies as [`Phase::Phase1`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::ResolvedSchedule;
use crate::types::Phase;

// ─────────────────────────────────────────────────────────
// Phase traits table
// ─────────────────────────────────────────────────────────

/// Static, per-phase facts: what the phase is called and what it permits.
///
/// This is a lookup table rather than recomputed logic so the invest/claim
/// flags can never drift from the phase enumeration. `can_invest` says the
/// phase accepts investments at all; whether a particular tier is admitted
/// is [`crate::eligibility::can_invest`]'s call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseTraits {
    pub label: &'static str,
    pub can_invest: bool,
    pub can_claim: bool,
    pub description: &'static str,
}

const UPCOMING: PhaseTraits = PhaseTraits {
    label: "Upcoming",
    can_invest: false,
    can_claim: false,
    description: "Fundraising has not started yet",
};

const PHASE_1: PhaseTraits = PhaseTraits {
    label: "Phase 1",
    can_invest: true,
    can_claim: false,
    description: "Open investment round for all tiers",
};

const PHASE_2: PhaseTraits = PhaseTraits {
    label: "Phase 2",
    can_invest: true,
    can_claim: false,
    description: "Priority round for tier 4 and tier 5 investors",
};

const PHASE_3: PhaseTraits = PhaseTraits {
    label: "Phase 3",
    can_invest: true,
    can_claim: false,
    description: "Open sale round",
};

const CLOSED: PhaseTraits = PhaseTraits {
    label: "Closed",
    can_invest: false,
    can_claim: false,
    description: "Fundraising ended; token listing has not started",
};

const CLAIMABLE: PhaseTraits = PhaseTraits {
    label: "Claimable",
    can_invest: false,
    can_claim: true,
    description: "Purchased tokens can be claimed",
};

impl Phase {
    /// Static facts for this phase.
    pub const fn traits(self) -> &'static PhaseTraits {
        match self {
            Phase::Upcoming => &UPCOMING,
            Phase::Phase1 => &PHASE_1,
            Phase::Phase2 => &PHASE_2,
            Phase::Phase3 => &PHASE_3,
            Phase::Closed => &CLOSED,
            Phase::Claimable => &CLAIMABLE,
        }
    }
}

// ─────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────

/// Classify `now` against a resolved schedule. First match wins.
pub fn classify(schedule: &ResolvedSchedule, now: DateTime<Utc>) -> Phase {
    if schedule.phase1.contains(now) {
        return Phase::Phase1;
    }
    if schedule.phase2.contains(now) {
        return Phase::Phase2;
    }
    if schedule.phase3.contains(now) {
        return Phase::Phase3;
    }
    if now < schedule.phase1.start {
        return Phase::Upcoming;
    }
    if now >= schedule.listing_start {
        return Phase::Claimable;
    }
    // The gap between the last investment window and listing.
    Phase::Closed
}

// ─────────────────────────────────────────────────────────
// Phase description
// ─────────────────────────────────────────────────────────

/// A classified phase together with its effective bounds on this campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseInfo {
    pub phase: Phase,
    pub label: &'static str,
    pub can_invest: bool,
    pub can_claim: bool,
    /// When the current phase began; `None` for [`Phase::Upcoming`], which
    /// has no lower bound.
    pub starts_at: Option<DateTime<Utc>>,
    /// When the current phase ends; `None` for [`Phase::Claimable`], which
    /// never does.
    pub ends_at: Option<DateTime<Utc>>,
    pub description: &'static str,
}

/// Classify and describe in one evaluation of `now`.
pub fn describe(schedule: &ResolvedSchedule, now: DateTime<Utc>) -> PhaseInfo {
    let phase = classify(schedule, now);
    let (starts_at, ends_at) = match phase {
        Phase::Upcoming => (None, Some(schedule.phase1.start)),
        Phase::Phase1 => (Some(schedule.phase1.start), Some(schedule.phase1.end)),
        Phase::Phase2 => (Some(schedule.phase2.start), Some(schedule.phase2.end)),
        Phase::Phase3 => (Some(schedule.phase3.start), Some(schedule.phase3.end)),
        Phase::Closed => (Some(schedule.phase3.end), Some(schedule.listing_start)),
        Phase::Claimable => (Some(schedule.listing_start), None),
    };
    let traits = phase.traits();

    PhaseInfo {
        phase,
        label: traits.label,
        can_invest: traits.can_invest,
        can_claim: traits.can_claim,
        starts_at,
        ends_at,
        description: traits.description,
    }
}
