//! # Types
//!
//! Chain record types consumed by the lifecycle engine, plus the phase and
//! tier enumerations derived from them.
//!
//! ## Design decisions
//!
//! ### Records are read-only
//!
//! [`Campaign`] and [`Project`] mirror what the chain gateway returns and are
//! never mutated here. Field names on the wire are camelCase; the serde
//! renames keep the structs aligned with the gateway payloads.
//!
//! ### Phase is derived, never stored
//!
//! [`Phase`] is a pure function of `(Campaign, now)` — see
//! [`crate::phase::classify`]. There is no persisted phase field and no
//! transition event anywhere; a campaign's phase is fully recomputable at
//! any instant.
//!
//! ### Date tuples stay raw
//!
//! Campaign dates are stored on chain as `(year, month, day, hour)` tuples
//! whose year field follows one of two conventions (offset from 2000, or a
//! full calendar year). [`ContractDate`] keeps the raw parts; resolving them
//! to instants requires an explicit [`crate::clock::YearMode`] so the
//! convention is never guessed from the data.

use serde::{Deserialize, Serialize};

/// A contract-native date: raw `(year, month, day, hour)` parts as stored
/// on chain, always interpreted as UTC.
///
/// The meaning of `year` depends on the record it came from — campaign
/// schedules store an offset from 2000, generic windows store the full
/// calendar year. See [`crate::clock::YearMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
}

impl ContractDate {
    pub fn new(year: u16, month: u8, day: u8, hour: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

/// The seven date points backing a campaign's phase windows: three
/// investment phases (half-open `[start, end)` each) and the listing
/// instant that opens token claims.
///
/// End ≥ start is trusted chain input and not enforced here; the classifier
/// tolerates malformed or overlapping windows through its priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSchedule {
    pub first_phase_start: ContractDate,
    pub first_phase_end: ContractDate,
    pub second_phase_start: ContractDate,
    pub second_phase_end: ContractDate,
    pub third_phase_start: ContractDate,
    pub third_phase_end: ContractDate,
    pub listing_start: ContractDate,
}

/// A fundraising campaign as read from the chain.
///
/// Funds figures are plain `f64` display values (the gateway already
/// denominates them); `threshold` is in percentage points, e.g. `10.0`
/// means the funding target may deviate ±10%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign index assigned by the contract.
    pub index: u64,
    /// Phase schedule; year parts follow the campaign convention.
    pub dates: CampaignSchedule,
    /// Price of one token in the raise currency.
    pub token_price: f64,
    /// Funding target.
    pub required_funds: f64,
    /// Funds raised so far.
    pub raised_funds: f64,
    /// Tokens sold so far.
    pub sold_amount: f64,
    /// Allowed deviation from `required_funds`, in percentage points.
    pub threshold: f64,
}

/// The parent project of a campaign, as far as this engine needs it.
///
/// `is_created_fundraising` is the chain-derived flag that a passed vote
/// actually spawned a campaign; while it is `false` the index lookup keeps
/// returning a negative value (see [`crate::cache::IndexCache`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub index: u64,
    pub is_created_fundraising: bool,
}

/// The mutually-exclusive time bucket a campaign occupies at an instant.
///
/// Exactly one phase holds for any `(Campaign, now)` pair; the ordering in
/// [`crate::phase::classify`] is the tie-break policy for overlapping or
/// malformed windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Before the first investment window opens.
    Upcoming,
    /// First investment window — open to every tier.
    Phase1,
    /// Second window — restricted to the top tiers.
    Phase2,
    /// Third window — open sale.
    Phase3,
    /// All investment windows passed, listing not reached yet.
    Closed,
    /// Listing reached; purchased tokens can be claimed.
    Claimable,
}

/// Investor rank, `0` (none) through `5` (highest).
///
/// Only consumed by the eligibility gate; tier assignment and persistence
/// live outside this engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct InvestorTier(pub u8);

impl InvestorTier {
    /// Untiered investor.
    pub const NONE: InvestorTier = InvestorTier(0);

    pub fn rank(self) -> u8 {
        self.0
    }
}
