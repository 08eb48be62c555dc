//! Date normalization — contract date tuples to absolute UTC instants.
//!
//! The chain stores dates as `(year, month, day, hour)` parts with two year
//! conventions in circulation: campaign schedules store an offset from 2000,
//! while generic windows (e.g. voting deadlines) store the full calendar
//! year. [`YearMode`] makes the convention an explicit argument; nothing in
//! this module infers it from the data.
//!
//! Conversion is total. Out-of-range parts carry over arithmetically the way
//! calendar addition does (month 13 rolls into January of the next year,
//! hour 36 into noon of the next day); month/day parts below 1 are clamped
//! to 1, and anything chrono cannot represent collapses to the Unix epoch.
//! Validation of date parts is the caller's responsibility.
//!
//! Everything here is UTC. Local time is never read or written.

use chrono::{DateTime, Days, Duration, Months, NaiveDate, Utc};

use crate::types::{CampaignSchedule, ContractDate};

/// Year base added to campaign-record year offsets.
pub const CAMPAIGN_YEAR_BASE: i32 = 2000;

/// Which convention a record's year field follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearMode {
    /// The year field is an offset added to 2000 (campaign schedules).
    OffsetFrom2000,
    /// The year field is a full calendar year (generic date windows).
    FullYear,
}

/// Convert raw date parts to an absolute UTC instant under `mode`.
pub fn to_instant(date: &ContractDate, mode: YearMode) -> DateTime<Utc> {
    let year = match mode {
        YearMode::OffsetFrom2000 => CAMPAIGN_YEAR_BASE + i32::from(date.year),
        YearMode::FullYear => i32::from(date.year),
    };

    // Start from January 1st of the resolved year and add the remaining
    // parts, so out-of-range months/days/hours carry over instead of
    // failing construction.
    let months = u32::from(date.month.max(1) - 1);
    let days = u64::from(date.day.max(1) - 1);

    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.checked_add_months(Months::new(months)))
        .and_then(|d| d.checked_add_days(Days::new(days)))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .and_then(|dt| dt.checked_add_signed(Duration::hours(i64::from(date.hour))))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

impl ContractDate {
    /// Resolve this date tuple to an instant under the given [`YearMode`].
    pub fn instant(&self, mode: YearMode) -> DateTime<Utc> {
        to_instant(self, mode)
    }
}

/// A half-open `[start, end)` time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }
}

/// A campaign schedule with every date point resolved to a UTC instant.
///
/// This is the single evaluation of the schedule the rest of the engine
/// works from — the classifier and the phase descriptions never re-derive
/// instants on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSchedule {
    pub phase1: Window,
    pub phase2: Window,
    pub phase3: Window,
    pub listing_start: DateTime<Utc>,
}

/// Resolve all seven schedule points under one [`YearMode`].
pub fn resolve_schedule(schedule: &CampaignSchedule, mode: YearMode) -> ResolvedSchedule {
    ResolvedSchedule {
        phase1: Window {
            start: to_instant(&schedule.first_phase_start, mode),
            end: to_instant(&schedule.first_phase_end, mode),
        },
        phase2: Window {
            start: to_instant(&schedule.second_phase_start, mode),
            end: to_instant(&schedule.second_phase_end, mode),
        },
        phase3: Window {
            start: to_instant(&schedule.third_phase_start, mode),
            end: to_instant(&schedule.third_phase_end, mode),
        },
        listing_start: to_instant(&schedule.listing_start, mode),
    }
}
