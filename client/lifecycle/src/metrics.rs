//! Funding figures — progress, caps, and token allocation.
//!
//! These are pure display calculations over a [`Campaign`] record. Division
//! by zero is guarded the same way throughout: a zero denominator yields
//! `0.0`, never `NaN` or infinity.

use serde::Serialize;

use crate::types::Campaign;

/// Minimum and maximum funding targets derived from the campaign threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingCaps {
    pub min_cap: f64,
    pub max_cap: f64,
}

/// The full set of figures the facade reports for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMetrics {
    pub progress_percent: f64,
    pub min_cap: f64,
    pub max_cap: f64,
}

/// Funding progress as a percentage, clamped to `[0, 100]`.
///
/// A campaign with a zero funding target reports `0.0` — "no meaningful
/// progress" rather than a division artifact.
pub fn progress_percent(campaign: &Campaign) -> f64 {
    if campaign.required_funds == 0.0 {
        return 0.0;
    }
    (campaign.raised_funds / campaign.required_funds * 100.0).clamp(0.0, 100.0)
}

/// Min/max funding caps: `required_funds` ± `threshold` percentage points.
pub fn funding_caps(campaign: &Campaign) -> FundingCaps {
    let deviation = campaign.threshold / 100.0;
    FundingCaps {
        min_cap: campaign.required_funds * (1.0 - deviation),
        max_cap: campaign.required_funds * (1.0 + deviation),
    }
}

/// How many tokens `amount` of the raise currency buys at the campaign's
/// token price. Zero price yields `0.0`.
pub fn tokens_for_investment(campaign: &Campaign, amount: f64) -> f64 {
    if campaign.token_price == 0.0 {
        return 0.0;
    }
    amount / campaign.token_price
}
