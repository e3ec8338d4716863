//! Derived aggregates over a completed run
//!
//! Pure read-only views the dashboard shows next to the raw series: headline
//! deltas, progress meters, and the running USD value of buyback/lock flows.

use crate::engine::ACTIVITY_BASELINE_VOLUME_USD;
use crate::params::SimulationParameters;
use crate::types::SimulationRun;
use serde::{Deserialize, Serialize};

/// Headline aggregates for a finished series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub final_price: f64,
    pub final_tvl_millions: f64,
    /// Price change over the year, percent (day 0 record vs last)
    pub price_change_percent: f64,
    /// TVL change over the year, percent
    pub tvl_change_percent: f64,
    /// Final TVL as a percentage of the configured target
    pub tvl_target_progress_percent: f64,
    /// Daily volume as a percentage of the activity baseline
    pub activity_percent: f64,
    /// Total token units bought back over the year
    pub total_buyback: f64,
    /// Total token units locked over the year
    pub total_locked: f64,
}

/// Running USD value of buyback and locked flows, each day valued at that
/// day's own price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeUsd {
    pub buyback_usd: f64,
    pub locked_usd: f64,
}

/// Compute the headline aggregates for a run.
pub fn summarize(run: &SimulationRun, params: &SimulationParameters) -> RunSummary {
    let first = run.first();
    let last = run.last();

    RunSummary {
        final_price: last.price,
        final_tvl_millions: last.tvl_millions,
        price_change_percent: (last.price - first.price) / first.price * 100.0,
        tvl_change_percent: (last.tvl_millions - first.tvl_millions) / first.tvl_millions * 100.0,
        tvl_target_progress_percent: last.tvl_millions / params.tvl_target_millions * 100.0,
        activity_percent: params.daily_volume_usd / ACTIVITY_BASELINE_VOLUME_USD * 100.0,
        total_buyback: last.cumulative_buyback,
        total_locked: last.cumulative_locked,
    }
}

/// The data table's USD columns: one entry per day, accumulating each day's
/// buyback/locked amount at that day's price.
pub fn cumulative_usd_series(run: &SimulationRun) -> Vec<CumulativeUsd> {
    let mut totals = CumulativeUsd::default();
    run.iter()
        .map(|record| {
            totals.buyback_usd += record.buyback_usd();
            totals.locked_usd += record.locked_usd();
            totals
        })
        .collect()
}
