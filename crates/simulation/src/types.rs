//! Core types for the simulation engine
//!
//! Defines the day index, unit constants, the per-day output record, and the
//! immutable one-year run container consumed by display layers.

use serde::{Deserialize, Serialize};

/// Simulated day index, starting at 0
pub type DayIndex = u32;

/// Length of one simulated year, in days
pub const SIMULATION_DAYS: usize = 365;

/// Token units per "million" parameter unit
pub const UNITS_PER_MILLION: f64 = 1_000_000.0;

/// One simulated day, emitted after that day's price and TVL updates.
///
/// Token flows (`daily_*`, `cumulative_*`) are in absolute token units;
/// `price` is USD per unit and `tvl_millions` is millions of USD.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub day: DayIndex,
    pub price: f64,
    pub tvl_millions: f64,
    pub daily_emission_to_market: f64,
    pub daily_buyback: f64,
    pub daily_locked: f64,
    /// Running sum of `daily_buyback` since day 0
    pub cumulative_buyback: f64,
    /// Running sum of `daily_locked` since day 0
    pub cumulative_locked: f64,
}

impl DailyRecord {
    /// USD value of this day's market emission at this day's price
    pub fn emission_usd(&self) -> f64 {
        self.daily_emission_to_market * self.price
    }

    /// USD value of this day's buyback at this day's price
    pub fn buyback_usd(&self) -> f64 {
        self.daily_buyback * self.price
    }

    /// USD value of this day's locked amount at this day's price
    pub fn locked_usd(&self) -> f64 {
        self.daily_locked * self.price
    }
}

/// A completed simulation: exactly [`SIMULATION_DAYS`] records with
/// contiguous day indices, in order.
///
/// Produced in one call and never mutated afterward; a parameter change
/// means a fresh run that supersedes this one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationRun(Vec<DailyRecord>);

impl SimulationRun {
    /// Wrap a finished series. Callers guarantee the length invariant.
    pub(crate) fn new(records: Vec<DailyRecord>) -> Self {
        debug_assert_eq!(records.len(), SIMULATION_DAYS);
        Self(records)
    }

    /// The full series, day 0 first.
    pub fn records(&self) -> &[DailyRecord] {
        &self.0
    }

    /// Record for a specific day, if in range.
    pub fn day(&self, day: DayIndex) -> Option<&DailyRecord> {
        self.0.get(day as usize)
    }

    /// First simulated day.
    pub fn first(&self) -> &DailyRecord {
        &self.0[0]
    }

    /// Last simulated day.
    pub fn last(&self) -> &DailyRecord {
        &self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SimulationRun {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
