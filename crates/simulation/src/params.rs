//! Simulation parameters and validation
//!
//! One immutable parameter record per run. Validation rejects anything that
//! would steer the recurrence into singular math (zero or negative base of a
//! fractional power, division by zero) before the loop starts.

use crate::errors::SimulationError;
use crate::types::UNITS_PER_MILLION;
use serde::{Deserialize, Serialize};

/// Economic inputs for one simulation run.
///
/// Supplied fully resolved by the hosting layer (form, preset, or config
/// file); the engine never mutates them. Serialized as camelCase for
/// interchange with the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Starting unit price in USD (> 0)
    pub initial_price: f64,
    /// Starting total value locked, millions of USD (> 0)
    pub initial_tvl_millions: f64,
    /// Annual emission budget, millions of token units (>= 0)
    pub base_emission_millions_per_year: f64,
    /// Target TVL, millions of USD (> 0)
    pub tvl_target_millions: f64,
    /// Assumed daily trading volume in USD (>= 0; strictly positive when
    /// dynamic emission is enabled)
    pub daily_volume_usd: f64,
    /// Fee rate applied to volume, percent (>= 0)
    pub taker_fee_percent: f64,
    /// Emission mode: dynamic scales the budget with TVL/activity progress,
    /// static distributes the base budget evenly
    pub dynamic_emission: bool,
    /// Share of emission released to market, percent (0-100)
    pub emission_to_market_percent: f64,
    /// Exponential-smoothing weight for dynamic emission (0-1)
    pub emission_smoothing: f64,
    /// Exponential-smoothing weight for price momentum (0-1)
    pub momentum_factor: f64,
    /// Damping weight for TVL adjustment (0-1)
    pub tvl_inertia: f64,
    /// Scales TVL into the effective market depth divisor (> 0)
    pub market_depth_factor: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_price: 0.0129,
            // Current TVL in millions
            initial_tvl_millions: 24.11,
            // 300 M units per year
            base_emission_millions_per_year: 300.0,
            tvl_target_millions: 100.0,
            // $500K daily volume
            daily_volume_usd: 500_000.0,
            taker_fee_percent: 0.1,
            dynamic_emission: false,
            emission_to_market_percent: 50.0,
            emission_smoothing: 0.8,
            momentum_factor: 0.3,
            tvl_inertia: 0.7,
            market_depth_factor: 0.5,
        }
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> SimulationError {
    SimulationError::InvalidParameter {
        name,
        value,
        reason,
    }
}

impl SimulationParameters {
    /// Annual emission budget in absolute token units.
    pub fn base_emission_units(&self) -> f64 {
        self.base_emission_millions_per_year * UNITS_PER_MILLION
    }

    /// Check every documented constraint, returning the first violation.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initial_price", self.initial_price),
            ("initial_tvl_millions", self.initial_tvl_millions),
            (
                "base_emission_millions_per_year",
                self.base_emission_millions_per_year,
            ),
            ("tvl_target_millions", self.tvl_target_millions),
            ("daily_volume_usd", self.daily_volume_usd),
            ("taker_fee_percent", self.taker_fee_percent),
            (
                "emission_to_market_percent",
                self.emission_to_market_percent,
            ),
            ("emission_smoothing", self.emission_smoothing),
            ("momentum_factor", self.momentum_factor),
            ("tvl_inertia", self.tvl_inertia),
            ("market_depth_factor", self.market_depth_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(name, value, "must be a finite number"));
            }
        }

        if self.initial_price <= 0.0 {
            return Err(invalid(
                "initial_price",
                self.initial_price,
                "must be positive",
            ));
        }
        if self.initial_tvl_millions <= 0.0 {
            return Err(invalid(
                "initial_tvl_millions",
                self.initial_tvl_millions,
                "must be positive",
            ));
        }
        if self.base_emission_millions_per_year < 0.0 {
            return Err(invalid(
                "base_emission_millions_per_year",
                self.base_emission_millions_per_year,
                "must not be negative",
            ));
        }
        if self.tvl_target_millions <= 0.0 {
            return Err(invalid(
                "tvl_target_millions",
                self.tvl_target_millions,
                "must be positive",
            ));
        }
        if self.daily_volume_usd < 0.0 {
            return Err(invalid(
                "daily_volume_usd",
                self.daily_volume_usd,
                "must not be negative",
            ));
        }
        if self.dynamic_emission && self.daily_volume_usd <= 0.0 {
            // activity_progress^-0.5 is singular at zero
            return Err(invalid(
                "daily_volume_usd",
                self.daily_volume_usd,
                "must be positive when dynamic emission is enabled",
            ));
        }
        if self.taker_fee_percent < 0.0 {
            return Err(invalid(
                "taker_fee_percent",
                self.taker_fee_percent,
                "must not be negative",
            ));
        }
        if !(0.0..=100.0).contains(&self.emission_to_market_percent) {
            return Err(invalid(
                "emission_to_market_percent",
                self.emission_to_market_percent,
                "must be between 0 and 100",
            ));
        }
        for (name, value) in [
            ("emission_smoothing", self.emission_smoothing),
            ("momentum_factor", self.momentum_factor),
            ("tvl_inertia", self.tvl_inertia),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(name, value, "must be between 0 and 1"));
            }
        }
        if self.market_depth_factor <= 0.0 {
            return Err(invalid(
                "market_depth_factor",
                self.market_depth_factor,
                "must be positive",
            ));
        }

        Ok(())
    }
}
