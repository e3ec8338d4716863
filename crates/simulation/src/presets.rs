//! Named parameter bundles
//!
//! Static preset scenarios offered by the hosting dashboard. A resolved
//! preset is an ordinary [`SimulationParameters`]; the engine itself never
//! sees preset names.

use crate::params::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Built-in scenarios, ordered from cautious to aggressive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Conservative,
    Moderate,
    Optimistic,
    Bullish,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 4] = [
        Preset::Conservative,
        Preset::Moderate,
        Preset::Optimistic,
        Preset::Bullish,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Conservative => "Conservative",
            Preset::Moderate => "Moderate",
            Preset::Optimistic => "Optimistic",
            Preset::Bullish => "Bullish",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Preset> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Resolve to a full parameter set: the shared defaults with this
    /// scenario's overrides applied. Advanced smoothing fields keep their
    /// defaults in every scenario.
    pub fn parameters(&self) -> SimulationParameters {
        let base = SimulationParameters::default();
        match self {
            Preset::Conservative => SimulationParameters {
                initial_price: 0.0129,
                initial_tvl_millions: 25.0,
                base_emission_millions_per_year: 300.0,
                tvl_target_millions: 100.0,
                daily_volume_usd: 1_000_000.0,
                taker_fee_percent: 0.05,
                dynamic_emission: true,
                emission_to_market_percent: 50.0,
                ..base
            },
            Preset::Moderate => SimulationParameters {
                initial_price: 0.02,
                initial_tvl_millions: 25.0,
                base_emission_millions_per_year: 250.0,
                tvl_target_millions: 250.0,
                daily_volume_usd: 3_000_000.0,
                taker_fee_percent: 0.05,
                dynamic_emission: true,
                emission_to_market_percent: 40.0,
                ..base
            },
            Preset::Optimistic => SimulationParameters {
                initial_price: 0.0129,
                initial_tvl_millions: 25.0,
                base_emission_millions_per_year: 200.0,
                tvl_target_millions: 500.0,
                daily_volume_usd: 5_000_000.0,
                taker_fee_percent: 0.05,
                dynamic_emission: true,
                emission_to_market_percent: 50.0,
                ..base
            },
            Preset::Bullish => SimulationParameters {
                initial_price: 0.0129,
                initial_tvl_millions: 25.0,
                base_emission_millions_per_year: 150.0,
                tvl_target_millions: 1000.0,
                daily_volume_usd: 20_000_000.0,
                taker_fee_percent: 0.05,
                dynamic_emission: true,
                emission_to_market_percent: 50.0,
                ..base
            },
        }
    }
}
