//! Tokensim: deterministic tokenomics simulation
//!
//! Models a token economy (price, locked value, emission, buyback) over a
//! fixed one-year horizon with:
//! - Day-by-day coupled recurrence for emission, buyback/lock, price, TVL
//! - Static and dynamic (progress-scaled, smoothed) emission schedules
//! - Parameter validation up front, fail-fast on numeric anomalies
//! - Named preset scenarios and derived run summaries for display layers
//!
//! The engine is a pure function of its parameters: no I/O, no randomness,
//! no shared state between runs.

pub mod engine;
pub mod errors;
pub mod params;
pub mod presets;
pub mod summary;
pub mod types;

pub use engine::*;
pub use errors::*;
pub use params::*;
pub use presets::*;
pub use summary::*;
pub use types::*;

/// Module version for API introspection
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
