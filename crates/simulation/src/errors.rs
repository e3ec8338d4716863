use crate::types::DayIndex;
use thiserror::Error;

/// Errors surfaced by the simulation engine.
///
/// All failures are synchronous and reported before or instead of a result
/// series; the engine never returns a partially computed run.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A parameter violated its documented range. Detected before the loop
    /// starts, so the recurrence never sees singular math.
    #[error("invalid simulation parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An intermediate daily value became non-finite. Defensive: should not
    /// occur for validated input, but extreme combinations can overflow f64.
    #[error("non-finite {quantity} computed on day {day}")]
    NumericAnomaly {
        day: DayIndex,
        quantity: &'static str,
    },
}
