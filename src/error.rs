//! Configuration errors.
//!
//! Every failure the GA can report is detected by
//! [`GaConfig::validate`](crate::ga::GaConfig::validate) before the first
//! generation runs. Once a configuration validates, the evolutionary loop
//! cannot fail.

/// Errors raised while building or validating a GA configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("InvalidBounds: min must be smaller than max. min = {min}, max = {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("NonFiniteBounds: bounds must be finite. min = {min}, max = {max}")]
    NonFiniteBounds { min: f64, max: f64 },

    #[error("BoundsSpanOverflow: max - min is not finite. min = {min}, max = {max}")]
    BoundsSpanOverflow { min: f64, max: f64 },

    #[error("InvalidBits: bit precision must be at least 1")]
    ZeroBits,

    #[error("BitsOverflow: 2^bits - 1 does not fit in u64. bits = {bits}, max = {max}")]
    BitsOverflow { bits: usize, max: usize },

    #[error("ChromosomeTooShort: {crossover} crossover needs at least {required} bits, got {bits}")]
    ChromosomeTooShort {
        crossover: &'static str,
        required: usize,
        bits: usize,
    },

    #[error("PopulationTooSmall: population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("InvalidRate: {name} must lie in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("InvalidTournamentSize: tournament size must lie in [1, {population_size}], got {size}")]
    InvalidTournamentSize { size: usize, population_size: usize },

    #[error("UnknownCrossover: {0:?} (expected \"one-point\" or \"two-point\")")]
    UnknownCrossover(String),

    #[error("UnknownSelection: {0:?} (expected \"tournament\")")]
    UnknownSelection(String),
}

impl ConfigError {
    pub(crate) fn rate(name: &'static str, value: f64) -> Self {
        Self::InvalidRate { name, value }
    }
}
