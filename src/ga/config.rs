//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that controls a run. All checks happen
//! in [`GaConfig::validate`], which the runner calls before the first
//! generation.

use super::codec::Codec;
use super::operators::CrossoverKind;
use super::selection::Selection;
use super::types::Bounds;
use crate::error::ConfigError;

/// Configuration for the binary GA.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::{CrossoverKind, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.bits, 16);
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.crossover, CrossoverKind::TwoPoint);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{CrossoverKind, GaConfig};
///
/// let config = GaConfig::default()
///     .with_bits(24)
///     .with_population_size(50)
///     .with_crossover(CrossoverKind::OnePoint)
///     .with_tournament_size(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig", into = "RawConfig"))]
pub struct GaConfig {
    /// Search interval `[min, max]`.
    pub bounds: Bounds,

    /// Bits per chromosome. Controls decoding resolution.
    pub bits: usize,

    /// Number of individuals, constant across generations.
    pub population_size: usize,

    /// Exact number of generations to run. No early termination.
    pub generations: usize,

    /// Per-bit flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Crossover variant.
    pub crossover: CrossoverKind,

    /// Whether the top individuals are carried over unchanged.
    pub elitism_enabled: bool,

    /// Fraction of the population kept as elites (0.0–1.0).
    ///
    /// The elite count is `floor(elitism_rate × population_size)`.
    pub elitism_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Evaluate fitness on the rayon pool (requires the `parallel` feature).
    ///
    /// Results are identical to sequential evaluation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(-10.0, 10.0).expect("static bounds are ordered"),
            bits: 16,
            population_size: 10,
            generations: 100,
            mutation_rate: 0.01,
            crossover: CrossoverKind::TwoPoint,
            elitism_enabled: true,
            elitism_rate: 0.1,
            selection: Selection::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the search interval.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the bit precision.
    pub fn with_bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover variant.
    pub fn with_crossover(mut self, crossover: CrossoverKind) -> Self {
        self.crossover = crossover;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, enabled: bool) -> Self {
        self.elitism_enabled = enabled;
        self
    }

    /// Sets the elite fraction.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried into each generation.
    pub fn elite_count(&self) -> usize {
        if self.elitism_enabled {
            super::operators::elite_count(self.elitism_rate, self.population_size)
        } else {
            0
        }
    }

    /// Validates the configuration.
    ///
    /// Rates outside `[0, 1]` are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Codec::new(self.bounds, self.bits)?;
        self.crossover.validate(self.bits)?;
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("elitism_rate", self.elitism_rate)?;
        self.selection.validate(self.population_size)?;
        Ok(())
    }

    /// Builds the codec for this configuration.
    pub fn codec(&self) -> Result<Codec, ConfigError> {
        Codec::new(self.bounds, self.bits)
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::rate(name, value))
    }
}

/// Flat form of [`GaConfig`] used for (de)serialization.
///
/// The selection is stored as its name plus a separate `tournament_size`.
/// Names go through `FromStr`, so an unknown crossover or selection in a
/// config file surfaces as a [`ConfigError`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawConfig {
    bounds: Bounds,
    bits: usize,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    crossover: CrossoverKind,
    elitism_enabled: bool,
    elitism_rate: f64,
    selection: String,
    #[serde(default = "default_tournament_size")]
    tournament_size: usize,
    #[serde(default)]
    parallel: bool,
    #[serde(default)]
    seed: Option<u64>,
}

#[cfg(feature = "serde")]
fn default_tournament_size() -> usize {
    super::selection::DEFAULT_TOURNAMENT_SIZE
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for GaConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let selection = match raw.selection.parse::<Selection>()? {
            Selection::Tournament(_) => Selection::Tournament(raw.tournament_size),
        };
        let config = GaConfig {
            bounds: raw.bounds,
            bits: raw.bits,
            population_size: raw.population_size,
            generations: raw.generations,
            mutation_rate: raw.mutation_rate,
            crossover: raw.crossover,
            elitism_enabled: raw.elitism_enabled,
            elitism_rate: raw.elitism_rate,
            selection,
            parallel: raw.parallel,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "serde")]
impl From<GaConfig> for RawConfig {
    fn from(c: GaConfig) -> Self {
        RawConfig {
            bounds: c.bounds,
            bits: c.bits,
            population_size: c.population_size,
            generations: c.generations,
            mutation_rate: c.mutation_rate,
            crossover: c.crossover,
            elitism_enabled: c.elitism_enabled,
            elitism_rate: c.elitism_rate,
            selection: c.selection.to_string(),
            tournament_size: c.selection.tournament_size(),
            parallel: c.parallel,
            seed: c.seed,
        }
    }
}
