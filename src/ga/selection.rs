//! Parent selection.
//!
//! # Fitness direction
//!
//! Tournament selection here returns the sampled individual with the
//! **lowest** fitness. Elitism and the final best-individual choice, on the
//! other hand, prefer the **highest** fitness. Since fitness is `−f(x)`, the
//! tournament favours parents with large objective values. This asymmetry is
//! part of the algorithm's observable behaviour and is kept; flipping it
//! changes how runs converge.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::ConfigError;
use rand::seq::index;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Default number of contestants per tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Selection;
///
/// let sel: Selection = "tournament".parse().unwrap();
/// assert_eq!(sel, Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Sample `k` distinct individuals uniformly without replacement and
    /// return the one with the minimum fitness.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(DEFAULT_TOURNAMENT_SIZE)
    }
}

impl Selection {
    /// Selects a parent index given per-individual fitness values.
    ///
    /// # Panics
    /// Panics if the tournament size is zero or exceeds `fitness.len()`;
    /// [`GaConfig::validate`](super::GaConfig::validate) rules both out.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        match *self {
            Selection::Tournament(k) => tournament(fitness, k, rng),
        }
    }

    /// Number of individuals sampled per selection.
    pub fn tournament_size(&self) -> usize {
        match *self {
            Selection::Tournament(k) => k,
        }
    }

    pub(crate) fn validate(&self, population_size: usize) -> Result<(), ConfigError> {
        let size = self.tournament_size();
        if size == 0 || size > population_size {
            return Err(ConfigError::InvalidTournamentSize {
                size,
                population_size,
            });
        }
        Ok(())
    }
}

/// Tournament of `k` distinct contestants; the first minimum in sample order wins.
fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(
        k >= 1 && k <= fitness.len(),
        "tournament size {k} out of range for population of {}",
        fitness.len()
    );

    let mut contestants = index::sample(rng, fitness.len(), k).into_iter();
    let first = contestants.next().expect("k >= 1");
    contestants.fold(first, |best, idx| {
        if fitness[idx] < fitness[best] {
            idx
        } else {
            best
        }
    })
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Tournament(_) => f.write_str("tournament"),
        }
    }
}

impl FromStr for Selection {
    type Err = ConfigError;

    /// Parses a selection name. The tournament size is set to the default
    /// and can be changed with
    /// [`GaConfig::with_tournament_size`](super::GaConfig::with_tournament_size).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tournament" => Ok(Selection::default()),
            _ => Err(ConfigError::UnknownSelection(s.to_string())),
        }
    }
}
