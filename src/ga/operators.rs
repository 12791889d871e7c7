//! Bit-string genetic operators.
//!
//! Every operator takes its inputs by reference and returns freshly built
//! chromosomes; no parent is modified.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: single cut, swap tails
//! - [`two_point_crossover`]: two cuts, swap the middle segment
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-bit flip
//!
//! # Elitism
//!
//! - [`elitism`]: carry the top `floor(rate × n)` individuals unchanged
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic Adaptive Systems"

use super::types::Chromosome;
use crate::error::ConfigError;
use rand::seq::index;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Crossover operators
// ============================================================================

/// Crossover variant used by the driver.
///
/// With the `serde` feature it (de)serializes as its name, parsed through
/// [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum CrossoverKind {
    /// See [`one_point_crossover`]. Needs chromosomes of at least 2 bits.
    OnePoint,
    /// See [`two_point_crossover`]. Needs chromosomes of at least 3 bits.
    #[default]
    TwoPoint,
}

impl CrossoverKind {
    /// Smallest chromosome length for which the cut points exist.
    pub fn min_length(self) -> usize {
        match self {
            CrossoverKind::OnePoint => 2,
            CrossoverKind::TwoPoint => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CrossoverKind::OnePoint => "one-point",
            CrossoverKind::TwoPoint => "two-point",
        }
    }

    /// Recombines two parents into two offspring.
    pub fn apply<R: Rng>(
        self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        match self {
            CrossoverKind::OnePoint => one_point_crossover(parent1, parent2, rng),
            CrossoverKind::TwoPoint => two_point_crossover(parent1, parent2, rng),
        }
    }

    pub(crate) fn validate(self, bits: usize) -> Result<(), ConfigError> {
        if bits < self.min_length() {
            return Err(ConfigError::ChromosomeTooShort {
                crossover: self.name(),
                required: self.min_length(),
                bits,
            });
        }
        Ok(())
    }
}

impl fmt::Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrossoverKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-point" | "one_point" | "onepoint" => Ok(CrossoverKind::OnePoint),
            "two-point" | "two_point" | "twopoint" => Ok(CrossoverKind::TwoPoint),
            _ => Err(ConfigError::UnknownCrossover(s.to_string())),
        }
    }
}

impl TryFrom<String> for CrossoverKind {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CrossoverKind> for String {
    fn from(kind: CrossoverKind) -> Self {
        kind.name().to_string()
    }
}

/// One-point crossover.
///
/// # Algorithm
///
/// 1. Draw `cut` uniformly in `[1, L-1]`
/// 2. `child1 = parent1[..cut] ++ parent2[cut..]`
/// 3. `child2 = parent2[..cut] ++ parent1[cut..]`
///
/// # Complexity
/// O(L) time and space
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 bits.
pub fn one_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "one-point crossover needs at least 2 bits");

    let cut = rng.random_range(1..n);
    (
        splice(parent1, parent2, cut, n),
        splice(parent2, parent1, cut, n),
    )
}

/// Two-point crossover.
///
/// # Algorithm
///
/// 1. Draw two distinct cuts in `[1, L-1]` and sort them as `c1 < c2`
/// 2. `child1 = parent1[..c1] ++ parent2[c1..c2] ++ parent1[c2..]`
/// 3. `child2 = parent2[..c1] ++ parent1[c1..c2] ++ parent2[c2..]`
///
/// # Complexity
/// O(L) time and space
///
/// # Panics
/// Panics if parents have different lengths or fewer than 3 bits.
pub fn two_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 3, "two-point crossover needs at least 3 bits");

    let (c1, c2) = distinct_cuts(n, rng);
    (
        splice(parent1, parent2, c1, c2),
        splice(parent2, parent1, c1, c2),
    )
}

/// `outer[..start] ++ inner[start..end] ++ outer[end..]`.
fn splice(outer: &Chromosome, inner: &Chromosome, start: usize, end: usize) -> Chromosome {
    let (outer, inner) = (outer.bits(), inner.bits());
    let mut bits = Vec::with_capacity(outer.len());
    bits.extend_from_slice(&outer[..start]);
    bits.extend_from_slice(&inner[start..end]);
    bits.extend_from_slice(&outer[end..]);
    Chromosome::from_bits(bits)
}

/// Two distinct cut points in `[1, n-1]`, returned in ascending order.
fn distinct_cuts<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n - 1, 2);
    let (a, b) = (picks.index(0) + 1, picks.index(1) + 1);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation.
///
/// Draws a fresh uniform `u ∈ [0, 1)` for every bit and flips the bit when
/// `u < rate`. A rate of 0 never flips; a rate of 1 flips every bit. One
/// random draw is consumed per bit regardless of the rate.
///
/// # Complexity
/// O(L)
pub fn bit_flip_mutation<R: Rng>(chromosome: &Chromosome, rate: f64, rng: &mut R) -> Chromosome {
    Chromosome::from_bits(
        chromosome
            .bits()
            .iter()
            .map(|&bit| {
                if rng.random::<f64>() < rate {
                    !bit
                } else {
                    bit
                }
            })
            .collect(),
    )
}

// ============================================================================
// Elitism
// ============================================================================

/// Number of elites for a population of `population_size` at `rate`.
pub fn elite_count(rate: f64, population_size: usize) -> usize {
    (rate * population_size as f64).floor() as usize
}

/// Indices of the `count` highest-fitness individuals, best first.
///
/// Ties keep the original index order.
pub fn elite_indices(fitness: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(Ordering::Equal)
    });
    order.truncate(count);
    order
}

/// Returns the top `floor(rate × n)` chromosomes by descending fitness.
///
/// # Panics
/// Panics if `population` and `fitness` differ in length.
pub fn elitism(population: &[Chromosome], fitness: &[f64], rate: f64) -> Vec<Chromosome> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "one fitness value per individual"
    );
    elite_indices(fitness, elite_count(rate, population.len()))
        .into_iter()
        .map(|i| population[i].clone())
        .collect()
}

/// Index of the highest fitness; the first occurrence wins on ties.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn best_index(fitness: &[f64]) -> usize {
    assert!(!fitness.is_empty(), "population must not be empty");
    (1..fitness.len()).fold(0, |best, i| {
        if fitness[i] > fitness[best] {
            i
        } else {
            best
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
