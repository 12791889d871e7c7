//! Core data types: chromosomes, search bounds and the objective seam.
//!
//! A [`Chromosome`] is an immutable bit string. Operators in this crate never
//! modify a chromosome in place; they build new ones, so a population can be
//! replaced wholesale every generation without aliasing the previous one.

use crate::error::ConfigError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A fixed-length bit string encoding one candidate value.
///
/// The first bit is the most significant when the chromosome is read as an
/// unsigned integer (see [`codec`](super::codec)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Builds a chromosome of `len` bits, each drawn uniformly from {0, 1}.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// All-zero chromosome of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// All-one chromosome of length `len`.
    pub fn ones(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns a new chromosome with every bit inverted.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&b| !b).collect(),
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Error returned when parsing a chromosome from a string of `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("InvalidBit: expected '0' or '1', found {found:?} at position {position}")]
pub struct ParseChromosomeError {
    pub found: char,
    pub position: usize,
}

impl FromStr for Chromosome {
    type Err = ParseChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseChromosomeError { found, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

/// The closed search interval `[min, max]`.
///
/// Construction through [`Bounds::new`] guarantees `min < max` and that both
/// ends and the width `max - min` are finite. With the `serde` feature it
/// (de)serializes as a `[min, max]` pair and is validated on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        if !(max - min).is_finite() {
            return Err(ConfigError::BoundsSpanOverflow { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval, `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl TryFrom<(f64, f64)> for Bounds {
    type Error = ConfigError;

    fn try_from((min, max): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<Bounds> for (f64, f64) {
    fn from(b: Bounds) -> Self {
        (b.min, b.max)
    }
}

/// A scalar function to be minimized.
///
/// The GA converts the objective into a fitness score by negation, so the
/// implementation only needs to return the raw function value.
pub trait Objective: Send + Sync {
    fn value(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_chromosome_length() {
        let mut rng = create_rng(42);
        for len in [1, 2, 16, 64] {
            assert_eq!(Chromosome::random(len, &mut rng).len(), len);
        }
    }

    #[test]
    fn test_parse_and_display() {
        let c: Chromosome = "010011".parse().unwrap();
        assert_eq!(c.bits(), &[false, true, false, false, true, true]);
        assert_eq!(c.to_string(), "010011");
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        let err = "01x1".parse::<Chromosome>().unwrap_err();
        assert_eq!(err.found, 'x');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_complement() {
        let c: Chromosome = "1100".parse().unwrap();
        assert_eq!(c.complement().to_string(), "0011");
        assert_eq!(Chromosome::zeros(5).complement(), Chromosome::ones(5));
    }

    #[test]
    fn test_bounds_ordering() {
        assert!(Bounds::new(-10.0, 10.0).is_ok());
        assert_eq!(
            Bounds::new(1.0, 1.0),
            Err(ConfigError::InvalidBounds { min: 1.0, max: 1.0 })
        );
        assert!(matches!(
            Bounds::new(5.0, -5.0),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_bounds_non_finite() {
        assert!(matches!(
            Bounds::new(f64::NEG_INFINITY, 0.0),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
        assert!(matches!(
            Bounds::new(0.0, f64::NAN),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn test_bounds_span_overflow() {
        assert_eq!(
            Bounds::new(-1e308, 1e308),
            Err(ConfigError::BoundsSpanOverflow {
                min: -1e308,
                max: 1e308
            })
        );
        assert!(Bounds::new(f64::MIN, f64::MAX).is_err());

        let wide = Bounds::new(-1e307, 1e307).unwrap();
        assert!(wide.span().is_finite());
    }

    #[test]
    fn test_closure_objective() {
        let square = |x: f64| x * x;
        assert_eq!(square.value(3.0), 9.0);
    }
}
