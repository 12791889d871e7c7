//! Binary-to-real decoding.
//!
//! A chromosome of `bits` bits is read as a big-endian unsigned integer `v`
//! (first bit most significant) and mapped linearly onto `[min, max]`:
//!
//! ```text
//! precision = (max - min) / (2^bits - 1)
//! x         = min + v * precision
//! ```
//!
//! The all-zero chromosome decodes to `min`, the all-one chromosome to `max`,
//! and the map is monotonically non-decreasing in `v`.

use super::types::{Bounds, Chromosome};
use crate::error::ConfigError;

/// Largest supported bit precision. `2^bits - 1` must fit in a `u64`.
pub const MAX_BITS: usize = u64::BITS as usize;

/// Decoder for a fixed bit precision and search interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Codec {
    bounds: Bounds,
    bits: usize,
    max_value: u64,
    precision: f64,
}

impl Codec {
    /// Builds a codec, rejecting `bits == 0` and `bits > 64`.
    pub fn new(bounds: Bounds, bits: usize) -> Result<Self, ConfigError> {
        if bits == 0 {
            return Err(ConfigError::ZeroBits);
        }
        if bits > MAX_BITS {
            return Err(ConfigError::BitsOverflow {
                bits,
                max: MAX_BITS,
            });
        }
        let max_value = u64::MAX >> (MAX_BITS - bits);
        Ok(Self {
            bounds,
            bits,
            max_value,
            precision: bounds.span() / max_value as f64,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// `2^bits - 1`, the integer value of the all-one chromosome.
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Distance between two adjacent decodable values.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Reads the chromosome as a big-endian unsigned integer.
    pub fn to_integer(&self, chromosome: &Chromosome) -> u64 {
        debug_assert_eq!(chromosome.len(), self.bits, "chromosome length mismatch");
        chromosome
            .bits()
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    /// Maps the chromosome onto the search interval.
    pub fn decode(&self, chromosome: &Chromosome) -> f64 {
        self.bounds.min() + self.to_integer(chromosome) as f64 * self.precision
    }
}
