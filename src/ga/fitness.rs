//! Objective function and fitness evaluation.
//!
//! The GA minimizes `f(x) = x³ − 6x + 14`. Fitness is the negated objective,
//! `fitness(c) = −f(decode(c))`, so that higher fitness is better throughout
//! elitism and the final best-individual choice.

use super::codec::Codec;
use super::types::{Chromosome, Objective};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `f(x) = x³ − 6x + 14`.
pub fn cubic(x: f64) -> f64 {
    x.powi(3) - 6.0 * x + 14.0
}

/// The fixed cubic objective as an [`Objective`] value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubic;

impl Objective for Cubic {
    fn value(&self, x: f64) -> f64 {
        cubic(x)
    }
}

/// Composes a [`Codec`] with an [`Objective`] into a per-chromosome score.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a, O: Objective> {
    codec: Codec,
    objective: &'a O,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    pub fn new(codec: Codec, objective: &'a O) -> Self {
        Self { codec, objective }
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Objective value at the decoded point.
    pub fn objective(&self, chromosome: &Chromosome) -> f64 {
        self.objective.value(self.codec.decode(chromosome))
    }

    /// `−f(decode(chromosome))`.
    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        -self.objective(chromosome)
    }

    /// Fitness of every individual, in population order.
    ///
    /// With the `parallel` feature and `parallel == true` the scores are
    /// computed on the rayon pool; the returned order is the same either way.
    pub fn evaluate_population(&self, population: &[Chromosome], parallel: bool) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                return population.par_iter().map(|c| self.fitness(c)).collect();
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        population.iter().map(|c| self.fitness(c)).collect()
    }
}
