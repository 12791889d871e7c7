//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a run through three phases:
//!
//! 1. **Initializing**: `population_size` chromosomes of uniform random bits.
//! 2. **Evolving**, exactly `generations` times: evaluate → elitism →
//!    selection → crossover → mutation → replace the population.
//! 3. **Finalizing**: evaluate the last population and decode its best
//!    individual.
//!
//! The reported answer is the best individual of the *final* population.
//! Elitism is the only mechanism that keeps a good solution from being lost
//! between generations.

use super::config::GaConfig;
use super::fitness::{Cubic, Evaluator};
use super::operators::{best_index, bit_flip_mutation, elitism};
use super::types::{Chromosome, Objective};
use crate::error::ConfigError;
use crate::random::create_rng;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Fitness summary of one evaluated population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Number of completed generations when this population was evaluated.
    pub generation: usize,

    /// Highest fitness in the population.
    pub best_fitness: f64,

    /// Mean fitness of the population.
    pub mean_fitness: f64,

    /// Elites carried from this population into the next one.
    pub elite_count: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population.
    pub best: Chromosome,

    /// Decoded value of `best`.
    pub best_x: f64,

    /// Objective value at `best_x`.
    pub best_f: f64,

    /// Fitness of `best` (`-best_f`).
    pub best_fitness: f64,

    /// Number of generations executed. Always equals the configured count.
    pub generations: usize,

    /// Seed the random source was created from.
    pub seed: u64,

    /// One entry per evaluated population: the initial one, then one after
    /// each generation (`generations + 1` entries).
    pub history: Vec<GenerationStats>,
}

/// Executes the binary GA.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.best_x >= -10.0 && result.best_x <= 10.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Minimizes `f(x) = x³ − 6x + 14` over the configured bounds.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found by [`GaConfig::validate`];
    /// no generation runs in that case.
    pub fn run(config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with(&Cubic, config)
    }

    /// Minimizes an arbitrary scalar objective over the configured bounds.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            bits = config.bits,
            population_size = config.population_size,
            generations = config.generations,
            crossover = %config.crossover,
        )
    )]
    pub fn run_with<O: Objective>(
        objective: &O,
        config: &GaConfig,
    ) -> Result<GaResult, ConfigError> {
        config.validate()?;
        let evaluator = Evaluator::new(config.codec()?, objective);

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        debug!(seed, "initializing population");

        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(config.bits, &mut rng))
            .collect();

        let mut history = Vec::with_capacity(config.generations + 1);

        for generation in 0..config.generations {
            let fitness = evaluator.evaluate_population(&population, config.parallel);
            let stats = summarize(generation, &fitness, config.elite_count());
            debug!(
                generation,
                best_fitness = stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                elite_count = stats.elite_count,
                "evolving"
            );
            history.push(stats);

            population = next_generation(config, &population, &fitness, &mut rng);
            debug_assert_eq!(population.len(), config.population_size);
        }

        let fitness = evaluator.evaluate_population(&population, config.parallel);
        history.push(summarize(config.generations, &fitness, config.elite_count()));

        let idx = best_index(&fitness);
        let best = population.swap_remove(idx);
        let best_x = evaluator.codec().decode(&best);
        let best_f = objective.value(best_x);

        info!(best_x, best_f, generations = config.generations, "run finished");

        Ok(GaResult {
            best,
            best_x,
            best_f,
            best_fitness: fitness[idx],
            generations: config.generations,
            seed,
            history,
        })
    }
}

/// Builds the next population from the current one.
///
/// Elites (if enabled) come first, in descending fitness order. The rest is
/// filled pair by pair: two tournament picks, crossover, independent
/// mutation of both children. When only one slot is left the second child
/// is dropped.
fn next_generation<R: Rng>(
    config: &GaConfig,
    population: &[Chromosome],
    fitness: &[f64],
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut next = Vec::with_capacity(config.population_size);
    if config.elitism_enabled {
        next.extend(elitism(population, fitness, config.elitism_rate));
    }

    while next.len() < config.population_size {
        let p1 = &population[config.selection.select(fitness, rng)];
        let p2 = &population[config.selection.select(fitness, rng)];

        let (c1, c2) = config.crossover.apply(p1, p2, rng);
        let c1 = bit_flip_mutation(&c1, config.mutation_rate, rng);
        let c2 = bit_flip_mutation(&c2, config.mutation_rate, rng);

        next.push(c1);
        if next.len() < config.population_size {
            next.push(c2);
        }
    }

    next
}

fn summarize(generation: usize, fitness: &[f64], elite_count: usize) -> GenerationStats {
    GenerationStats {
        generation,
        best_fitness: fitness[best_index(fitness)],
        mean_fitness: fitness.iter().sum::<f64>() / fitness.len() as f64,
        elite_count,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness::cubic;
    use crate::ga::{Bounds, CrossoverKind};

    fn reference_config(seed: u64) -> GaConfig {
        GaConfig::default().with_seed(seed)
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let a = GaRunner::run(&reference_config(42)).unwrap();
        let b = GaRunner::run(&reference_config(42)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_x.to_bits(), b.best_x.to_bits());
        assert_eq!(a.best_f.to_bits(), b.best_f.to_bits());
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_result_consistency() {
        let config = reference_config(7);
        let result = GaRunner::run(&config).unwrap();
        let codec = config.codec().unwrap();

        assert_eq!(result.best.len(), 16);
        assert_eq!(result.best_x, codec.decode(&result.best));
        assert_eq!(result.best_f, cubic(result.best_x));
        assert_eq!(result.best_fitness, -result.best_f);
        assert!((-10.0..=10.0).contains(&result.best_x));
        assert_eq!(result.seed, 7);
    }

    #[test]
    fn test_runs_exact_generation_count() {
        for generations in [0, 1, 5, 37] {
            let config = reference_config(1).with_generations(generations);
            let result = GaRunner::run(&config).unwrap();
            assert_eq!(result.generations, generations);
            assert_eq!(result.history.len(), generations + 1);
            for (i, stats) in result.history.iter().enumerate() {
                assert_eq!(stats.generation, i);
            }
        }
    }

    #[test]
    fn test_zero_generations_reports_initial_best() {
        let config = reference_config(3).with_generations(0);
        let result = GaRunner::run(&config).unwrap();

        let mut rng = create_rng(3);
        let initial: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(config.bits, &mut rng))
            .collect();
        let evaluator = Evaluator::new(config.codec().unwrap(), &Cubic);
        let fitness = evaluator.evaluate_population(&initial, false);
        assert_eq!(result.best, initial[best_index(&fitness)]);
    }

    #[test]
    fn test_elitism_never_regresses() {
        for seed in 0..20 {
            let result = GaRunner::run(&reference_config(seed)).unwrap();
            for w in result.history.windows(2) {
                assert!(
                    w[1].best_fitness >= w[0].best_fitness,
                    "seed {seed}: best fitness dropped from {} to {}",
                    w[0].best_fitness,
                    w[1].best_fitness
                );
            }
            assert_eq!(
                result.best_fitness,
                result.history.last().unwrap().best_fitness
            );
        }
    }

    #[test]
    fn test_population_size_invariant() {
        let mut rng = create_rng(5);
        for (size, elitism_rate) in [(10, 0.1), (11, 0.0), (7, 0.5), (2, 1.0), (9, 0.3)] {
            let config = GaConfig::default()
                .with_population_size(size)
                .with_elitism_rate(elitism_rate)
                .with_tournament_size(2);
            let evaluator = Evaluator::new(config.codec().unwrap(), &Cubic);

            let mut population: Vec<Chromosome> = (0..size)
                .map(|_| Chromosome::random(config.bits, &mut rng))
                .collect();
            for _ in 0..10 {
                let fitness = evaluator.evaluate_population(&population, false);
                population = next_generation(&config, &population, &fitness, &mut rng);
                assert_eq!(population.len(), size);
                assert!(population.iter().all(|c| c.len() == config.bits));
            }
        }
    }

    #[test]
    fn test_next_generation_starts_with_elites() {
        let mut rng = create_rng(8);
        let config = GaConfig::default().with_elitism_rate(0.3);
        let evaluator = Evaluator::new(config.codec().unwrap(), &Cubic);
        let population: Vec<Chromosome> = (0..10)
            .map(|_| Chromosome::random(16, &mut rng))
            .collect();
        let fitness = evaluator.evaluate_population(&population, false);

        let next = next_generation(&config, &population, &fitness, &mut rng);
        assert_eq!(next[..3], elitism(&population, &fitness, 0.3)[..]);
    }

    #[test]
    fn test_no_elitism_no_mutation_only_recombines() {
        // Without mutation every child bit comes from some parent at the same
        // position, so a column that is constant stays constant.
        let mut rng = create_rng(4);
        let config = GaConfig::default()
            .with_elitism(false)
            .with_mutation_rate(0.0)
            .with_crossover(CrossoverKind::OnePoint);
        let mut population: Vec<Chromosome> = (0..10)
            .map(|_| {
                let mut c = Chromosome::random(16, &mut rng).bits().to_vec();
                c[0] = true;
                Chromosome::from_bits(c)
            })
            .collect();
        let evaluator = Evaluator::new(config.codec().unwrap(), &Cubic);

        for _ in 0..20 {
            let fitness = evaluator.evaluate_population(&population, false);
            population = next_generation(&config, &population, &fitness, &mut rng);
        }
        assert!(population.iter().all(|c| c.bits()[0]));
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = GaConfig::default().with_bits(2);
        assert!(matches!(
            GaRunner::run(&config),
            Err(ConfigError::ChromosomeTooShort { .. })
        ));

        let config = GaConfig::default().with_population_size(1);
        assert_eq!(
            GaRunner::run(&config).unwrap_err(),
            ConfigError::PopulationTooSmall(1)
        );
    }

    #[test]
    fn test_parallel_flag_same_result() {
        let sequential = GaRunner::run(&reference_config(21)).unwrap();
        let parallel = GaRunner::run(&reference_config(21).with_parallel(true)).unwrap();
        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.history, parallel.history);
    }

    #[test]
    fn test_custom_objective_linear() {
        // f(x) = x is minimized at the lower bound; elitism keeps the best.
        let config = GaConfig::default()
            .with_bounds(Bounds::new(0.0, 1.0).unwrap())
            .with_bits(8)
            .with_population_size(30)
            .with_generations(60)
            .with_seed(11);
        let identity = |x: f64| x;
        let result = GaRunner::run_with(&identity, &config).unwrap();
        let first = result.history.first().unwrap().best_fitness;
        assert!(result.best_fitness >= first);
        assert_eq!(result.best_f, result.best_x);
    }

    #[test]
    fn test_unseeded_run_records_seed() {
        let config = GaConfig::default().with_generations(3);
        let result = GaRunner::run(&config).unwrap();
        let replay = GaRunner::run(&config.clone().with_seed(result.seed)).unwrap();
        assert_eq!(result.best, replay.best);
    }
}
