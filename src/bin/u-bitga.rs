use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_bitga::ga::{Bounds, CrossoverKind, GaConfig, GaRunner, Selection};

/// Minimizes f(x) = x^3 - 6x + 14 over a bounded interval with a binary GA.
///
/// Every flag overrides the matching field of `--config` (or of the built-in
/// defaults when no config file is given).
#[derive(Parser, Debug)]
#[command(name = "u-bitga")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lower bound of the search interval
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Upper bound of the search interval
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Bits per chromosome
    #[arg(short, long)]
    bits: Option<usize>,

    /// Population size
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Number of generations
    #[arg(short, long)]
    generations: Option<usize>,

    /// Per-bit mutation rate in [0, 1]
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Crossover variant (one-point, two-point)
    #[arg(long)]
    crossover: Option<String>,

    /// Disable elitism
    #[arg(long)]
    no_elitism: bool,

    /// Elite fraction in [0, 1]
    #[arg(long)]
    elitism_rate: Option<f64>,

    /// Selection method (tournament)
    #[arg(long)]
    selection: Option<String>,

    /// Contestants per tournament
    #[arg(long)]
    tournament_size: Option<usize>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate fitness in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Print per-generation statistics
    #[arg(long)]
    history: bool,
}

impl Cli {
    fn into_config(self) -> Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<GaConfig>(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GaConfig::default(),
        };

        if self.min.is_some() || self.max.is_some() {
            let min = self.min.unwrap_or(config.bounds.min());
            let max = self.max.unwrap_or(config.bounds.max());
            config = config.with_bounds(Bounds::new(min, max)?);
        }
        if let Some(bits) = self.bits {
            config = config.with_bits(bits);
        }
        if let Some(n) = self.population_size {
            config = config.with_population_size(n);
        }
        if let Some(n) = self.generations {
            config = config.with_generations(n);
        }
        if let Some(rate) = self.mutation_rate {
            config = config.with_mutation_rate(rate);
        }
        if let Some(name) = &self.crossover {
            config = config.with_crossover(name.parse::<CrossoverKind>()?);
        }
        if self.no_elitism {
            config = config.with_elitism(false);
        }
        if let Some(rate) = self.elitism_rate {
            config = config.with_elitism_rate(rate);
        }
        if let Some(name) = &self.selection {
            let Selection::Tournament(k) = config.selection;
            config = config.with_selection(match name.parse::<Selection>()? {
                Selection::Tournament(_) => Selection::Tournament(k),
            });
        }
        if let Some(k) = self.tournament_size {
            config = config.with_tournament_size(k);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.parallel {
            config = config.with_parallel(true);
        }
        if runs_sequentially_despite_flag(&config) {
            tracing::warn!("built without the `parallel` feature; fitness is evaluated sequentially");
        }

        config.validate()?;
        Ok(config)
    }
}

/// `parallel` was requested but this build has no rayon pool.
fn runs_sequentially_despite_flag(config: &GaConfig) -> bool {
    config.parallel && cfg!(not(feature = "parallel"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let show_history = cli.history;
    let config = cli.into_config()?;

    let result = GaRunner::run(&config)?;

    if show_history {
        for stats in &result.history {
            println!(
                "generation {:>4}: best f(x) = {:.6}, mean f(x) = {:.6}",
                stats.generation, -stats.best_fitness, -stats.mean_fitness
            );
        }
        println!("seed: {}", result.seed);
    }
    println!(
        "Melhor valor de x: {}, com f(x): {}",
        result.best_x, result.best_f
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_flag_reaches_config() {
        let cli = Cli::parse_from(["u-bitga", "--parallel", "--seed", "7"]);
        let config = cli.into_config().unwrap();
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
        assert_eq!(
            runs_sequentially_despite_flag(&config),
            cfg!(not(feature = "parallel"))
        );
    }

    #[test]
    fn test_no_fallback_without_flag() {
        let config = Cli::parse_from(["u-bitga"]).into_config().unwrap();
        assert!(!config.parallel);
        assert!(!runs_sequentially_despite_flag(&config));
    }

    #[test]
    fn test_unknown_crossover_flag_rejected() {
        let cli = Cli::parse_from(["u-bitga", "--crossover", "uniform"]);
        let err = cli.into_config().unwrap_err();
        assert!(err.to_string().contains("UnknownCrossover"), "{err}");
    }
}
