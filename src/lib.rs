//! Binary-encoded genetic algorithm for bounded scalar minimization.
//!
//! The crate searches `[min, max]` for the `x` minimizing
//! `f(x) = x³ − 6x + 14` (or any [`ga::Objective`]) with a classic
//! generational GA:
//!
//! - **Codec**: big-endian bit strings mapped linearly onto the interval
//! - **Selection**: tournament over distinct contestants
//! - **Crossover**: one-point or two-point
//! - **Mutation**: independent per-bit flip
//! - **Elitism**: top `floor(rate × n)` individuals carried over unchanged
//!
//! Every random draw comes from a single seedable generator owned by the
//! runner, so a seeded run is fully reproducible.
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner};
//!
//! let result = GaRunner::run(&GaConfig::default().with_seed(1)).unwrap();
//! println!("Melhor valor de x: {}, com f(x): {}", result.best_x, result.best_f);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::ConfigError;
