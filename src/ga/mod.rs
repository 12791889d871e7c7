//! Binary-encoded Genetic Algorithm.
//!
//! Searches a bounded interval for the real `x` minimizing a scalar
//! objective (by default `f(x) = x³ − 6x + 14`). Candidates are fixed-length
//! bit strings decoded linearly onto the interval.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters, builder setters and validation
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual of the final population plus per-generation statistics
//! - [`Codec`]: Bit string → real value mapping
//! - [`Evaluator`]: Codec + objective → fitness (`−f(x)`, higher is better)
//!
//! # Submodules
//!
//! - [`operators`]: One/two-point crossover, bit-flip mutation and elitism
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod codec;
mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use codec::{Codec, MAX_BITS};
pub use config::GaConfig;
pub use fitness::{cubic, Cubic, Evaluator};
pub use operators::CrossoverKind;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{Selection, DEFAULT_TOURNAMENT_SIZE};
pub use types::{Bounds, Chromosome, Objective, ParseChromosomeError};
