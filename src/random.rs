//! Seedable random source shared by the GA driver and its operators.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic random number generator from a seed.
///
/// Two generators built from the same seed yield identical streams, which is
/// what makes a seeded GA run reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
