//! Run-scoped randomness.
//!
//! Every engine run draws from exactly one RNG. The engines are generic over
//! [`rand::Rng`] so tests can inject any source; the public `generate`
//! entry points build a [`StdRng`] here from an optional seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the RNG for one run.
///
/// With a seed the run is fully reproducible: the same seed and
/// configuration produce an identical grid. Without one, the RNG is seeded
/// from operating-system entropy.
pub fn for_run(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
