//! Stratified sampling of tiles to bound audit volume and cost.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Samples up to `cap` items from one batch, without replacement, uniformly
/// at random. A `cap` of 0 disables sampling and returns the batch untouched.
///
/// Unseeded by default; pass `seed` for reproducible selections in tests or
/// repeatable audit runs.
#[must_use]
pub fn sample_batch<T>(mut items: Vec<T>, cap: usize, seed: Option<u64>) -> Vec<T> {
    if cap == 0 || items.len() <= cap {
        return items;
    }

    match seed {
        Some(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => items.shuffle(&mut rand::rng()),
    }
    items.truncate(cap);
    items
}
