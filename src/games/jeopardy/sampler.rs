//! Sampling without replacement.
//!
//! Boards are built by drawing a fixed number of distinct categories from the
//! server's category pool, then a fixed number of distinct clues from each
//! category's clue pool. Both draws go through [`sample_without_replacement`].

use rand::Rng;
use tracing::{instrument, trace};

/// Draws `k` distinct elements from `pool`, uniformly at random.
///
/// Returns `min(k, pool.len())` elements. When `k >= pool.len()` the result is
/// a random permutation of the whole pool. Elements are distinct by position:
/// a pool holding duplicate values may yield equal values, but never the same
/// slot twice. `pool` itself is left untouched.
///
/// Uses a partial Fisher-Yates shuffle over a copy of the pool, stopping after
/// `k` swaps.
#[instrument(skip(pool, rng), fields(pool_len = pool.len()))]
pub fn sample_without_replacement<T, R>(pool: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let take = k.min(pool.len());
    let mut items = pool.to_vec();

    for i in 0..take {
        let j = rng.gen_range(i..items.len());
        items.swap(i, j);
    }

    items.truncate(take);
    trace!(take, "Sampled without replacement");
    items
}

/// Same as [`sample_without_replacement`], using the thread-local RNG.
pub fn sample<T: Clone>(pool: &[T], k: usize) -> Vec<T> {
    sample_without_replacement(pool, k, &mut rand::thread_rng())
}
