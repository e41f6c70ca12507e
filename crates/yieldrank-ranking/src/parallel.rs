//! Candidate fan-out.
//!
//! Scoring is a pure per-candidate map, so a batch can be split across the
//! rayon pool without coordination. Results come back in input order either way.

use crate::config::RankingConfig;

/// Applies `score` to each candidate, on the rayon pool for large batches.
///
/// Runs sequentially unless the crate is built with `parallel` and
/// [`RankingConfig::should_parallelize`] accepts the batch size.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn maybe_parallel_map<T, U, F>(candidates: &[T], config: &RankingConfig, score: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(candidates.len()) {
            return candidates.par_iter().map(score).collect();
        }
    }

    candidates.iter().map(score).collect()
}
