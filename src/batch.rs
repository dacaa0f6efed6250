//! Splitting many independent sequences with one configuration.
//!
//! Every sequence gets its own search workspace, so with the `parallel`
//! feature the work is spread over rayon's pool. Results come back in input
//! order either way and are identical to splitting one by one.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::SplitError;
use crate::partition::Partition;
use crate::traits::WeightSource;
use crate::Splitter;

/// Split each of `sources` with `splitter`.
///
/// Stops at the first error in serial mode; in parallel mode the error of the
/// lowest-indexed failing source is reported.
#[cfg(not(feature = "parallel"))]
pub fn split_many<W>(splitter: &Splitter, sources: &[W]) -> Result<Vec<Partition>, SplitError>
where
    W: WeightSource,
{
    sources.iter().map(|s| splitter.split(s)).collect()
}

/// Split each of `sources` with `splitter`.
///
/// Stops at the first error in serial mode; in parallel mode the error of the
/// lowest-indexed failing source is reported.
#[cfg(feature = "parallel")]
pub fn split_many<W>(splitter: &Splitter, sources: &[W]) -> Result<Vec<Partition>, SplitError>
where
    W: WeightSource + Sync,
{
    let results: Vec<Result<Partition, SplitError>> =
        sources.par_iter().map(|s| splitter.split(s)).collect();
    results.into_iter().collect()
}

/// Wrap many sentences into `lines` lines each.
#[cfg(not(feature = "parallel"))]
pub fn wrap_many<S>(sentences: &[S], lines: usize, greedy: bool) -> Result<Vec<String>, SplitError>
where
    S: AsRef<str>,
{
    sentences
        .iter()
        .map(|s| crate::adapters::sentence::wrap(s.as_ref(), lines, greedy))
        .collect()
}

/// Wrap many sentences into `lines` lines each.
#[cfg(feature = "parallel")]
pub fn wrap_many<S>(sentences: &[S], lines: usize, greedy: bool) -> Result<Vec<String>, SplitError>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<String, SplitError>> = sentences
        .par_iter()
        .map(|s| crate::adapters::sentence::wrap(s.as_ref(), lines, greedy))
        .collect();
    results.into_iter().collect()
}
