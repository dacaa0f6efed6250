//! Splitting slices of unsigned integers by value.

use crate::error::SplitError;
use crate::table::Direction;
use crate::Splitter;

/// Boundaries of the best `parts`-way split of `values`.
///
/// Follows the degenerate rules of [`Splitter::split`]: an empty slice gives no
/// boundaries, `parts == 0` counts as one part and short slices get one element
/// per part.
pub fn split_ints(values: &[u64], parts: usize, greedy: bool) -> Result<Vec<usize>, SplitError> {
    let splitter = Splitter::with_config(parts, Direction::from_greedy(greedy), None);
    Ok(splitter.split(values)?.into_boundaries())
}

/// Like [`split_ints`], returning the parts as sub-slices of `values`.
pub fn split_ints_into_parts(
    values: &[u64],
    parts: usize,
    greedy: bool,
) -> Result<Vec<&[u64]>, SplitError> {
    let boundaries = split_ints(values, parts, greedy)?;
    Ok(boundaries.windows(2).map(|w| &values[w[0]..w[1]]).collect())
}
