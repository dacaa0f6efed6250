//! Splitting slices of arbitrary items through a weight extractor.

use crate::error::SplitError;
use crate::table::Direction;
use crate::traits::MappedSlice;
use crate::Splitter;

/// Boundaries of the best `parts`-way split of `items`, weighing each item
/// with `weight_of`.
pub fn split_by<T, F>(
    items: &[T],
    weight_of: F,
    parts: usize,
    greedy: bool,
) -> Result<Vec<usize>, SplitError>
where
    F: Fn(&T) -> u64,
{
    let splitter = Splitter::with_config(parts, Direction::from_greedy(greedy), None);
    let source = MappedSlice::new(items, weight_of);
    Ok(splitter.split(&source)?.into_boundaries())
}

/// Like [`split_by`], returning the parts as sub-slices of `items`.
pub fn chunks_by<T, F>(
    items: &[T],
    weight_of: F,
    parts: usize,
    greedy: bool,
) -> Result<Vec<&[T]>, SplitError>
where
    F: Fn(&T) -> u64,
{
    let boundaries = split_by(items, weight_of, parts, greedy)?;
    Ok(boundaries.windows(2).map(|w| &items[w[0]..w[1]]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Job {
        name: &'static str,
        cost: u32,
    }

    fn jobs() -> Vec<Job> {
        [("a", 3), ("b", 3), ("c", 5), ("d", 3), ("e", 4), ("f", 2)]
            .into_iter()
            .map(|(name, cost)| Job { name, cost })
            .collect()
    }

    #[test]
    fn extractor_drives_the_split() {
        let jobs = jobs();
        let got = split_by(&jobs, |j| j.cost as u64, 3, false).unwrap();
        assert_eq!(got, vec![0, 2, 4, 6]);
    }

    #[test]
    fn chunks_borrow_the_items() {
        let jobs = jobs();
        let chunks = chunks_by(&jobs, |j| j.cost as u64, 2, false).unwrap();
        assert_eq!(chunks.len(), 2);
        let names: Vec<Vec<&str>> = chunks
            .iter()
            .map(|c| c.iter().map(|j| j.name).collect())
            .collect();
        assert_eq!(names, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn empty_items_give_no_chunks() {
        let none: Vec<Job> = Vec::new();
        assert!(chunks_by(&none, |j| j.cost as u64, 3, true).unwrap().is_empty());
    }
}
