//! Prefix-sum table used by the search.
//!
//! `PrefixSums` stores the cumulative weights of a sequence in traversal order
//! so that any contiguous range sum is answered in O(1).

use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::traits::WeightSource;

/// Order in which the sequence is read while building the table.
///
/// `RightToLeft` is the "greedy" mode: the search runs on the reversed
/// sequence and the result is mapped back, which tends to leave the lighter
/// parts at the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Map the `greedy` flag of the convenience APIs to a direction.
    #[inline]
    pub fn from_greedy(greedy: bool) -> Self {
        if greedy {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    #[inline]
    pub fn is_greedy(self) -> bool {
        self == Direction::RightToLeft
    }
}

/// Cumulative weights `T[0..=n]` with `T[0] = 0` and `T[n]` the total.
#[derive(Debug, Clone)]
pub struct PrefixSums {
    totals: Vec<u64>,
    direction: Direction,
}

impl PrefixSums {
    /// Build the table for `source`, reading it in `direction`.
    pub fn build<W>(source: &W, direction: Direction) -> Result<Self, SplitError>
    where
        W: WeightSource + ?Sized,
    {
        let n = source.len();
        let mut totals = Vec::with_capacity(n + 1);
        totals.push(0u64);

        let mut total = 0u64;
        for p in 0..n {
            let index = match direction {
                Direction::LeftToRight => p,
                Direction::RightToLeft => n - 1 - p,
            };
            total = total
                .checked_add(source.weight(index))
                .ok_or(SplitError::WeightOverflow { index })?;
            totals.push(total);
        }

        Ok(Self { totals, direction })
    }

    /// Number of elements covered by the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.totals.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all weights.
    #[inline]
    pub fn total(&self) -> u64 {
        self.totals[self.len()]
    }

    /// Sum of the elements at traversal positions `[start, end)`.
    #[inline]
    pub fn range_sum(&self, start: usize, end: usize) -> u64 {
        debug_assert!(start <= end && end <= self.len());
        self.totals[end] - self.totals[start]
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::from_fn;

    #[test]
    fn forward_table_accumulates_in_order() {
        let weights: Vec<u64> = vec![3, 1, 4, 1, 5];
        let table = PrefixSums::build(&weights, Direction::LeftToRight).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 14);
        assert_eq!(table.range_sum(0, 1), 3);
        assert_eq!(table.range_sum(1, 3), 5);
        assert_eq!(table.range_sum(2, 2), 0);
    }

    #[test]
    fn reversed_table_reads_from_the_end() {
        let weights: Vec<u64> = vec![3, 1, 4, 1, 5];
        let table = PrefixSums::build(&weights, Direction::RightToLeft).unwrap();
        assert_eq!(table.total(), 14);
        assert_eq!(table.range_sum(0, 1), 5);
        assert_eq!(table.range_sum(0, 2), 6);
        assert_eq!(table.range_sum(4, 5), 3);
        assert!(table.direction().is_greedy());
    }

    #[test]
    fn empty_sequence_has_zero_total() {
        let weights: Vec<u64> = Vec::new();
        let table = PrefixSums::build(&weights, Direction::LeftToRight).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn overflow_is_reported_with_element_index() {
        let source = from_fn(3, |i| if i == 0 { 1 } else { u64::MAX });
        let err = PrefixSums::build(&source, Direction::LeftToRight).unwrap_err();
        assert_eq!(err, SplitError::WeightOverflow { index: 1 });

        let err = PrefixSums::build(&source, Direction::RightToLeft).unwrap_err();
        assert_eq!(err, SplitError::WeightOverflow { index: 1 });
    }

    #[test]
    fn greedy_flag_maps_to_direction() {
        assert_eq!(Direction::from_greedy(false), Direction::LeftToRight);
        assert_eq!(Direction::from_greedy(true), Direction::RightToLeft);
        assert_eq!(Direction::default(), Direction::LeftToRight);
    }
}
