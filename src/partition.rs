//! The result of a split.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::table::Direction;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Every branch was explored or pruned; the partition is optimal in its
    /// traversal frame.
    Exhausted,
    /// The configured node budget ran out; the partition is the best one
    /// recorded so far.
    NodeLimit,
    /// No search was needed (empty input, one part, or at most one element
    /// per part).
    Trivial,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search nodes entered, leaves included.
    pub nodes: u64,
    /// Complete candidates whose worst part was evaluated.
    pub leaves: u64,
    /// Times a boundary loop was cut short by the bound.
    pub prunes: u64,
    /// Times the recorded best was replaced.
    pub improvements: u64,
}

/// Boundaries of a contiguous partition plus what the search learned about it.
///
/// `boundaries()` is strictly increasing, starts at 0 and ends at the sequence
/// length; adjacent pairs delimit the parts. An empty sequence yields no
/// boundaries at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    boundaries: Vec<usize>,
    worst_part: u64,
    direction: Direction,
    termination: Termination,
    stats: SearchStats,
}

impl Partition {
    pub(crate) fn new(
        boundaries: Vec<usize>,
        worst_part: u64,
        direction: Direction,
        termination: Termination,
        stats: SearchStats,
    ) -> Self {
        debug_assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
        Self {
            boundaries,
            worst_part,
            direction,
            termination,
            stats,
        }
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn into_boundaries(self) -> Vec<usize> {
        self.boundaries
    }

    /// Number of parts, i.e. `boundaries().len() - 1` (0 for an empty input).
    pub fn num_parts(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.num_parts() == 0
    }

    /// Index ranges of the parts, left to right.
    pub fn parts(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.boundaries.windows(2).map(|w| w[0]..w[1])
    }

    /// Weight of the heaviest part.
    pub fn worst_part(&self) -> u64 {
        self.worst_part
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// True unless the search was cut short by a node budget.
    pub fn is_exhaustive(&self) -> bool {
        self.termination != Termination::NodeLimit
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
