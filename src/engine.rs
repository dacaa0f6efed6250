//! Branch-and-bound splitter.
//!
//! The search places the `k - 1` inner boundaries one at a time, moving each
//! boundary rightwards from just after the previous one. A part that already
//! weighs as much as the best worst part found so far can only grow as its
//! right boundary moves on, so the loop over that boundary stops there
//! (`break`, not `continue`). Complete candidates replace the recorded best
//! when their worst part is `<=` the best, which makes the result a pure
//! function of the input.
//!
//! The candidate buffer is filled from the high end: slot 0 always holds `n`,
//! slot `level` holds the left boundary of the part currently being grown and
//! a cursor per slot replaces recursion, so deep splits need no call stack.
//! Projection turns the best buffer into ascending boundaries and
//! undoes the reversal applied in greedy mode.

use std::ops::ControlFlow;

use crate::builder::SplitterBuilder;
use crate::error::SplitError;
use crate::partition::{Partition, SearchStats, Termination};
use crate::table::{Direction, PrefixSums};
use crate::traits::{from_fn, WeightSource};
use crate::utils::identity_boundaries;

/// Splits weighted sequences into a fixed number of contiguous parts so that
/// the heaviest part is as light as possible.
///
/// ```
/// use split_slice::Splitter;
///
/// let weights: Vec<u64> = vec![3, 3, 5, 3, 4, 2];
/// let partition = Splitter::new(3).split(&weights).unwrap();
/// assert_eq!(partition.boundaries(), &[0, 2, 4, 6]);
/// assert_eq!(partition.worst_part(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    parts: usize,
    direction: Direction,
    node_limit: Option<u64>,
}

impl Splitter {
    /// Splitter for `parts` parts, reading left to right, without a budget.
    ///
    /// `parts == 0` is treated as a single part.
    pub fn new(parts: usize) -> Self {
        Self::with_config(parts, Direction::LeftToRight, None)
    }

    /// Splitter that searches the reversed sequence ("greedy" mode).
    pub fn greedy(parts: usize) -> Self {
        Self::with_config(parts, Direction::RightToLeft, None)
    }

    /// Start a [`SplitterBuilder`].
    pub fn builder(parts: usize) -> SplitterBuilder {
        SplitterBuilder::new(parts)
    }

    pub(crate) fn with_config(parts: usize, direction: Direction, node_limit: Option<u64>) -> Self {
        Self {
            parts: parts.max(1),
            direction,
            node_limit,
        }
    }

    /// Number of parts requested (at least 1).
    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    /// Split `source`.
    ///
    /// - An empty sequence yields an empty partition.
    /// - With at least as many parts as elements every element gets its own
    ///   part: `[0, 1, ..., n]`.
    /// - Otherwise the result has exactly `parts + 1` boundaries.
    pub fn split<W>(&self, source: &W) -> Result<Partition, SplitError>
    where
        W: WeightSource + ?Sized,
    {
        let table = PrefixSums::build(source, self.direction)?;
        let n = table.len();

        if n == 0 {
            return Ok(self.trivial(Vec::new(), 0));
        }
        if n <= self.parts {
            let worst = (0..n).map(|i| table.range_sum(i, i + 1)).max().unwrap_or(0);
            return Ok(self.trivial(identity_boundaries(n), worst));
        }
        if self.parts == 1 {
            let total = table.total();
            return Ok(self.trivial(vec![0, n], total));
        }

        let span = tracing::trace_span!(
            "split_search",
            n,
            parts = self.parts,
            greedy = self.direction.is_greedy()
        );
        let _enter = span.enter();

        let mut state = SearchState::new(table, self.parts, self.node_limit);
        let termination = match state.search() {
            ControlFlow::Continue(()) => Termination::Exhausted,
            ControlFlow::Break(()) => {
                tracing::warn!(
                    limit = self.node_limit,
                    "node limit reached; returning best partition found so far"
                );
                Termination::NodeLimit
            }
        };

        let stats = state.stats;
        tracing::debug!(
            nodes = stats.nodes,
            leaves = stats.leaves,
            prunes = stats.prunes,
            improvements = stats.improvements,
            worst = state.best_worst,
            "split search finished"
        );

        let (boundaries, worst) = state.project();
        Ok(Partition::new(
            boundaries,
            worst,
            self.direction,
            termination,
            stats,
        ))
    }

    fn trivial(&self, boundaries: Vec<usize>, worst: u64) -> Partition {
        Partition::new(
            boundaries,
            worst,
            self.direction,
            Termination::Trivial,
            SearchStats::default(),
        )
    }
}

/// Split a sequence given by its length and a weight closure.
///
/// Returns the boundaries only; see [`Splitter::split`] for the full result.
pub fn partition<F>(n: usize, weight: F, parts: usize, greedy: bool) -> Result<Vec<usize>, SplitError>
where
    F: Fn(usize) -> u64,
{
    let splitter = Splitter::with_config(parts, Direction::from_greedy(greedy), None);
    Ok(splitter.split(&from_fn(n, weight))?.into_boundaries())
}

/// Per-call search workspace.
struct SearchState {
    table: PrefixSums,
    parts: usize,
    /// Boundaries being explored, highest slot first (`candidate[0] == n`).
    candidate: Vec<usize>,
    /// Best boundaries recorded so far, same layout as `candidate`.
    best: Vec<usize>,
    cursor: Vec<usize>,
    best_worst: u64,
    node_limit: Option<u64>,
    stats: SearchStats,
}

impl SearchState {
    fn new(table: PrefixSums, parts: usize, node_limit: Option<u64>) -> Self {
        let n = table.len();
        debug_assert!(parts >= 2 && n > parts);

        let mut candidate = vec![0; parts + 1];
        candidate[0] = n;

        // Leftmost candidate `0, 1, ..., parts - 1, n`. It is only returned
        // when every branch gets pruned, which means all candidates weigh the
        // total.
        let mut best = vec![0; parts + 1];
        best[0] = n;
        for (slot, b) in best.iter_mut().enumerate().skip(1) {
            *b = parts - slot;
        }

        Self {
            best_worst: table.total(),
            table,
            parts,
            candidate,
            best,
            cursor: vec![0; parts + 1],
            node_limit,
            stats: SearchStats::default(),
        }
    }

    /// Depth-first walk over every boundary placement.
    ///
    /// `cursor[level]` is the next right boundary to try for the part that
    /// starts at `candidate[level]`, so the walk needs no call stack and its
    /// depth is independent of `parts`.
    fn search(&mut self) -> ControlFlow<()> {
        let n = self.table.len();
        let mut level = self.parts;
        self.enter(level, 0)?;

        loop {
            let index = self.candidate[level];
            let next = self.cursor[level];
            // leave at least one element for each of the `level - 1` parts after this one
            let last = n - level + 1;

            if next <= last {
                if self.table.range_sum(index, next) < self.best_worst {
                    self.cursor[level] = next + 1;
                    if level == 2 {
                        self.close_last(next)?;
                    } else {
                        level -= 1;
                        self.enter(level, next)?;
                    }
                    continue;
                }
                // the part only grows from here
                self.stats.prunes += 1;
            }

            // level exhausted, back up one part
            if level == self.parts {
                return ControlFlow::Continue(());
            }
            level += 1;
        }
    }

    /// Count a node; `Break` once the budget is spent.
    fn visit(&mut self) -> ControlFlow<()> {
        self.stats.nodes += 1;
        if self.node_limit.is_some_and(|limit| self.stats.nodes > limit) {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn enter(&mut self, level: usize, index: usize) -> ControlFlow<()> {
        self.visit()?;
        self.candidate[level] = index;
        self.cursor[level] = index + 1;
        ControlFlow::Continue(())
    }

    /// Place the last part at `index..n` and evaluate the complete candidate.
    ///
    /// Every right boundary of the last part yields the same candidate, so it
    /// is evaluated once, under the bound its first boundary would face.
    fn close_last(&mut self, index: usize) -> ControlFlow<()> {
        self.visit()?;
        self.candidate[1] = index;
        if self.table.range_sum(index, index + 1) >= self.best_worst {
            self.stats.prunes += 1;
            return ControlFlow::Continue(());
        }

        self.visit()?;
        self.stats.leaves += 1;
        let worst = self.candidate_worst();
        if worst <= self.best_worst {
            self.record(worst);
        }
        ControlFlow::Continue(())
    }

    fn record(&mut self, worst: u64) {
        self.best_worst = worst;
        self.best.copy_from_slice(&self.candidate);
        self.stats.improvements += 1;
    }

    fn candidate_worst(&self) -> u64 {
        worst_of(&self.table, &self.candidate)
    }

    /// Ascending boundaries in the caller's frame, and their worst part.
    fn project(self) -> (Vec<usize>, u64) {
        debug_assert_eq!(self.best.len(), self.parts + 1);
        let worst = worst_of(&self.table, &self.best);
        let n = self.table.len();

        let mut boundaries = self.best;
        match self.table.direction() {
            Direction::LeftToRight => boundaries.reverse(),
            // slot 0 holds n and maps to 0, so the order is already ascending
            Direction::RightToLeft => boundaries.iter_mut().for_each(|b| *b = n - *b),
        }

        (boundaries, worst)
    }
}

/// Worst part of a high-slot-first boundary buffer.
fn worst_of(table: &PrefixSums, slots: &[usize]) -> u64 {
    slots
        .windows(2)
        .map(|w| table.range_sum(w[1], w[0]))
        .max()
        .unwrap_or(0)
}
