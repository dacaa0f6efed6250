//! Minimax contiguous partitioning (split-slice)
//!
//! This crate splits an ordered sequence of non-negative weights into a fixed
//! number of contiguous, non-empty parts so that the heaviest part is as light
//! as possible, and returns the boundary indices of that split.
//!
//! ## Core idea
//! 1. Describe your sequence through [`WeightSource`] (slices of unsigned
//!    integers work directly; closures and extractors are adapted by
//!    [`traits::from_fn`] and [`traits::MappedSlice`]).
//! 2. Configure a [`Splitter`] (directly or via [`SplitterBuilder`]).
//! 3. [`Splitter::split`] builds a prefix-sum table, runs a branch-and-bound
//!    search over boundary placements and returns a [`Partition`].
//!
//! The search prunes a boundary loop as soon as the part it grows weighs as
//! much as the best worst part seen so far, which keeps it fast in practice.
//!
//! ## Quick start
//! ```
//! use split_slice::Splitter;
//!
//! let weights: Vec<u64> = vec![5, 5, 5, 5, 5];
//! let partition = Splitter::new(3).split(&weights).unwrap();
//! assert_eq!(partition.boundaries(), &[0, 1, 3, 5]);
//! assert_eq!(partition.worst_part(), 10);
//!
//! // Greedy mode searches the reversed sequence, keeping the tail light.
//! let partition = Splitter::greedy(3).split(&weights).unwrap();
//! assert_eq!(partition.boundaries(), &[0, 2, 4, 5]);
//! ```
//!
//! ## Degenerate inputs
//! - An empty sequence yields an empty partition.
//! - Zero parts are treated as one part: `[0, n]`.
//! - With at least as many parts as elements, every element is its own part.
//!
//! ## Adapters
//! The [`adapters`] module holds ready-made front ends for integer slices,
//! arbitrary slices and sentence wrapping; [`batch`] splits many sequences at
//! once (in parallel with the `parallel` feature).

pub mod adapters;
pub mod batch;
pub mod builder;
pub mod engine;
pub mod error;
pub mod partition;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::SplitterBuilder;
pub use crate::engine::{partition, Splitter};
pub use crate::error::SplitError;
pub use crate::partition::{Partition, SearchStats, Termination};
pub use crate::table::Direction;
pub use crate::traits::WeightSource;
