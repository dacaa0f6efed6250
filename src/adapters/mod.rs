//! Convenience adapters on top of [`Splitter`](crate::Splitter).
//!
//! Each adapter only supplies a weight source and reshapes the returned
//! boundaries:
//! - [`ints`]     : unsigned integers are their own weights.
//! - [`slice`]    : any slice plus a weight extractor.
//! - [`sentence`] : wrap a one-line sentence into a fixed number of lines.

pub mod ints;
pub mod sentence;
pub mod slice;
