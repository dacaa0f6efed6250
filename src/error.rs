//! Error types for the splitter.

/// Errors that can occur while preparing a split.
///
/// The search itself cannot fail once the prefix-sum table is built; the only
/// runtime failure is a sequence whose total weight does not fit in `u64`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// Accumulating the weight of element `index` overflowed `u64`.
    #[error("total weight overflows u64 at element {index}")]
    WeightOverflow { index: usize },
}
