//! Assorted helpers shared by the engine, the adapters and the tests.

/// Boundaries that put every element in its own part: `[0, 1, ..., n]`.
///
/// Used when there are at least as many parts requested as elements.
#[inline]
pub fn identity_boundaries(n: usize) -> Vec<usize> {
    (0..=n).collect()
}

/// Weight of the heaviest part delimited by `boundaries` over `weights`.
///
/// Returns 0 for fewer than two boundaries.
pub fn max_part_weight(weights: &[u64], boundaries: &[usize]) -> u64 {
    boundaries
        .windows(2)
        .map(|w| weights[w[0]..w[1]].iter().sum::<u64>())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{identity_boundaries, max_part_weight};

    #[test]
    fn identity_covers_every_index() {
        assert_eq!(identity_boundaries(0), vec![0]);
        assert_eq!(identity_boundaries(3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn max_part_weight_picks_heaviest() {
        let w = [3, 3, 5, 3, 4, 2];
        assert_eq!(max_part_weight(&w, &[0, 2, 4, 6]), 8);
        assert_eq!(max_part_weight(&w, &[0, 6]), 20);
        assert_eq!(max_part_weight(&w, &[0]), 0);
        assert_eq!(max_part_weight(&w, &[]), 0);
    }
}
