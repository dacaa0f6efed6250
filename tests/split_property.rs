use proptest::prelude::*;
use split_slice::{utils::max_part_weight, Splitter};

/// Minimum worst part over every choice of `parts - 1` inner boundaries.
fn brute_force_worst(weights: &[u64], parts: usize) -> u64 {
    fn go(weights: &[u64], start: usize, parts_left: usize, worst: u64, best: &mut u64) {
        let n = weights.len();
        if parts_left == 1 {
            let last: u64 = weights[start..].iter().sum();
            *best = (*best).min(worst.max(last));
            return;
        }
        for end in start + 1..=n - (parts_left - 1) {
            let part: u64 = weights[start..end].iter().sum();
            go(weights, end, parts_left - 1, worst.max(part), best);
        }
    }
    let mut best = u64::MAX;
    go(weights, 0, parts, 0, &mut best);
    best
}

fn well_formed(boundaries: &[usize], n: usize, parts: usize) -> bool {
    boundaries.len() == parts + 1
        && boundaries.first() == Some(&0)
        && boundaries.last() == Some(&n)
        && boundaries.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn single_element_last_part_is_reached() {
    for (weights, greedy) in [
        (vec![1u64, 7, 0, 0, 0], true),
        (vec![0, 0, 0, 1, 7], false),
        (vec![1, 1, 10], false),
        (vec![2, 2, 2, 9], true),
    ] {
        let splitter = if greedy { Splitter::greedy(2) } else { Splitter::new(2) };
        let p = splitter.split(&weights).unwrap();
        assert_eq!(p.worst_part(), brute_force_worst(&weights, 2), "{weights:?}");
    }
}

proptest! {
    #[test]
    fn boundaries_are_well_formed(
        weights in prop::collection::vec(0u64..20, 1..12),
        parts in 1usize..6,
        greedy in any::<bool>(),
    ) {
        let n = weights.len();
        prop_assume!(n > parts);
        let splitter = if greedy { Splitter::greedy(parts) } else { Splitter::new(parts) };
        let p = splitter.split(&weights).unwrap();
        prop_assert!(well_formed(p.boundaries(), n, parts));
        let covered: usize = p.parts().map(|r| r.len()).sum();
        prop_assert_eq!(covered, n);
        prop_assert_eq!(p.worst_part(), max_part_weight(&weights, p.boundaries()));
    }

    #[test]
    fn worst_part_is_optimal(
        weights in prop::collection::vec(0u64..15, 2..9),
        parts in 2usize..5,
        greedy in any::<bool>(),
    ) {
        prop_assume!(weights.len() > parts);
        let splitter = if greedy { Splitter::greedy(parts) } else { Splitter::new(parts) };
        let p = splitter.split(&weights).unwrap();
        prop_assert!(p.is_exhaustive());
        prop_assert_eq!(p.worst_part(), brute_force_worst(&weights, parts));
    }

    #[test]
    fn greedy_is_left_to_right_on_reversed_input(
        weights in prop::collection::vec(0u64..15, 2..10),
        parts in 1usize..5,
    ) {
        let n = weights.len();
        let reversed: Vec<u64> = weights.iter().rev().copied().collect();
        let greedy = Splitter::greedy(parts).split(&weights).unwrap();
        let mirrored = Splitter::new(parts).split(&reversed).unwrap();
        let mut mapped: Vec<usize> = mirrored.boundaries().iter().map(|b| n - b).collect();
        mapped.reverse();
        prop_assert_eq!(greedy.boundaries(), mapped.as_slice());
    }

    #[test]
    fn short_inputs_get_identity(
        weights in prop::collection::vec(0u64..50, 1..6),
        extra in 0usize..4,
        greedy in any::<bool>(),
    ) {
        let n = weights.len();
        let splitter = if greedy { Splitter::greedy(n + extra) } else { Splitter::new(n + extra) };
        let p = splitter.split(&weights).unwrap();
        let identity: Vec<usize> = (0..=n).collect();
        prop_assert_eq!(p.boundaries(), identity.as_slice());
    }
}
