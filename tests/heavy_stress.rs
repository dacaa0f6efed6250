#![cfg(feature = "heavy")]

use split_slice::{utils::max_part_weight, Splitter};

#[test]
fn large_uniform_sequence() {
    let weights: Vec<u64> = vec![7; 400];
    let p = Splitter::new(4).split(&weights).unwrap();
    assert!(p.is_exhaustive());
    assert_eq!(p.num_parts(), 4);
    assert_eq!(p.worst_part(), 7 * 100);
    assert_eq!(p.worst_part(), max_part_weight(&weights, p.boundaries()));
}

#[test]
fn long_sentence_wraps() {
    let sentence = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(6);
    let lines = split_slice::adapters::sentence::wrap_lines(sentence.trim_end(), 4, true).unwrap();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| !l.is_empty()));
}
