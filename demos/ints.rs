//! Example: balanced contiguous split of an integer sequence.
//!
//! Run with:
//! `cargo run --example ints`

use split_slice::Splitter;

fn main() {
    // Page counts of chapters, to be bound into three volumes of similar size.
    let pages: Vec<u64> = vec![3, 3, 5, 3, 4, 2];

    for greedy in [false, true] {
        let splitter = if greedy {
            Splitter::greedy(3)
        } else {
            Splitter::new(3)
        };
        let partition = splitter.split(&pages).expect("page counts fit in u64");

        println!(
            "{} split, thickest volume = {} pages",
            if greedy { "greedy" } else { "normal" },
            partition.worst_part()
        );
        for (i, range) in partition.parts().enumerate() {
            println!("  volume {}: chapters {:?} -> {:?}", i + 1, range, &pages[range.clone()]);
        }
        let stats = partition.stats();
        println!(
            "  searched {} nodes, {} leaves, {} prunes",
            stats.nodes, stats.leaves, stats.prunes
        );
    }
}
