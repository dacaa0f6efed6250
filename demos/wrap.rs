//! Example: wrap a sentence into N lines of minimal width.
//!
//! Run with:
//! `cargo run --example wrap -- "some text to wrap" 3`

use std::env;

use split_slice::adapters::sentence::wrap;

fn main() {
    let mut args = env::args().skip(1);
    let sentence = args
        .next()
        .unwrap_or_else(|| "the sun shines blight on the old kentucky home".to_string());
    let lines: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    for greedy in [false, true] {
        let wrapped = wrap(&sentence, lines, greedy).expect("word widths fit in u64");
        println!("--- {} ---", if greedy { "greedy" } else { "normal" });
        println!("{wrapped}");
    }
}
