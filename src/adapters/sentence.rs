//! Wrapping a one-line sentence into a fixed number of lines.
//!
//! The sentence is split on single spaces and each word weighs its byte length
//! plus one for the separating space, so the widest line is as narrow as
//! possible. Runs of spaces produce empty words, which still cost one column.

use crate::error::SplitError;
use crate::table::Direction;
use crate::traits::MappedSlice;
use crate::Splitter;

/// Wrap `sentence` into `lines` lines joined by `\n`.
///
/// ```
/// use split_slice::adapters::sentence::wrap;
///
/// let text = "the sun shines blight on the old kentucky home";
/// assert_eq!(
///     wrap(text, 3, false).unwrap(),
///     "the sun shines\nblight on the\nold kentucky home"
/// );
/// ```
pub fn wrap(sentence: &str, lines: usize, greedy: bool) -> Result<String, SplitError> {
    Ok(wrap_lines(sentence, lines, greedy)?.join("\n"))
}

/// Like [`wrap`], returning the lines separately.
pub fn wrap_lines(sentence: &str, lines: usize, greedy: bool) -> Result<Vec<String>, SplitError> {
    let words: Vec<&str> = sentence.split(' ').collect();
    let source = MappedSlice::new(&words, |word: &&str| word.len() as u64 + 1);
    let splitter = Splitter::with_config(lines, Direction::from_greedy(greedy), None);
    let partition = splitter.split(&source)?;

    Ok(partition.parts().map(|r| words[r].join(" ")).collect())
}
