use crate::word_types::{SortOrder, WordCount};

/// Order words by frequency.
///
/// The sort is stable in both directions, so words with equal frequency stay
/// in the order they were first seen in the text.
pub fn sort_words(mut words: Vec<WordCount>, order: SortOrder) -> Vec<WordCount> {
    match order {
        SortOrder::Descending => words.sort_by(|a, b| b.frequency.cmp(&a.frequency)),
        SortOrder::Ascending => words.sort_by_key(|w| w.frequency),
    }
    words
}
