use std::collections::HashMap;

use tracing::debug;

use crate::word_types::WordCount;

/// Count word frequencies, case-insensitively.
///
/// Each token is uppercased and counted; the result holds one entry per
/// distinct normalized word, in the order the word was first seen.
pub fn count_words<'a, I>(tokens: I) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words: Vec<WordCount> = Vec::new();
    // normalized word -> position in `words`
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for token in tokens {
        total += 1;
        let key = token.to_ascii_uppercase();
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&i) => words[i].frequency += 1,
            None => {
                index.insert(key.clone(), words.len());
                words.push(WordCount::new(key, 1));
            }
        }
    }

    debug!(tokens = total, distinct = words.len(), "aggregated word counts");
    words
}
