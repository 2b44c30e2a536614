use once_cell::sync::Lazy;
use regex::{Matches, Regex};

/// Optional leading digits, then a letter or apostrophe, then any run of
/// letters, apostrophes and digits. ASCII only.
pub const WORD_PATTERN: &str = r"[0-9]*[a-zA-Z'][a-zA-Z'0-9]*";

// Compile once
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(WORD_PATTERN).unwrap());

/// Lazy iterator over the words of a text, in original case.
///
/// Matches are greedy and non-overlapping. Whitespace, newlines and any other
/// character outside the pattern only ever separate words.
pub struct Tokens<'a> {
    inner: Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

/// Detect the words in the given text. Call again to restart from the top.
pub fn words_in_text(text: &str) -> Tokens<'_> {
    Tokens {
        inner: WORD_REGEX.find_iter(text),
    }
}

/// True when `text` is exactly one word with nothing around it.
pub fn is_single_word(text: &str) -> bool {
    let mut words = words_in_text(text);
    matches!((words.next(), words.next()), (Some(word), None) if word.len() == text.len())
}
