//! Option validation and the post-aggregation filter.
//!
//! Raw option strings are validated first and turned into a [`FilterSpec`];
//! the filter is then applied as a conjunction of plain predicates over
//! [`WordCount`].

use std::collections::BTreeSet;
use std::num::NonZeroU64;

use tracing::{debug, trace};

use crate::error::{Result, WordFreqError};
use crate::tokenizer::is_single_word;
use crate::word_types::{FilterSpec, WordCount};

/// A single filter condition. A word is kept when every predicate holds.
pub type Predicate = Box<dyn Fn(&WordCount) -> bool>;

/// Validate `--minimum`. Absent means no lower bound.
pub fn parse_minimum(raw: Option<&str>) -> Result<Option<NonZeroU64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(NonZeroU64::new)
        .map(Some)
        .ok_or_else(|| WordFreqError::InvalidMinimum {
            value: raw.to_string(),
        })
}

/// Validate and normalize `--exclude`.
///
/// The list is split on commas; pieces are trimmed, empty ones are dropped and
/// the rest uppercased. Every remaining piece must be exactly one word,
/// otherwise the whole list is rejected. An empty result means no exclusion.
pub fn parse_exclude_list(raw: Option<&str>) -> Result<BTreeSet<String>> {
    let Some(raw) = raw else {
        return Ok(BTreeSet::new());
    };
    let mut excluded = BTreeSet::new();
    for piece in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let word = piece.to_ascii_uppercase();
        if !is_single_word(&word) {
            return Err(WordFreqError::InvalidExcludeList { entry: word });
        }
        excluded.insert(word);
    }
    trace!(?excluded, "parsed exclude list");
    Ok(excluded)
}

impl FilterSpec {
    /// Build a spec from raw `--minimum` / `--exclude` values.
    pub fn from_options(minimum: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            minimum_frequency: parse_minimum(minimum)?,
            excluded_words: parse_exclude_list(exclude)?,
        })
    }

    /// The conditions this spec imposes; empty when nothing is filtered.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates: Vec<Predicate> = Vec::new();
        if let Some(minimum) = self.minimum_frequency {
            predicates.push(at_least(minimum));
        }
        if !self.excluded_words.is_empty() {
            predicates.push(not_in(self.excluded_words.clone()));
        }
        predicates
    }

    /// Keep the words that satisfy every predicate, preserving order.
    pub fn apply(&self, words: Vec<WordCount>) -> Vec<WordCount> {
        let predicates = self.predicates();
        if predicates.is_empty() {
            return words;
        }
        let before = words.len();
        let kept: Vec<WordCount> = words
            .into_iter()
            .filter(|word| predicates.iter().all(|keep| keep(word)))
            .collect();
        debug!(before, after = kept.len(), "filtered word counts");
        kept
    }
}

/// frequency >= minimum
pub fn at_least(minimum: NonZeroU64) -> Predicate {
    Box::new(move |word: &WordCount| word.frequency >= minimum.get())
}

/// content is not one of `excluded` (exact, already normalized)
pub fn not_in(excluded: BTreeSet<String>) -> Predicate {
    Box::new(move |word: &WordCount| !excluded.contains(&word.content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WordCount> {
        vec![
            WordCount::new("THE", 3),
            WordCount::new("CAT", 2),
            WordCount::new("CATS", 1),
            WordCount::new("SAT", 1),
        ]
    }

    fn contents(words: &[WordCount]) -> Vec<&str> {
        words.iter().map(|w| w.content.as_str()).collect()
    }

    #[test]
    fn minimum_must_be_positive() {
        assert_eq!(parse_minimum(None).unwrap(), None);
        assert_eq!(parse_minimum(Some("2")).unwrap(), NonZeroU64::new(2));
        assert_eq!(parse_minimum(Some(" 7 ")).unwrap(), NonZeroU64::new(7));
        for bad in ["0", "-1", "abc", "", "1.5"] {
            match parse_minimum(Some(bad)) {
                Err(WordFreqError::InvalidMinimum { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidMinimum for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn exclude_list_is_trimmed_and_uppercased() {
        let excluded = parse_exclude_list(Some(" the, Cat ,let's")).unwrap();
        let expected: BTreeSet<String> = ["THE", "CAT", "LET'S"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(excluded, expected);
    }

    #[test]
    fn exclude_list_forgives_empty_pieces() {
        assert!(parse_exclude_list(None).unwrap().is_empty());
        assert!(parse_exclude_list(Some("")).unwrap().is_empty());
        assert!(parse_exclude_list(Some(" , ,, ")).unwrap().is_empty());
        assert_eq!(parse_exclude_list(Some("a,,b,")).unwrap().len(), 2);
    }

    #[test]
    fn exclude_list_rejects_multi_word_entries() {
        match parse_exclude_list(Some("a,b c")) {
            Err(WordFreqError::InvalidExcludeList { entry }) => assert_eq!(entry, "B C"),
            other => panic!("expected InvalidExcludeList, got {other:?}"),
        }
        assert!(parse_exclude_list(Some("cat,42")).is_err());
        assert!(parse_exclude_list(Some("cat!")).is_err());
    }

    #[test]
    fn minimum_removes_exactly_lower_frequencies() {
        let spec = FilterSpec::from_options(Some("2"), None).unwrap();
        assert_eq!(contents(&spec.apply(sample())), vec!["THE", "CAT"]);
    }

    #[test]
    fn empty_spec_is_a_no_op() {
        let spec = FilterSpec::default();
        assert!(spec.predicates().is_empty());
        assert_eq!(spec.apply(sample()), sample());
    }

    #[test]
    fn exclusion_is_exact_match() {
        let spec = FilterSpec::from_options(None, Some("cat")).unwrap();
        assert_eq!(contents(&spec.apply(sample())), vec!["THE", "CATS", "SAT"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let spec = FilterSpec::from_options(Some("2"), Some("the")).unwrap();
        assert_eq!(spec.predicates().len(), 2);
        assert_eq!(contents(&spec.apply(sample())), vec!["CAT"]);
    }
}
