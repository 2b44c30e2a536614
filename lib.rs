//! Word frequency counting.
//!
//! Text goes through four steps: [`tokenizer`] extracts words, [`aggregate`]
//! counts them case-insensitively, [`filter`] drops words by minimum
//! frequency or exclusion list, and [`sort`] orders the rest by frequency.
//!
//! ```
//! use wordfreq::{FilterSpec, SortOrder, run};
//!
//! let spec = FilterSpec::from_options(Some("2"), None).unwrap();
//! let words = run("the cat sat on the mat the cat ran", &spec, SortOrder::Descending);
//! assert_eq!(words[0].content, "THE");
//! assert_eq!(words.len(), 2);
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod logging;
pub mod report;
pub mod sort;
pub mod source;
pub mod tokenizer;
pub mod word_types;

use std::collections::BTreeSet;
use std::num::NonZeroU64;

pub use error::{Result, WordFreqError};
pub use word_types::{FilterSpec, OutputFormat, SortOrder, WordCount};

/// Count, filter and sort the words of `text`.
pub fn run(text: &str, spec: &FilterSpec, order: SortOrder) -> Vec<WordCount> {
    let words = aggregate::count_words(tokenizer::words_in_text(text));
    sort::sort_words(spec.apply(words), order)
}

/// Chainable query over the words of a text.
///
/// ```
/// use wordfreq::{SortOrder, Words};
/// use wordfreq::filter::parse_exclude_list;
///
/// let rows = Words::from_text("a b b c c c")
///     .exclude(parse_exclude_list(Some("c")).unwrap())
///     .fetch(SortOrder::Ascending);
/// assert_eq!(rows.iter().map(|w| w.frequency).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Words {
    words: Vec<WordCount>,
    spec: FilterSpec,
}

impl Words {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: aggregate::count_words(tokenizer::words_in_text(text)),
            spec: FilterSpec::default(),
        }
    }

    /// Load and count a file; see [`source::load_text`].
    pub fn from_file(filename: &str) -> Result<Self> {
        Ok(Self::from_text(&source::load_text(filename)?))
    }

    /// Keep words seen at least `minimum` times. `None` leaves the bound unchanged.
    pub fn minimum(mut self, minimum: Option<NonZeroU64>) -> Self {
        if minimum.is_some() {
            self.spec.minimum_frequency = minimum;
        }
        self
    }

    /// Drop the given normalized words; adds to any earlier exclusions.
    pub fn exclude(mut self, excluded: BTreeSet<String>) -> Self {
        self.spec.excluded_words.extend(excluded);
        self
    }

    /// Apply a whole validated spec at once.
    pub fn filter(self, spec: FilterSpec) -> Self {
        self.minimum(spec.minimum_frequency).exclude(spec.excluded_words)
    }

    /// All distinct words before filtering, in first-seen order.
    pub fn all(&self) -> &[WordCount] {
        &self.words
    }

    pub fn fetch(self, order: SortOrder) -> Vec<WordCount> {
        sort::sort_words(self.spec.apply(self.words), order)
    }
}
