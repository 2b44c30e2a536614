use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordFreqError;

/// A normalized word and how many times it occurs in the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Uppercased token, never empty
    pub content: String,
    /// Always >= 1
    pub frequency: u64,
}

impl WordCount {
    pub fn new(content: impl Into<String>, frequency: u64) -> Self {
        Self {
            content: content.into(),
            frequency,
        }
    }
}

/// Filtering conditions applied after aggregation.
///
/// Build it through [`FilterSpec::from_options`] (or the `parse_*` helpers in
/// `filter`) so the exclusion entries are already normalized and checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub minimum_frequency: Option<NonZeroU64>,
    pub excluded_words: BTreeSet<String>,
}

/// Direction of the frequency sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl FromStr for SortOrder {
    type Err = WordFreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" => Ok(SortOrder::Descending),
            "asc" => Ok(SortOrder::Ascending),
            other => Err(WordFreqError::InvalidSortOrder {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Descending => f.write_str("desc"),
            SortOrder::Ascending => f.write_str("asc"),
        }
    }
}

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = WordFreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(WordFreqError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_accepts_only_desc_and_asc() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        for bad in ["foo", "DESC", "", " asc", "descending"] {
            match bad.parse::<SortOrder>() {
                Err(WordFreqError::InvalidSortOrder { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidSortOrder for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn sort_order_round_trips_through_display() {
        for order in [SortOrder::Descending, SortOrder::Ascending] {
            assert_eq!(order.to_string().parse::<SortOrder>().unwrap(), order);
        }
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }

    #[test]
    fn output_format_rejects_unknown_names() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(WordFreqError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn word_count_serializes_with_field_names() {
        let json = serde_json::to_string(&WordCount::new("CAT", 2)).unwrap();
        assert_eq!(json, r#"{"content":"CAT","frequency":2}"#);
    }
}
