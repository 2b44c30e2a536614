//! Errors raised while validating options, loading the source file and
//! rendering the report.

use std::io;

/// Every failure is a user-facing input problem; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum WordFreqError {
    #[error("file not found: {path} (checked as given and relative to the working directory)")]
    FileNotFound { path: String },

    #[error("invalid value for --minimum: {value:?} (should be a positive integer value)")]
    InvalidMinimum { value: String },

    #[error("invalid value for --exclude: {entry:?} is not a single word (should be a comma-separated list of words only)")]
    InvalidExcludeList { entry: String },

    #[error("invalid value for --order: {value:?} (sort order has to be either 'desc' or 'asc')")]
    InvalidSortOrder { value: String },

    #[error("invalid value for --format: {value:?} (expected 'table', 'json' or 'csv')")]
    InvalidFormat { value: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WordFreqError {
    /// Stable code logged next to the message.
    pub fn error_code(&self) -> &'static str {
        match self {
            WordFreqError::FileNotFound { .. } => "FILE_NOT_FOUND",
            WordFreqError::InvalidMinimum { .. } => "INVALID_MINIMUM",
            WordFreqError::InvalidExcludeList { .. } => "INVALID_EXCLUDE_LIST",
            WordFreqError::InvalidSortOrder { .. } => "INVALID_SORT_ORDER",
            WordFreqError::InvalidFormat { .. } => "INVALID_FORMAT",
            WordFreqError::Io { .. } => "IO_ERROR",
            WordFreqError::Write { .. } => "WRITE_ERROR",
            WordFreqError::Serialize(_) => "SERIALIZE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, WordFreqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_option() {
        let err = WordFreqError::InvalidMinimum { value: "-1".into() };
        assert!(err.to_string().contains("--minimum"));
        assert!(err.to_string().contains("-1"));

        let err = WordFreqError::InvalidExcludeList { entry: "B C".into() };
        assert!(err.to_string().contains("--exclude"));
        assert!(err.to_string().contains("B C"));

        let err = WordFreqError::InvalidSortOrder { value: "foo".into() };
        assert!(err.to_string().contains("--order"));
    }

    #[test]
    fn error_codes_are_distinct() {
        let errs = [
            WordFreqError::FileNotFound { path: "x".into() },
            WordFreqError::InvalidMinimum { value: "0".into() },
            WordFreqError::InvalidExcludeList { entry: "a b".into() },
            WordFreqError::InvalidSortOrder { value: "up".into() },
            WordFreqError::InvalidFormat { value: "xml".into() },
        ];
        let mut codes: Vec<_> = errs.iter().map(|e| e.error_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }
}
