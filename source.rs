use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use tracing::{debug, warn};

use crate::error::{Result, WordFreqError};

/// Find `filename` as given, then relative to the working directory.
/// Only regular files count.
pub fn resolve_path(filename: &str) -> Result<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if let Ok(cwd) = env::current_dir() {
        let relative = cwd.join(filename);
        if relative.is_file() {
            return Ok(relative);
        }
    }
    Err(WordFreqError::FileNotFound {
        path: filename.to_string(),
    })
}

/// Read the whole file into memory and decode it.
///
/// A byte order mark selects the encoding, UTF-8 otherwise. Malformed
/// sequences are replaced rather than rejected.
pub fn load_text(filename: &str) -> Result<String> {
    let path = resolve_path(filename)?;
    let bytes = fs::read(&path).map_err(|source| WordFreqError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let (text, encoding, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = encoding.name(),
            "replaced malformed byte sequences"
        );
    }
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.name(),
        "loaded source text"
    );
    Ok(text.into_owned())
}
