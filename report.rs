use std::io::Write;

use itertools::Itertools;

use crate::error::{Result, WordFreqError};
use crate::word_types::{OutputFormat, WordCount};

const HEADERS: [&str; 2] = ["Word", "Frequency"];

/// Render the words as a bordered two-column table.
///
/// ```text
/// +------+-----------+
/// | Word | Frequency |
/// +------+-----------+
/// | THE  |     3     |
/// +------+-----------+
/// ```
pub fn render_table(words: &[WordCount]) -> String {
    let rows: Vec<[String; 2]> = words
        .iter()
        .map(|w| [w.content.clone(), w.frequency.to_string()])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let border = format!("+{}+\n", widths.iter().map(|w| "-".repeat(w + 2)).join("+"));
    let line = |cells: [&str; 2]| {
        let inner = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {cell:^width$} "))
            .join("|");
        format!("|{inner}|\n")
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&line(HEADERS));
    out.push_str(&border);
    for [word, frequency] in &rows {
        out.push_str(&line([word.as_str(), frequency.as_str()]));
    }
    if !rows.is_empty() {
        out.push_str(&border);
    }
    out
}

/// `Word,Frequency` header plus one line per word. Words never contain commas
/// or quotes, so no escaping is needed.
pub fn render_csv(words: &[WordCount]) -> String {
    std::iter::once(HEADERS.join(","))
        .chain(words.iter().map(|w| format!("{},{}", w.content, w.frequency)))
        .map(|line| line + "\n")
        .collect()
}

pub fn render_json(words: &[WordCount]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(words)?;
    json.push('\n');
    Ok(json)
}

/// Write the report in the requested format.
pub fn print_report<W: Write>(
    out: &mut W,
    words: &[WordCount],
    format: OutputFormat,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Table => render_table(words),
        OutputFormat::Csv => render_csv(words),
        OutputFormat::Json => render_json(words)?,
    };
    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|source| WordFreqError::Write {
            target: "report".to_string(),
            source,
        })
}
