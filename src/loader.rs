//! Dictionary listing parser.
//!
//! A listing starts with a fixed number of header lines, followed by one
//! record per line: `WORD<whitespace>Definition text...`.

use crate::error::LoadError;
use crate::letters::LetterSet;
use crate::DEFAULT_HEADER_LINES;
use std::fs;
use std::path::Path;

/// A (word, definition) record from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

/// How a listing is laid out
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Lines skipped at the top of the listing
    pub header_lines: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }
}

/// Split one record on its first whitespace run.
///
/// `line` is the 1-based position in the listing, used in errors.
pub fn parse_record(record: &str, line: usize) -> Result<Entry, LoadError> {
    let record = record.trim();
    let (word, definition) = record
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim_start()))
        .ok_or(LoadError::MissingDefinition { line })?;

    if definition.is_empty() {
        return Err(LoadError::MissingDefinition { line });
    }
    if LetterSet::from_word(word).is_none() {
        return Err(LoadError::InvalidWord {
            line,
            word: word.to_string(),
        });
    }

    Ok(Entry {
        word: word.to_string(),
        definition: definition.to_string(),
    })
}

/// Parse every record of an in-memory listing, stopping at the first
/// malformed one.
pub fn parse_listing(text: &str, config: &LoaderConfig) -> Result<Vec<Entry>, LoadError> {
    text.lines()
        .enumerate()
        .skip(config.header_lines)
        .map(|(i, record)| parse_record(record, i + 1))
        .collect()
}

/// Read and parse a listing from disk.
pub fn read_listing(path: &Path, config: &LoaderConfig) -> Result<Vec<Entry>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_listing(&text, config)
}
