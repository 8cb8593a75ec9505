//! Error types for loading a dictionary and querying the index.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a dictionary listing.
///
/// Every variant is fatal for the load: the indexes are only correct when
/// built from the complete listing, so no partial index is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The listing could not be opened or read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not split into a word and a definition.
    #[error("line {line}: record has no definition")]
    MissingDefinition { line: usize },

    /// A word contained something other than uppercase ASCII letters.
    #[error("line {line}: invalid word {word:?}")]
    InvalidWord { line: usize, word: String },

    /// A parsed entry handed to the index holds an invalid word.
    /// `record` is the 1-based position of the entry in its sequence.
    #[error("record {record}: invalid word {word:?}")]
    InvalidEntry { record: usize, word: String },
}

/// Errors returned by [`PuzzleIndex`](crate::PuzzleIndex) operations.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Definition lookup for a word that is not in the dictionary.
    #[error("word not found: {word}")]
    NotFound { word: String },

    /// No letter set admits a pangram, so there is nothing to pick from.
    #[error("no pangram letter sets in the index")]
    EmptyIndex,

    /// The prime letter is not a single uppercase A-Z character.
    #[error("invalid prime letter {letter:?}")]
    InvalidLetter { letter: String },

    /// The letter set cannot be used for the requested query.
    #[error("invalid letter set {letters:?}: {reason}")]
    InvalidLetterSet { letters: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
