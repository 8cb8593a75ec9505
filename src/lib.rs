//! # Spelling Bee
//!
//! Generates and solves "Spelling Bee" letter puzzles from a word list.
//!
//! A dictionary listing is loaded once into a [`PuzzleIndex`], which keeps a
//! per-letter index of words and the set of 7-letter combinations that admit
//! at least one pangram. Queries are then set intersections over that index.

pub mod censor;
pub mod error;
pub mod index;
pub mod letters;
pub mod loader;

pub use censor::{answer_line, censor};
pub use error::{LoadError, PuzzleError, Result};
pub use index::{LetterSetSummary, PuzzleIndex};
pub use letters::{LetterSet, PuzzleKey};
pub use loader::{Entry, LoaderConfig};

/// Shortest word a puzzle accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Most distinct letters a puzzle word may use (the size of a letter set)
pub const MAX_DISTINCT_LETTERS: usize = 7;

/// Header/metadata lines at the top of a dictionary listing
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Where the CLI looks for the dictionary when none is given
pub const DEFAULT_DICTIONARY_PATH: &str = "Collins Scrabble Words (2019) with definitions.txt";
