//! Letter-set encoding for puzzle words and queries.
//!
//! A letter set is stored as a 26-bit mask (bit 0 = 'A'), which makes the
//! order of letters irrelevant and collapses anagram-equivalent sets to one
//! value. The canonical string form is the letters in alphabetical order.

use crate::error::{PuzzleError, Result};
use std::fmt;

/// An unordered set of uppercase letters A-Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(pub u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1 << (letter as u8 - b'A'))
        } else {
            None
        }
    }

    /// Distinct letters of a dictionary word, or `None` if the word holds
    /// anything other than uppercase ASCII letters.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut mask = 0;
        for c in word.chars() {
            mask |= Self::bit(c)?;
        }
        Some(Self(mask))
    }

    /// Parse a query letter set such as `"DUNORCT"`.
    ///
    /// Duplicate letters are accepted and collapse; an empty string or any
    /// character outside A-Z is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let letters = Self::from_word(s).ok_or_else(|| PuzzleError::InvalidLetterSet {
            letters: s.to_string(),
            reason: "letters must be uppercase A-Z",
        })?;
        if letters.is_empty() {
            return Err(PuzzleError::InvalidLetterSet {
                letters: s.to_string(),
                reason: "letter set is empty",
            });
        }
        Ok(letters)
    }

    pub fn contains(self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every letter of `self` is also in `other`
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..26u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| (b'A' + i) as char)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Check that a prime letter is a single uppercase A-Z character.
pub fn validate_prime(letter: char) -> Result<char> {
    if letter.is_ascii_uppercase() {
        Ok(letter)
    } else {
        Err(PuzzleError::InvalidLetter {
            letter: letter.to_string(),
        })
    }
}

/// Parse a prime letter from text, e.g. a CLI argument.
pub fn parse_prime(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => validate_prime(c),
        _ => Err(PuzzleError::InvalidLetter {
            letter: s.to_string(),
        }),
    }
}

/// QueryCache key: the canonical letter set plus the prime letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleKey {
    pub letters: LetterSet,
    pub prime: char,
}

impl PuzzleKey {
    pub fn new(char_set: &str, prime: char) -> Result<Self> {
        Ok(Self {
            letters: LetterSet::parse(char_set)?,
            prime: validate_prime(prime)?,
        })
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.letters, self.prime)
    }
}
