//! The puzzle index: dictionary, per-letter word index, pangram letter sets
//! and the query cache.
//!
//! The index is built once from a listing and is read-only afterwards; only
//! the query cache grows. Every query builds a fresh result from the
//! per-letter sets, so answering a puzzle never changes indexed data.

use crate::error::{LoadError, PuzzleError, Result};
use crate::letters::{LetterSet, PuzzleKey};
use crate::loader::{self, Entry, LoaderConfig};
use crate::{MAX_DISTINCT_LETTERS, MIN_WORD_LENGTH};
use rand::seq::IteratorRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// A dictionary word with its precomputed letter set
#[derive(Debug, Clone)]
struct Word {
    text: String,
    definition: String,
    letters: LetterSet,
}

/// Puzzle statistics for one pangram letter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSetSummary {
    pub letters: String,
    pub pangrams: usize,
    pub perfect_pangrams: usize,
    /// Number of valid words with each letter of the set as the prime letter
    pub words_per_prime: Vec<(char, usize)>,
}

impl LetterSetSummary {
    /// The prime letter that yields the most valid words
    pub fn richest_prime(&self) -> Option<(char, usize)> {
        self.words_per_prime
            .iter()
            .copied()
            .max_by_key(|&(c, count)| (count, std::cmp::Reverse(c)))
    }
}

fn slot(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

/// Build-once, query-many index over a Spelling Bee dictionary.
#[derive(Debug, Clone)]
pub struct PuzzleIndex {
    words: Vec<Word>,
    dictionary: HashMap<String, usize>,
    /// Word ids containing each letter, indexed by `letter - 'A'`
    letter_index: [BTreeSet<usize>; 26],
    /// Canonical (sorted) 7-letter strings admitting at least one pangram
    pangram_sets: BTreeSet<String>,
    cache: HashMap<PuzzleKey, Arc<BTreeSet<String>>>,
}

impl PuzzleIndex {
    /// Load a listing from disk with the default layout.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &LoaderConfig::default())
    }

    pub fn load_with(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let entries = loader::read_listing(path, config)?;
        debug!(path = %path.display(), records = entries.len(), "read dictionary listing");
        Ok(Self::from_entries(entries)?)
    }

    /// Build from an in-memory listing, header lines included.
    pub fn from_listing(text: &str, config: &LoaderConfig) -> Result<Self> {
        let entries = loader::parse_listing(text, config)?;
        Ok(Self::from_entries(entries)?)
    }

    /// Build the indexes from parsed records.
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] or with more than
    /// [`MAX_DISTINCT_LETTERS`] distinct letters are left out entirely.
    /// A repeated word keeps its last definition. A word holding anything
    /// other than uppercase A-Z fails the whole build.
    pub fn from_entries(
        entries: impl IntoIterator<Item = Entry>,
    ) -> std::result::Result<Self, LoadError> {
        let mut index = Self {
            words: Vec::new(),
            dictionary: HashMap::new(),
            letter_index: std::array::from_fn(|_| BTreeSet::new()),
            pangram_sets: BTreeSet::new(),
            cache: HashMap::new(),
        };
        let mut too_short = 0usize;
        let mut too_wide = 0usize;

        for (i, Entry { word, definition }) in entries.into_iter().enumerate() {
            let letters = LetterSet::from_word(&word).ok_or_else(|| LoadError::InvalidEntry {
                record: i + 1,
                word: word.clone(),
            })?;
            if word.len() < MIN_WORD_LENGTH {
                too_short += 1;
                continue;
            }
            if letters.len() > MAX_DISTINCT_LETTERS {
                too_wide += 1;
                continue;
            }

            if let Some(&id) = index.dictionary.get(&word) {
                index.words[id].definition = definition;
                continue;
            }

            if letters.len() == MAX_DISTINCT_LETTERS {
                index.pangram_sets.insert(letters.to_string());
            }
            let id = index.words.len();
            for c in letters.letters() {
                index.letter_index[slot(c)].insert(id);
            }
            index.dictionary.insert(word.clone(), id);
            index.words.push(Word {
                text: word,
                definition,
                letters,
            });
        }

        debug!(too_short, too_wide, "skipped dictionary records");
        info!(
            words = index.words.len(),
            letter_sets = index.pangram_sets.len(),
            "dictionary loaded"
        );
        Ok(index)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn letter_set_count(&self) -> usize {
        self.pangram_sets.len()
    }

    /// Pangram letter sets in alphabetical order
    pub fn letter_sets(&self) -> impl Iterator<Item = &str> {
        self.pangram_sets.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains_key(word)
    }

    /// Look up the definition of a dictionary word.
    pub fn definition(&self, word: &str) -> Result<&str> {
        self.dictionary
            .get(word)
            .map(|&id| self.words[id].definition.as_str())
            .ok_or_else(|| PuzzleError::NotFound {
                word: word.to_string(),
            })
    }

    /// Pick a random letter set that admits at least one pangram.
    pub fn pick_letter_set(&self) -> Result<String> {
        self.pick_letter_set_with(&mut rand::thread_rng())
    }

    /// Same as [`pick_letter_set`](Self::pick_letter_set) with a caller
    /// supplied generator, uniform over all pangram letter sets.
    pub fn pick_letter_set_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        self.pangram_sets
            .iter()
            .choose(rng)
            .cloned()
            .ok_or(PuzzleError::EmptyIndex)
    }

    /// Ids of words containing every letter of `letters`.
    fn pangram_ids(&self, letters: LetterSet) -> Vec<usize> {
        let mut sets = letters.letters().map(|c| &self.letter_index[slot(c)]);
        let first = match sets.next() {
            Some(first) => first,
            None => return Vec::new(),
        };
        let rest: Vec<&BTreeSet<usize>> = sets.collect();
        let ids: Vec<usize> = first
            .iter()
            .copied()
            .filter(|id| rest.iter().all(|set| set.contains(id)))
            .collect();
        trace!(
            letters = %letters,
            candidates = first.len(),
            matches = ids.len(),
            "pangram intersection"
        );
        ids
    }

    /// All words using every letter of `char_set`.
    ///
    /// With `perfect`, only words whose length equals the length of
    /// `char_set` are kept, i.e. words using each letter exactly once. A
    /// perfect query therefore needs `char_set` to be free of duplicates.
    pub fn pangrams(&self, char_set: &str, perfect: bool) -> Result<BTreeSet<String>> {
        let letters = LetterSet::parse(char_set)?;
        if perfect && letters.len() != char_set.len() {
            return Err(PuzzleError::InvalidLetterSet {
                letters: char_set.to_string(),
                reason: "perfect pangrams need distinct letters",
            });
        }

        Ok(self
            .pangram_ids(letters)
            .into_iter()
            .map(|id| &self.words[id].text)
            .filter(|word| !perfect || word.len() == char_set.len())
            .cloned()
            .collect())
    }

    /// Words containing the prime letter whose letters all belong to the set.
    fn collect_valid_words(&self, key: &PuzzleKey) -> BTreeSet<String> {
        let candidates = &self.letter_index[slot(key.prime)];
        let words: BTreeSet<String> = candidates
            .iter()
            .map(|&id| &self.words[id])
            .filter(|word| word.letters.is_subset(key.letters))
            .map(|word| word.text.clone())
            .collect();
        trace!(key = %key, candidates = candidates.len(), valid = words.len(), "valid word scan");
        words
    }

    /// Every valid answer for a puzzle: words that contain `prime_letter`
    /// and use only letters from `char_set`.
    ///
    /// Results are cached per (letter set, prime letter). The cached set is
    /// shared and immutable, so repeated calls return the same contents.
    pub fn valid_words(
        &mut self,
        char_set: &str,
        prime_letter: char,
    ) -> Result<Arc<BTreeSet<String>>> {
        let key = PuzzleKey::new(char_set, prime_letter)?;
        if let Some(words) = self.cache.get(&key) {
            debug!(key = %key, "valid words cache hit");
            return Ok(Arc::clone(words));
        }

        debug!(key = %key, "valid words cache miss");
        let words = Arc::new(self.collect_valid_words(&key));
        self.cache.insert(key, Arc::clone(&words));
        Ok(words)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Summarize every pangram letter set, in alphabetical order.
    ///
    /// Runs in parallel and bypasses the query cache.
    pub fn survey(&self) -> Vec<LetterSetSummary> {
        let sets: Vec<&String> = self.pangram_sets.iter().collect();
        sets.par_iter()
            .filter_map(|text| LetterSet::from_word(text).map(|letters| (text, letters)))
            .map(|(text, letters)| {
                let ids = self.pangram_ids(letters);
                let perfect_pangrams = ids
                    .iter()
                    .filter(|&&id| self.words[id].text.len() == letters.len())
                    .count();
                let words_per_prime = letters
                    .letters()
                    .map(|prime| {
                        let key = PuzzleKey { letters, prime };
                        (prime, self.collect_valid_words(&key).len())
                    })
                    .collect();

                LetterSetSummary {
                    letters: (*text).clone(),
                    pangrams: ids.len(),
                    perfect_pangrams,
                    words_per_prime,
                }
            })
            .collect()
    }
}
