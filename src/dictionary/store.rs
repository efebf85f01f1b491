//! The immutable dictionary store backing phoneme resolution.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::dictionary::corpus::{self, CorpusLine};
use crate::error::{PhonolexError, Result};
use crate::phoneme::Phoneme;

/// Bucket key for headwords whose first character is not one of the 26
/// uppercase letters.
pub const BUCKET_SENTINEL: char = '!';

/// Load-time options for the dictionary store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Drop alternate-pronunciation lines while loading. This keeps the
    /// store smaller at the cost of losing variant pronunciations.
    pub compact: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig { compact: true }
    }
}

/// An indexed pronunciation dictionary.
///
/// Built once from a corpus and read-only afterwards, so it can be shared
/// freely (e.g. behind an `Arc`) without locking. Two views are maintained:
/// an exact headword index, and per-initial-letter buckets in corpus
/// insertion order for bounding the fuzzy candidate search.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    /// headword -> pronunciation; later corpus lines overwrite earlier ones.
    exact: AHashMap<String, Vec<Phoneme>>,
    /// first letter (or sentinel) -> headwords in insertion order.
    buckets: AHashMap<char, Vec<String>>,
}

impl DictionaryStore {
    /// Build a store from corpus lines already in memory.
    pub fn from_lines<I, S>(lines: I, config: &DictionaryConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = DictionaryStore {
            exact: AHashMap::new(),
            buckets: seeded_buckets(),
        };

        for line in lines {
            match corpus::parse_line(line.as_ref(), config.compact) {
                CorpusLine::Entry { headword, phonemes } => store.insert(headword, phonemes),
                CorpusLine::Malformed => {
                    debug!("skipping malformed corpus line: {:?}", line.as_ref());
                }
                CorpusLine::Comment | CorpusLine::Variant => {}
            }
        }

        store
    }

    /// Load a store from a corpus file.
    ///
    /// Any failure to open or read the file is fatal; no partial store is
    /// produced.
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: &DictionaryConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PhonolexError::corpus_unavailable(path, e))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| PhonolexError::corpus_unavailable(path, e))?;
            lines.push(line);
        }

        Ok(Self::from_lines(lines, config))
    }

    fn insert(&mut self, headword: String, phonemes: Vec<Phoneme>) {
        let key = Self::bucket_key(headword.chars().next().unwrap_or(BUCKET_SENTINEL));
        self.buckets.entry(key).or_default().push(headword.clone());
        self.exact.insert(headword, phonemes);
    }

    /// Map a character onto its bucket key: an uppercase letter maps to
    /// itself, anything else to the sentinel bucket.
    pub fn bucket_key(c: char) -> char {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            upper
        } else {
            BUCKET_SENTINEL
        }
    }

    /// Case-insensitive exact lookup. `None` signals a miss, which is the
    /// normal trigger for fuzzy matching; it is not an error.
    pub fn lookup(&self, word: &str) -> Option<&[Phoneme]> {
        self.exact.get(&word.to_uppercase()).map(Vec::as_slice)
    }

    /// The candidate bucket for words starting with `first`. Never fails;
    /// characters outside A-Z resolve to the sentinel bucket.
    pub fn bucket(&self, first: char) -> &[String] {
        self.buckets
            .get(&Self::bucket_key(first))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct headwords in the exact index.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    /// Whether the exact index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Iterate over the headwords in the exact index (unordered).
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.exact.keys().map(String::as_str)
    }

    /// Bucket sizes sorted by key, sentinel bucket last.
    pub fn bucket_sizes(&self) -> Vec<(char, usize)> {
        let mut sizes: Vec<(char, usize)> = self
            .buckets
            .iter()
            .map(|(key, words)| (*key, words.len()))
            .collect();
        sizes.sort_by_key(|&(key, _)| (key == BUCKET_SENTINEL, key));
        sizes
    }
}

/// Every bucket starts out holding its own one-character key, so a bare
/// letter is always a trivial match candidate.
fn seeded_buckets() -> AHashMap<char, Vec<String>> {
    let mut buckets = AHashMap::new();
    for letter in 'A'..='Z' {
        buckets.insert(letter, vec![letter.to_string()]);
    }
    buckets.insert(BUCKET_SENTINEL, vec![BUCKET_SENTINEL.to_string()]);
    buckets
}
