//! Phoneme resolution orchestration.
//!
//! Ties the pieces together: exact dictionary lookup first, then fuzzy
//! spelling correction through a pluggable [`SpellingResolver`], then
//! rule-based transcription as the last resort. Also provides sentence
//! level resolution that keeps per-word phoneme grouping and tags
//! punctuation tokens so downstream players can skip them.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryStore;
use crate::fuzzy::{CandidateEntry, rank_candidates};
use crate::g2p::transcribe;
use crate::phoneme::Phoneme;

/// Outcome of a spelling resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Keep the original spelling (also the "declined to choose" outcome).
    Keep,
    /// Continue with this spelling instead.
    Use(String),
}

/// Capability for choosing among ranked spelling candidates.
///
/// The interactive "did you mean" UI implements this in the application;
/// automated policies below cover batch and test use. Implementations must
/// return either one of the listed spellings or [`Choice::Keep`], and must
/// not block indefinitely.
pub trait SpellingResolver {
    /// Choose one entry from a ranked candidate list.
    fn choose(&self, entries: &[CandidateEntry]) -> Choice;
}

/// Policy that always keeps the original spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChangePolicy;

impl SpellingResolver for NoChangePolicy {
    fn choose(&self, _entries: &[CandidateEntry]) -> Choice {
        Choice::Keep
    }
}

/// Policy that picks the closest real candidate, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestMatchPolicy;

impl SpellingResolver for BestMatchPolicy {
    fn choose(&self, entries: &[CandidateEntry]) -> Choice {
        // The list is distance-ascending, so the first match is the best.
        entries
            .iter()
            .find_map(|entry| match entry {
                CandidateEntry::Match(candidate) => Some(Choice::Use(candidate.headword.clone())),
                _ => None,
            })
            .unwrap_or(Choice::Keep)
    }
}

/// One resolved token of a larger text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedToken {
    /// A word with its resolved phoneme sequence.
    Word {
        /// The token as it appeared in the input.
        text: String,
        /// The resolved pronunciation; may be empty.
        phonemes: Vec<Phoneme>,
    },
    /// A punctuation run, passed through unresolved.
    Punctuation(String),
}

/// The orchestrator: resolves words to phoneme sequences.
///
/// Holds a shared immutable [`DictionaryStore`] and a [`SpellingResolver`]
/// policy. Resolution never fails; the worst case is an empty sequence for
/// input with no letters in it.
pub struct PhonemeResolver {
    store: Arc<DictionaryStore>,
    policy: Box<dyn SpellingResolver>,
}

impl PhonemeResolver {
    /// Create a resolver that keeps original spellings on lookup misses.
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self::with_policy(store, Box::new(NoChangePolicy))
    }

    /// Create a resolver with a custom spelling policy.
    pub fn with_policy(store: Arc<DictionaryStore>, policy: Box<dyn SpellingResolver>) -> Self {
        PhonemeResolver { store, policy }
    }

    /// The underlying dictionary store.
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Resolve a single word to its phoneme sequence.
    ///
    /// Exact lookup wins outright; on a miss the spelling policy gets a
    /// ranked candidate list and the chosen spelling is looked up again;
    /// if that also misses, the word is transcribed by rule.
    pub fn resolve(&self, raw: &str) -> Vec<Phoneme> {
        let word = raw.to_uppercase();
        if let Some(sequence) = self.store.lookup(&word) {
            return sequence.to_vec();
        }

        let corrected = self.correct_spelling(&word);
        if let Some(sequence) = self.store.lookup(&corrected) {
            return sequence.to_vec();
        }

        transcribe(&corrected)
    }

    /// Run the spelling policy over the word's candidate bucket and return
    /// the spelling to continue with, uppercased.
    fn correct_spelling(&self, word: &str) -> String {
        let Some(first) = word.chars().next() else {
            return word.to_string();
        };

        let entries = rank_candidates(word, self.store.bucket(first));
        match self.policy.choose(&entries) {
            Choice::Keep => word.to_string(),
            Choice::Use(spelling) => spelling.to_uppercase(),
        }
    }

    /// Resolve a whole text, preserving per-word grouping.
    ///
    /// Punctuation runs are split into their own tokens and passed through
    /// unresolved; everything else resolves as a word.
    pub fn resolve_text(&self, text: &str) -> Vec<ResolvedToken> {
        lazy_static! {
            static ref PUNCTUATION_RUN: Regex = Regex::new(r"([.,!?;:]+)").unwrap();
            static ref PUNCTUATION: Regex = Regex::new(r"[.,!?;:]").unwrap();
        }

        let padded = PUNCTUATION_RUN.replace_all(text, " $1 ");
        padded
            .split_whitespace()
            .map(|token| {
                if PUNCTUATION.is_match(token) {
                    ResolvedToken::Punctuation(token.to_string())
                } else {
                    ResolvedToken::Word {
                        text: token.to_string(),
                        phonemes: self.resolve(token),
                    }
                }
            })
            .collect()
    }
}

/// Render resolved tokens as text: phonemes within a word joined by `-`,
/// tokens separated by spaces, punctuation passed through as-is.
pub fn format_tokens(tokens: &[ResolvedToken]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            ResolvedToken::Word { phonemes, .. } => phonemes
                .iter()
                .map(Phoneme::as_str)
                .collect::<Vec<_>>()
                .join("-"),
            ResolvedToken::Punctuation(text) => text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
