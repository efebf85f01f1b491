//! # Phonolex
//!
//! A pronunciation dictionary and phoneme resolution engine for Rust.
//!
//! Phonolex converts words into ordered sequences of phoneme symbols. A
//! corpus-backed dictionary provides ground-truth pronunciations; for words
//! the corpus does not know, a weighted edit distance ranks spelling
//! candidates, and a rule-based grapheme-to-phoneme transcriber produces an
//! approximate pronunciation as a last resort.
//!
//! ## Features
//!
//! - CMU-style pronunciation corpus loading with alternate-pronunciation
//!   filtering
//! - Exact lookup plus per-initial-letter candidate buckets
//! - Weighted edit distance tuned to favor insertions/deletions over
//!   substitutions
//! - Pluggable spelling resolution (automated policies or interactive UIs)
//! - Deterministic rule-based transcription for out-of-vocabulary words
//! - Sentence-level resolution that preserves per-word grouping and passes
//!   punctuation through untouched

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod fuzzy;
pub mod g2p;
pub mod phoneme;
pub mod resolver;

pub mod prelude {
    //! Convenience re-exports for the common library surface.

    pub use crate::dictionary::{DictionaryConfig, DictionaryStore};
    pub use crate::error::{PhonolexError, Result};
    pub use crate::fuzzy::{Candidate, CandidateEntry, rank_candidates};
    pub use crate::g2p::transcribe;
    pub use crate::phoneme::Phoneme;
    pub use crate::resolver::{PhonemeResolver, ResolvedToken, SpellingResolver};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
