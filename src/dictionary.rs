//! Pronunciation dictionary loading and indexing.
//!
//! This module turns a CMU-style pronunciation corpus into an immutable
//! store with two views: an exact headword index for lookups, and
//! per-initial-letter buckets that bound the fuzzy matcher's candidate
//! search.

pub mod corpus;
pub mod store;

pub use store::{BUCKET_SENTINEL, DictionaryConfig, DictionaryStore};
