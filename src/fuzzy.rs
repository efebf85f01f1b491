//! Fuzzy spelling-candidate search over the dictionary buckets.
//!
//! A weighted edit distance scores how plausibly one word is a misspelling
//! of another, and the matcher ranks bucket headwords into a short
//! candidate list for a spelling resolver to choose from.

pub mod distance;
pub mod matcher;

pub use distance::edit_distance;
pub use matcher::{Candidate, CandidateEntry, MAX_CANDIDATES, rank_candidates};
