//! Candidate ranking for spelling correction.

use ahash::AHashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fuzzy::distance::edit_distance;

/// Maximum number of real candidates returned.
pub const MAX_CANDIDATES: usize = 6;
/// Candidates further away than this are discarded.
pub const MAX_DISTANCE: u32 = 10;
/// Bucket entries whose length differs from the word's by more than this
/// are skipped without scoring.
pub const MAX_LENGTH_DELTA: usize = 3;

/// A dictionary headword proposed as a spelling correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The proposed headword.
    pub headword: String,
    /// Weighted edit distance from the queried word.
    pub distance: u32,
}

/// One element of a ranked candidate list.
///
/// The two sentinels carry the queried word itself, so choosing any entry
/// always yields a plain spelling to continue with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateEntry {
    /// Keep the original spelling.
    NoChange {
        /// The queried word, unchanged.
        original: String,
    },
    /// No dictionary headword was close enough to propose.
    NoAlternatives {
        /// The queried word, unchanged.
        original: String,
    },
    /// A real correction candidate.
    Match(Candidate),
}

impl CandidateEntry {
    /// The spelling this entry resolves to when chosen.
    pub fn spelling(&self) -> &str {
        match self {
            CandidateEntry::NoChange { original } => original,
            CandidateEntry::NoAlternatives { original } => original,
            CandidateEntry::Match(candidate) => &candidate.headword,
        }
    }

    /// Edit distance for a real candidate, `None` for sentinels.
    pub fn distance(&self) -> Option<u32> {
        match self {
            CandidateEntry::Match(candidate) => Some(candidate.distance),
            _ => None,
        }
    }

    /// Whether this entry is a sentinel rather than a real candidate.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, CandidateEntry::Match(_))
    }
}

/// Rank bucket headwords as spelling candidates for `word`.
///
/// Entries are pre-filtered by length, scored with [`edit_distance`],
/// capped at distance [`MAX_DISTANCE`], deduplicated (first corpus
/// occurrence wins), sorted ascending by distance with corpus insertion
/// order breaking ties, and truncated to [`MAX_CANDIDATES`]. The result is
/// headed by a `NoChange` sentinel, or is the single `NoAlternatives`
/// sentinel when nothing survives, so its length is at most
/// `MAX_CANDIDATES + 1`.
pub fn rank_candidates(word: &str, bucket: &[String]) -> Vec<CandidateEntry> {
    let word_len = word.chars().count();

    // Score survivors in parallel; the per-entry bucket index is kept so
    // the final ordering is independent of scoring order.
    let mut scored: Vec<(usize, &String, u32)> = bucket
        .par_iter()
        .enumerate()
        .filter(|(_, entry)| entry.chars().count().abs_diff(word_len) <= MAX_LENGTH_DELTA)
        .filter_map(|(index, entry)| {
            let distance = edit_distance(word, entry);
            (distance <= MAX_DISTANCE).then_some((index, entry, distance))
        })
        .collect();

    scored.sort_by_key(|&(index, _, distance)| (distance, index));

    let mut seen = AHashSet::new();
    let mut entries = Vec::with_capacity(MAX_CANDIDATES + 1);
    entries.push(CandidateEntry::NoChange {
        original: word.to_string(),
    });
    for (_, headword, distance) in scored {
        if entries.len() > MAX_CANDIDATES {
            break;
        }
        if seen.insert(headword.as_str()) {
            entries.push(CandidateEntry::Match(Candidate {
                headword: headword.clone(),
                distance,
            }));
        }
    }

    if entries.len() == 1 {
        return vec![CandidateEntry::NoAlternatives {
            original: word.to_string(),
        }];
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn distances(entries: &[CandidateEntry]) -> Vec<u32> {
        entries.iter().filter_map(CandidateEntry::distance).collect()
    }

    #[test]
    fn test_no_change_sentinel_heads_the_list() {
        let entries = rank_candidates("HELO", &bucket(&["HELLO", "HALO"]));
        assert_eq!(
            entries[0],
            CandidateEntry::NoChange {
                original: "HELO".to_string()
            }
        );
        assert_eq!(entries[0].spelling(), "HELO");
    }

    #[test]
    fn test_sorted_ascending_and_capped() {
        let entries = rank_candidates(
            "GRAIN",
            &bucket(&[
                "GRAIN", "GRAINS", "GRAN", "GRAINY", "BRAIN", "TRAIN", "DRAIN", "GROIN",
            ]),
        );
        assert!(entries.len() <= MAX_CANDIDATES + 1);
        let dists = distances(&entries);
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(entries[1].spelling(), "GRAIN");
        assert_eq!(entries[1].distance(), Some(0));
    }

    #[test]
    fn test_ties_keep_bucket_order() {
        // Both are one substitution away; the earlier bucket entry wins.
        let entries = rank_candidates("CAT", &bucket(&["BAT", "HAT", "RAT"]));
        let words: Vec<&str> = entries[1..].iter().map(CandidateEntry::spelling).collect();
        assert_eq!(words, vec!["BAT", "HAT", "RAT"]);
    }

    #[test]
    fn test_length_prefilter_skips_distant_lengths() {
        // Nine characters of difference; never even scored.
        let entries = rank_candidates("CAT", &bucket(&["CATASTROPHIC"]));
        assert_eq!(
            entries,
            vec![CandidateEntry::NoAlternatives {
                original: "CAT".to_string()
            }]
        );
    }

    #[test]
    fn test_distance_cap_excludes_far_candidates() {
        // Three substitutions (15) is past the cap even though the length
        // filter passes.
        let entries = rank_candidates("ABC", &bucket(&["XYZ"]));
        assert!(entries[0].is_sentinel());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let entries = rank_candidates("CAT", &bucket(&["BAT", "BAT", "BAT"]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].spelling(), "BAT");
    }

    #[test]
    fn test_no_alternatives_carries_the_original() {
        let entries = rank_candidates("QQQQ", &bucket(&[]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].spelling(), "QQQQ");
        assert!(entries[0].is_sentinel());
    }

    #[test]
    fn test_output_never_exceeds_seven() {
        let many: Vec<String> = (0..50).map(|i| format!("CAT{i:02}")).collect();
        let entries = rank_candidates("CAT00", &many);
        assert!(entries.len() <= 7);
    }
}
