//! Corpus line parsing for the pronunciation dictionary.
//!
//! The corpus format is one pronunciation per line: a headword followed by
//! whitespace-separated phoneme symbols. Comment lines start with `;;;`.
//! Digits encode stress (`OW1`) and alternate-pronunciation counters
//! (`WORD(2)`); every digit on the line is stripped before parsing, so an
//! alternate marker reduces to the empty parenthetical `()`.

use crate::phoneme::Phoneme;

/// Prefix marking a comment line in the corpus.
pub const COMMENT_MARKER: &str = ";;;";

/// Marker left behind on alternate-pronunciation headwords once their
/// counter digits are stripped.
const VARIANT_MARKER: &str = "()";

/// Outcome of parsing a single corpus line.
#[derive(Debug, PartialEq, Eq)]
pub enum CorpusLine {
    /// A comment line, ignored.
    Comment,
    /// A headword with no phoneme symbols; skipped, never surfaced.
    Malformed,
    /// An alternate-pronunciation line dropped by a compact load.
    Variant,
    /// A usable dictionary entry.
    Entry {
        /// The uppercased, digit-stripped headword.
        headword: String,
        /// The pronunciation, in order.
        phonemes: Vec<Phoneme>,
    },
}

/// Parse one corpus line.
///
/// With `compact` set, lines whose digit-stripped headword still carries the
/// `()` variant marker are reported as [`CorpusLine::Variant`] so the caller
/// can drop alternate pronunciations wholesale.
pub fn parse_line(line: &str, compact: bool) -> CorpusLine {
    if line.starts_with(COMMENT_MARKER) {
        return CorpusLine::Comment;
    }

    // Strip every digit on the line, stress markers and variant counters
    // alike.
    let stripped: String = line.chars().filter(|c| !c.is_ascii_digit()).collect();

    let mut tokens = stripped.split_whitespace();
    let Some(headword) = tokens.next() else {
        return CorpusLine::Malformed;
    };

    if compact && headword.contains(VARIANT_MARKER) {
        return CorpusLine::Variant;
    }

    let phonemes: Vec<Phoneme> = tokens.map(Phoneme::from).collect();
    if phonemes.is_empty() {
        return CorpusLine::Malformed;
    }

    CorpusLine::Entry {
        headword: headword.to_uppercase(),
        phonemes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_entry() {
        let parsed = parse_line("DOG D AO1 G", true);
        assert_eq!(
            parsed,
            CorpusLine::Entry {
                headword: "DOG".to_string(),
                phonemes: vec![Phoneme::from("D"), Phoneme::from("AO"), Phoneme::from("G")],
            }
        );
    }

    #[test]
    fn test_stress_digits_are_stripped() {
        let parsed = parse_line("ABALONE  AE2 B AH0 L OW1 N IY0", true);
        match parsed {
            CorpusLine::Entry { headword, phonemes } => {
                assert_eq!(headword, "ABALONE");
                let symbols: Vec<&str> = phonemes.iter().map(|p| p.as_str()).collect();
                assert_eq!(symbols, vec!["AE", "B", "AH", "L", "OW", "N", "IY"]);
            }
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        assert_eq!(
            parse_line(";;; The Carnegie Mellon Pronouncing Dictionary", true),
            CorpusLine::Comment
        );
    }

    #[test]
    fn test_variant_filtered_only_when_compact() {
        let line = "WORD(2) W ER1 D";
        assert_eq!(parse_line(line, true), CorpusLine::Variant);

        // A full load keeps the variant under its marker headword.
        match parse_line(line, false) {
            CorpusLine::Entry { headword, .. } => assert_eq!(headword, "WORD()"),
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_headword_without_phonemes_is_malformed() {
        assert_eq!(parse_line("ORPHAN", true), CorpusLine::Malformed);
        assert_eq!(parse_line("", true), CorpusLine::Malformed);
        // A line of nothing but digits strips down to nothing.
        assert_eq!(parse_line("123", true), CorpusLine::Malformed);
    }

    #[test]
    fn test_headword_is_uppercased() {
        match parse_line("hello HH AH0 L OW1", true) {
            CorpusLine::Entry { headword, .. } => assert_eq!(headword, "HELLO"),
            other => panic!("expected entry, got {other:?}"),
        }
    }
}
