//! Single-pass grapheme-to-phoneme transcription.

use crate::g2p::rules::{base_phoneme, is_vowel};
use crate::phoneme::{Phoneme, SequenceBuilder};

/// Transcribe an uppercase word into an approximate phoneme sequence.
///
/// One left-to-right pass: the first character maps through the base
/// table, and every later character is interpreted against its
/// predecessor, with one character of lookahead for the letter-C rule.
/// Characters outside `A..=Z` contribute no phoneme, so callers normalize
/// to uppercase first. The result may be empty; transcription never fails.
///
/// The context rules collapse doubled letters, rewrite common digraphs
/// (`CH`, `PH`, `SH`, `GH`, `NG`, `QU`, `UW`), and expand `X` between
/// vowels to the compound token `K S`. A lone `H` after any other letter
/// and a `C` that is not flanked by vowels contribute nothing at all.
pub fn transcribe(word: &str) -> Vec<Phoneme> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = SequenceBuilder::new();

    let Some(&first) = chars.first() else {
        return out.finish();
    };
    if let Some(symbol) = base_phoneme(first) {
        out.append(symbol);
    }

    for i in 1..chars.len() {
        let a = chars[i];
        let b = chars[i - 1];

        if a == b {
            // Doubled letters collapse into the phoneme already emitted,
            // except OO which rounds to UW.
            if a == 'O' {
                out.replace_last("UW");
            }
        } else if a == 'H' {
            match b {
                'C' => out.replace_last("CH"),
                'P' => out.replace_last("F"),
                'S' => out.replace_last("SH"),
                'G' => {
                    // GH opening a word stays silent.
                    if i > 1 {
                        out.replace_last("F");
                    }
                }
                _ => {}
            }
        } else if a == 'G' && b == 'N' {
            out.replace_last("NG");
        } else if a == 'U' && b == 'Q' {
            out.append("W");
        } else if a == 'W' && b == 'U' {
            out.replace_last("UW");
        } else if a == 'X' && is_vowel(b) {
            out.append("K S");
        } else if a == 'C' {
            if is_vowel(b) && chars.get(i + 1).copied().is_some_and(is_vowel) {
                out.append("S");
            }
        } else if let Some(symbol) = base_phoneme(a) {
            out.append(symbol);
        }
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(word: &str) -> Vec<String> {
        transcribe(word).iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_simple_word() {
        assert_eq!(symbols("DOG"), vec!["D", "OW", "G"]);
    }

    #[test]
    fn test_ph_digraph() {
        assert_eq!(symbols("PHONE"), vec!["F", "OW", "N", "EH"]);
    }

    #[test]
    fn test_doubled_letters_collapse_and_oo_rounds() {
        assert_eq!(symbols("BALLOON"), vec!["B", "AH", "L", "UW", "N"]);
    }

    #[test]
    fn test_ch_and_sh_digraphs() {
        assert_eq!(symbols("CHIP"), vec!["CH", "IH", "P"]);
        assert_eq!(symbols("SHED"), vec!["SH", "EH", "D"]);
    }

    #[test]
    fn test_gh_is_silent_at_word_start_but_f_later() {
        assert_eq!(symbols("GHOST"), vec!["G", "OW", "S", "T"]);
        assert_eq!(symbols("LAUGH"), vec!["L", "AH", "AH", "F"]);
    }

    #[test]
    fn test_ng_cluster() {
        assert_eq!(symbols("SING"), vec!["S", "IH", "NG"]);
    }

    #[test]
    fn test_qu_appends_w_after_k() {
        assert_eq!(symbols("QUIZ"), vec!["K", "W", "IH", "Z"]);
    }

    #[test]
    fn test_uw_rounds() {
        assert_eq!(symbols("UWE"), vec!["UW", "EH"]);
    }

    #[test]
    fn test_x_between_vowels_is_compound_token() {
        let tokens = symbols("EXAM");
        assert_eq!(tokens, vec!["EH", "K S", "AH", "M"]);
    }

    #[test]
    fn test_x_elsewhere_defaults_to_z() {
        assert_eq!(symbols("XRAY"), vec!["Z", "R", "AH", "Y"]);
    }

    #[test]
    fn test_c_between_vowels_softens_to_s() {
        assert_eq!(symbols("OCEAN"), vec!["OW", "S", "EH", "AH", "N"]);
    }

    #[test]
    fn test_c_without_vowel_context_is_silent() {
        assert_eq!(symbols("SCAB"), vec!["S", "AH", "B"]);
    }

    #[test]
    fn test_bare_h_after_a_letter_is_silent() {
        assert_eq!(symbols("AHEAD"), vec!["AH", "EH", "AH", "D"]);
    }

    #[test]
    fn test_h_at_word_start_is_voiced() {
        assert_eq!(symbols("HAT"), vec!["HH", "AH", "T"]);
    }

    #[test]
    fn test_non_letters_contribute_nothing() {
        assert!(symbols("1234!?").is_empty());
        assert!(symbols("").is_empty());
        assert_eq!(symbols("DON'T"), vec!["D", "OW", "N", "T"]);
    }

    #[test]
    fn test_transcription_is_deterministic() {
        assert_eq!(transcribe("WONDERING"), transcribe("WONDERING"));
    }
}
