//! Rule-based grapheme-to-phoneme transcription.
//!
//! The last line of defense for words the corpus does not know: a
//! single-pass transcriber over a fixed letter table plus a small set of
//! context rules for digraphs and letter clusters. Approximate by design.

pub mod rules;
pub mod transcriber;

pub use transcriber::transcribe;
