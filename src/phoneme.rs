//! Phoneme tokens and the sequence builder used by the transcriber.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single phoneme symbol, e.g. `AH`, `K`, or `SH`.
///
/// Phonemes are opaque uppercase tokens; nothing beyond equality and
/// concatenation is interpreted. The rule-based transcriber may emit the
/// two-symbol compound `K S` as one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phoneme(String);

impl Phoneme {
    /// Create a phoneme from a symbol string.
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Phoneme(symbol.into())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phoneme {
    fn from(symbol: &str) -> Self {
        Phoneme(symbol.to_string())
    }
}

impl From<String> for Phoneme {
    fn from(symbol: String) -> Self {
        Phoneme(symbol)
    }
}

/// Append-only accumulator for a phoneme sequence.
///
/// The transcriber's context rules either add a token or rewrite the most
/// recently added one; this builder exposes exactly those two operations.
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    tokens: Vec<Phoneme>,
}

impl SequenceBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        SequenceBuilder { tokens: Vec::new() }
    }

    /// Append a token to the sequence.
    pub fn append(&mut self, symbol: &str) {
        self.tokens.push(Phoneme::from(symbol));
    }

    /// Replace the most recently appended token.
    ///
    /// On an empty sequence this appends instead; transcription must never
    /// fail.
    pub fn replace_last(&mut self, symbol: &str) {
        self.tokens.pop();
        self.tokens.push(Phoneme::from(symbol));
    }

    /// Number of tokens accumulated so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the builder and return the finished sequence.
    pub fn finish(self) -> Vec<Phoneme> {
        self.tokens
    }
}
