//! Command line argument parsing for the phonolex CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Phonolex - pronunciation lookup and phoneme transcription
#[derive(Parser, Debug, Clone)]
#[command(name = "phonolex")]
#[command(about = "Resolve words to phoneme sequences from a pronunciation corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhonolexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhonolexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text for terminals
    Human,
    /// Machine-readable JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a text into per-word phoneme sequences
    Transcribe(TranscribeArgs),

    /// Look a single word up in the pronunciation dictionary
    Lookup(LookupArgs),

    /// Show ranked spelling candidates for a word
    Suggest(SuggestArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Corpus selection shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Path to the pronunciation corpus
    #[arg(short, long, value_name = "CORPUS_FILE", default_value = "cmudict.txt")]
    pub dict: PathBuf,

    /// Keep alternate-pronunciation lines when loading
    #[arg(long)]
    pub keep_variants: bool,
}

/// Arguments for resolving a text
#[derive(Parser, Debug, Clone)]
pub struct TranscribeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Automatically substitute the closest spelling candidate on a miss
    #[arg(long)]
    pub best_match: bool,

    /// Text to resolve
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for an exact dictionary lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for listing spelling candidates
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Word to find candidates for
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_args_parse() {
        let args = PhonolexArgs::parse_from([
            "phonolex",
            "transcribe",
            "--dict",
            "cmudict.txt",
            "--best-match",
            "hello world",
        ]);
        match args.command {
            Command::Transcribe(t) => {
                assert_eq!(t.text, "hello world");
                assert!(t.best_match);
                assert!(!t.corpus.keep_variants);
            }
            other => panic!("expected transcribe, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_defaults_to_normal() {
        let args = PhonolexArgs::parse_from(["phonolex", "lookup", "cat"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = PhonolexArgs::parse_from(["phonolex", "-q", "-vv", "lookup", "cat"]);
        assert_eq!(args.verbosity(), 0);
    }
}
