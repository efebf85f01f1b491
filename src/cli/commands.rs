//! Command implementations for the phonolex CLI.

use std::sync::Arc;

use serde::Serialize;

use crate::cli::args::*;
use crate::dictionary::{DictionaryConfig, DictionaryStore};
use crate::error::Result;
use crate::fuzzy::{CandidateEntry, rank_candidates};
use crate::resolver::{
    BestMatchPolicy, NoChangePolicy, PhonemeResolver, SpellingResolver, format_tokens,
};

/// Execute a CLI command.
pub fn execute_command(args: PhonolexArgs) -> Result<()> {
    match &args.command {
        Command::Transcribe(transcribe_args) => transcribe(transcribe_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup(lookup_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Load the dictionary store named by the corpus args.
fn load_store(corpus: &CorpusArgs, cli_args: &PhonolexArgs) -> Result<Arc<DictionaryStore>> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", corpus.dict.display());
    }

    let config = DictionaryConfig {
        compact: !corpus.keep_variants,
    };
    let store = DictionaryStore::load_from_file(&corpus.dict, &config)?;

    if cli_args.verbosity() > 1 {
        println!("Loaded {} entries", store.len());
    }

    Ok(Arc::new(store))
}

/// Print a serializable value as JSON, honoring `--pretty`.
fn print_json<T: Serialize>(value: &T, cli_args: &PhonolexArgs) -> Result<()> {
    let rendered = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Resolve a text and print its phonemes.
fn transcribe(args: TranscribeArgs, cli_args: &PhonolexArgs) -> Result<()> {
    let store = load_store(&args.corpus, cli_args)?;
    let policy: Box<dyn SpellingResolver> = if args.best_match {
        Box::new(BestMatchPolicy)
    } else {
        Box::new(NoChangePolicy)
    };
    let resolver = PhonemeResolver::with_policy(store, policy);

    let tokens = resolver.resolve_text(&args.text);
    match cli_args.output_format {
        OutputFormat::Human => println!("{}", format_tokens(&tokens)),
        OutputFormat::Json => print_json(&tokens, cli_args)?,
    }

    Ok(())
}

/// Result shape for the lookup command's JSON output.
#[derive(Debug, Serialize)]
struct LookupResult<'a> {
    word: String,
    found: bool,
    phonemes: Vec<&'a str>,
}

/// Look a single word up; misses report as not found rather than erroring.
fn lookup(args: LookupArgs, cli_args: &PhonolexArgs) -> Result<()> {
    let store = load_store(&args.corpus, cli_args)?;
    let word = args.word.to_uppercase();
    let phonemes = store.lookup(&word);

    match cli_args.output_format {
        OutputFormat::Human => match phonemes {
            Some(sequence) => {
                let symbols: Vec<&str> = sequence.iter().map(|p| p.as_str()).collect();
                println!("{word}: {}", symbols.join(" "));
            }
            None => println!("{word}: not in dictionary"),
        },
        OutputFormat::Json => {
            let result = LookupResult {
                word: word.clone(),
                found: phonemes.is_some(),
                phonemes: phonemes
                    .map(|sequence| sequence.iter().map(|p| p.as_str()).collect())
                    .unwrap_or_default(),
            };
            print_json(&result, cli_args)?;
        }
    }

    Ok(())
}

/// Print the ranked spelling candidates for a word.
fn suggest(args: SuggestArgs, cli_args: &PhonolexArgs) -> Result<()> {
    let store = load_store(&args.corpus, cli_args)?;
    let word = args.word.to_uppercase();
    let first = word.chars().next().unwrap_or('!');
    let entries = rank_candidates(&word, store.bucket(first));

    match cli_args.output_format {
        OutputFormat::Human => {
            for entry in &entries {
                match entry {
                    CandidateEntry::NoChange { original } => {
                        println!("  (no change)       {original}");
                    }
                    CandidateEntry::NoAlternatives { original } => {
                        println!("  (no alternatives) {original}");
                    }
                    CandidateEntry::Match(candidate) => {
                        println!("  {:<17} {}", candidate.distance, candidate.headword);
                    }
                }
            }
        }
        OutputFormat::Json => print_json(&entries, cli_args)?,
    }

    Ok(())
}

/// Result shape for the stats command's JSON output.
#[derive(Debug, Serialize)]
struct StatsResult {
    entries: usize,
    buckets: Vec<BucketStats>,
}

#[derive(Debug, Serialize)]
struct BucketStats {
    key: String,
    headwords: usize,
}

/// Show entry and bucket counts for the loaded corpus.
fn stats(args: StatsArgs, cli_args: &PhonolexArgs) -> Result<()> {
    let store = load_store(&args.corpus, cli_args)?;
    let result = StatsResult {
        entries: store.len(),
        buckets: store
            .bucket_sizes()
            .into_iter()
            .map(|(key, headwords)| BucketStats {
                key: key.to_string(),
                headwords,
            })
            .collect(),
    };

    match cli_args.output_format {
        OutputFormat::Human => {
            println!("Entries: {}", result.entries);
            for bucket in &result.buckets {
                println!("  {}  {}", bucket.key, bucket.headwords);
            }
        }
        OutputFormat::Json => print_json(&result, cli_args)?,
    }

    Ok(())
}
