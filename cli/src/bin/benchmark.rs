//! `benchmark` — recall harness against labelled `misspelling\ttruth` pairs.
//!
//! Ported from `original_source/benchmark.c`'s `do_unigram`: classifies
//! each row as known-correct, known-wrong, suggested-correct,
//! suggested-wrong, or failed, and prints a summary of suggestion quality.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lexicheck_core::Spell;

#[derive(Parser)]
#[command(name = "benchmark")]
struct Args {
    /// Test file of `misspelling\ttruth` pairs, one per line.
    #[arg(short = 'f', long = "testfile")]
    testfile: PathBuf,

    /// Which index to evaluate suggestions against: 1 (unigram) or 2 (bigram).
    #[arg(short = 'n', long = "ngram", default_value_t = 1)]
    ngram: u8,

    /// Unigram frequency corpus (`word\tcount` per line).
    #[arg(long = "dict", default_value = "dict/unigram.txt")]
    dict: PathBuf,

    /// Number of suggestions requested per misspelling.
    #[arg(short = 'c', long = "count", default_value_t = 5)]
    count: usize,
}

#[derive(Default)]
struct Tally {
    known_correct: usize,
    known_wrong: usize,
    suggested_correct: usize,
    suggested_wrong: usize,
    failed: usize,
}

fn main() -> Result<()> {
    lexicheck_cli::init_tracing();
    let args = Args::parse();

    let spell = Spell::init(&args.dict, None::<&PathBuf>)
        .with_context(|| format!("loading unigram corpus {}", args.dict.display()))?;

    let content = fs::read_to_string(&args.testfile)
        .with_context(|| format!("reading test file {}", args.testfile.display()))?;

    let mut tally = Tally::default();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (misspelling, truth) = line.split_once('\t').with_context(|| {
            format!("test file line {} missing tab separator", line_no + 1)
        })?;
        let misspelling = lexicheck_core::Tokenizer::new(misspelling)
            .next()
            .map(|t| t.word)
            .unwrap_or_default();
        let truth = lexicheck_core::Tokenizer::new(truth)
            .next()
            .map(|t| t.word)
            .unwrap_or_else(|| truth.trim().to_string());

        if spell.is_known(&misspelling, args.ngram) > 0 {
            if misspelling == truth {
                tally.known_correct += 1;
            } else {
                tally.known_wrong += 1;
                println!("known-wrong: {misspelling}\ttruth: {truth}");
            }
            continue;
        }

        let suggestions = spell.suggest(&misspelling, args.count);
        if suggestions.is_empty() {
            tally.failed += 1;
            println!("failed: {misspelling}\ttruth: {truth}");
            continue;
        }

        if suggestions.iter().any(|s| s == &truth) {
            tally.suggested_correct += 1;
        } else {
            tally.suggested_wrong += 1;
            println!(
                "suggested-wrong: {misspelling}\tsuggestion: {}\ttruth: {truth}",
                suggestions[0]
            );
        }
    }

    println!("known-correct: {}", tally.known_correct);
    println!("known-wrong: {}", tally.known_wrong);
    println!("suggested-correct: {}", tally.suggested_correct);
    println!("suggested-wrong: {}", tally.suggested_wrong);
    println!("failed: {}", tally.failed);

    Ok(())
}
