//! `bigspell` — bigram contextual spell-checking driver.
//!
//! Ported in spirit from `original_source/bigspell.c`'s `do_bigram`: reads
//! input, emits `word: suggestion` for each misspelling the bigram
//! disambiguator resolves via its neighbouring context.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lexicheck_core::{disambiguate, Spell};

/// Bigram mode: resolve each misspelling using its sentence context.
#[derive(Parser)]
#[command(name = "bigspell")]
struct Args {
    /// Number of unigram candidates considered per misspelling before
    /// picking the contextual best.
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    count: usize,

    /// Input file to read; stdin if omitted.
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Optional whitelist of extra known words (one per line).
    #[arg(short = 'w', long = "whitelist")]
    whitelist: Option<PathBuf>,

    /// Unigram frequency corpus (`word\tcount` per line). The bigram
    /// corpus is expected alongside it as `bigram.txt`.
    #[arg(long = "dict", default_value = "dict/unigram.txt")]
    dict: PathBuf,
}

fn main() -> Result<()> {
    lexicheck_cli::init_tracing();
    let args = Args::parse();

    let spell = Spell::init(&args.dict, args.whitelist.as_ref())
        .with_context(|| format!("loading unigram corpus {}", args.dict.display()))?;

    let text = read_input(args.input.as_ref())?;
    for corrected in disambiguate(&spell, &text, args.count) {
        println!("{}: {}", corrected.word, corrected.suggestions.join(","));
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
