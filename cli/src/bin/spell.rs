//! `spell` — unigram spell-checking driver.
//!
//! Tokenises input, prints one `word: suggestion[,suggestion...]` line per
//! misspelling. Out of the correction engine's scope; grounded on
//! `original_source/spell2.c`'s `main`/`getopt` loop, restated with a
//! `clap::Parser` + `anyhow::Result` front end.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lexicheck_core::Spell;

/// Unigram mode: flag each out-of-dictionary word with ranked suggestions.
#[derive(Parser)]
#[command(name = "spell")]
struct Args {
    /// Number of suggestions to print per misspelling.
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    count: usize,

    /// Input file to read; stdin if omitted.
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Optional whitelist of extra known words (one per line).
    #[arg(short = 'w', long = "whitelist")]
    whitelist: Option<PathBuf>,

    /// Unigram frequency corpus (`word\tcount` per line).
    #[arg(long = "dict", default_value = "dict/unigram.txt")]
    dict: PathBuf,
}

fn main() -> Result<()> {
    lexicheck_cli::init_tracing();
    let args = Args::parse();

    let spell = Spell::init(&args.dict, args.whitelist.as_ref())
        .with_context(|| format!("loading unigram corpus {}", args.dict.display()))?;

    let text = read_input(args.input.as_ref())?;
    for token in lexicheck_core::Tokenizer::new(&text) {
        if spell.is_known(&token.word, 1) > 0 {
            continue;
        }
        let suggestions = spell.suggest(&token.word, args.count);
        println!("{}: {}", token.word, suggestions.join(","));
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
