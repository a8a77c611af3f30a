//! End-to-end scenarios: tokeniser -> facade -> ranker ->
//! bigram disambiguator, exercised against small in-memory corpora built
//! from temp files the way `core/src/spell.rs`'s own unit tests do.

use lexicheck_core::{disambiguate, metaphone, tokenizer, Spell};
use std::path::Path;

fn spell_from(dir: &Path, unigram: &str, bigram: Option<&str>) -> Spell {
    std::fs::write(dir.join("unigram.txt"), unigram).unwrap();
    if let Some(bigram) = bigram {
        std::fs::write(dir.join("bigram.txt"), bigram).unwrap();
    }
    Spell::init(dir.join("unigram.txt"), None).unwrap()
}

const NORVIG_LIKE: &str = "\
the\t100000\n\
spelling\t5000\n\
spell\t2000\n\
speak\t500\n\
answer\t3000\n\
correct\t4000\n\
corrupt\t100\n\
";

#[test]
fn speling_corrects_to_spelling() {
    let dir = tempfile::tempdir().unwrap();
    let spell = spell_from(dir.path(), NORVIG_LIKE, None);
    let suggestions = spell.suggest("speling", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("spelling"));
}

#[test]
fn teh_corrects_to_the() {
    let dir = tempfile::tempdir().unwrap();
    let spell = spell_from(dir.path(), NORVIG_LIKE, None);
    let suggestions = spell.suggest("teh", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("the"));
}

#[test]
fn korrect_corrects_to_correct() {
    let dir = tempfile::tempdir().unwrap();
    let spell = spell_from(dir.path(), NORVIG_LIKE, None);
    let suggestions = spell.suggest("korrect", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("correct"));
}

#[test]
fn gorrekt_requires_the_edit_two_pass() {
    let dir = tempfile::tempdir().unwrap();
    let spell = spell_from(dir.path(), NORVIG_LIKE, None);
    // "gorrekt" differs from "correct" at two positions (g/c, k/c) and from
    // every other dictionary entry by more than that, so the edit-1 pass
    // must come back empty before the edit-2 expansion finds "correct".
    let suggestions = spell.suggest("gorrekt", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("correct"));
}

#[test]
fn bigram_mode_resolves_korrect_using_context() {
    let dir = tempfile::tempdir().unwrap();
    let bigram = "correct answer\t50\ncorrupt answer\t1\n";
    let spell = spell_from(dir.path(), NORVIG_LIKE, Some(bigram));
    let out = disambiguate(&spell, "the korrect answer", 5);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].word, "korrect");
    assert_eq!(out[0].suggestions, vec!["correct".to_string()]);
}

#[test]
fn rupert_encodes_to_rprt() {
    let dm = metaphone::double_metaphone("Rupert").unwrap();
    assert_eq!(dm.primary, "RPRT");
}

#[test]
fn empty_input_has_no_soundex() {
    assert_eq!(metaphone::soundex(""), None);
}

#[test]
fn unmatched_word_yields_no_suggestions_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let spell = spell_from(dir.path(), NORVIG_LIKE, None);
    let suggestions = spell.suggest("xqz", 3);
    assert!(suggestions.is_empty());
}

#[test]
fn tokeniser_feeds_the_facade_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let spell = spell_from(dir.path(), NORVIG_LIKE, None);
    let misspelled: Vec<String> = tokenizer::Tokenizer::new("The speling was korrect.")
        .map(|t| t.word)
        .filter(|w| spell.is_known(w, 1) == 0)
        .collect();
    assert_eq!(misspelled, vec!["speling".to_string(), "korrect".to_string()]);
}
