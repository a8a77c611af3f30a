//! Bigram contextual disambiguator.
//!
//! Drives a peekable token stream and, for each misspelling, picks a single
//! best replacement using whichever of the previous/next word's bigram
//! counts are available, per the state table below. Grounded on
//! `original_source/bigspell.c`'s `do_bigram` loop (the `prevword`/`word`
//! pair walking the sentence, the `max_frequency`/`max_index` scan over
//! `spell_get_suggestions` for the best bigram partner), restated as an
//! explicit two-state machine instead of the source's ad hoc locals.

use crate::spell::Spell;
use crate::tokenizer::Tokenizer;

/// One misspelling and what the disambiguator decided to do about it.
///
/// `suggestions` is a singleton in every case driven by bigram context; it
/// only holds more than one entry in the unigram-only fallback (state `S0`
/// with no next token available), where the caller wants the
/// full unigram suggestion list rather than picking a winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disambiguated {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Run the disambiguator over `text`, returning one [`Disambiguated`] entry
/// per misspelling encountered (known words are silently accepted and never
/// appear in the output). `top_k` bounds how many unigram suggestions are
/// considered as candidates at each step.
pub fn disambiguate(spell: &Spell, text: &str, top_k: usize) -> Vec<Disambiguated> {
    let mut tokens = Tokenizer::new(text).peekable();
    let mut out = Vec::new();
    // `prev` is `Some(word)` in state S1(word), `None` in state S0.
    let mut prev: Option<String> = None;

    while let Some(cur) = tokens.next() {
        if spell.is_known(&cur.word, 1) > 0 {
            prev = if cur.eos { None } else { Some(cur.word) };
            continue;
        }

        let u_cur = spell.suggest_scored(&cur.word, top_k);

        let nxt_eos_and_word = tokens.peek().map(|t| (t.word.clone(), t.eos));
        match nxt_eos_and_word {
            None => {
                // nxt absent (stream end).
                match &prev {
                    None => {
                        // S0: unigram-only, emit the whole suggestion list.
                        push_list(&mut out, cur.word, &u_cur);
                    }
                    Some(p) => {
                        // S1(prev): best = argmax_c count(prev + " " + c, 2).
                        let best = best_by(&u_cur, |c| spell.bigram_count(p, c));
                        push_singleton(&mut out, cur.word, best);
                    }
                }
                prev = None;
            }
            Some((nxt_word, nxt_eos)) => {
                let nxt_known = spell.is_known(&nxt_word, 1) > 0;
                if nxt_known {
                    let best = match &prev {
                        None => {
                            // S0, nxt known: argmax_c count(c + " " + nxt, 2).
                            best_by(&u_cur, |c| spell.bigram_count(c, &nxt_word))
                        }
                        Some(p) => {
                            // S1(prev), nxt known: argmax_c count(prev,c) * count(c,nxt).
                            best_by(&u_cur, |c| {
                                spell.bigram_count(p, c) * spell.bigram_count(c, &nxt_word)
                            })
                        }
                    };
                    push_singleton(&mut out, cur.word, best);
                    prev = if cur.eos { None } else { Some(nxt_word) };
                } else {
                    // nxt is also a misspelling; consume it now so the
                    // outer loop doesn't revisit it.
                    let nxt_tok = tokens.next().expect("peeked token must exist");
                    debug_assert_eq!(nxt_tok.word, nxt_word);
                    let u_nxt = spell.suggest_scored(&nxt_tok.word, top_k);

                    match &prev {
                        None => {
                            // S0, nxt unknown: best-pair over U(cur) x U(nxt).
                            let (best_cur, best_nxt) =
                                best_pair(&u_cur, &u_nxt, |c, x| spell.bigram_count(c, x));
                            push_singleton(&mut out, cur.word, best_cur);
                            push_singleton(&mut out, nxt_tok.word, best_nxt.clone());
                            prev = if nxt_eos { None } else { best_nxt };
                        }
                        Some(p) => {
                            // S1(prev), nxt unknown: independent prev-only argmax for each.
                            let best_cur = best_by(&u_cur, |c| spell.bigram_count(p, c));
                            let best_nxt = best_by(&u_nxt, |x| spell.bigram_count(p, x));
                            push_singleton(&mut out, cur.word, best_cur);
                            push_singleton(&mut out, nxt_tok.word, best_nxt.clone());
                            prev = if nxt_eos { None } else { best_nxt };
                        }
                    }
                }
            }
        }
    }

    out
}

fn push_singleton(out: &mut Vec<Disambiguated>, word: String, best: Option<String>) {
    if let Some(best) = best {
        out.push(Disambiguated {
            word,
            suggestions: vec![best],
        });
    }
}

fn push_list(out: &mut Vec<Disambiguated>, word: String, suggestions: &[crate::candidate::Suggestion]) {
    if suggestions.is_empty() {
        return;
    }
    out.push(Disambiguated {
        word,
        suggestions: suggestions.iter().map(|s| s.word.clone()).collect(),
    });
}

/// Pick the candidate from `suggestions` maximising `score`. Ties (including
/// the all-zero-score case) resolve to the first
/// candidate in `suggestions`, i.e. the highest unigram-ranked one. Returns
/// `None` when `suggestions` is empty (`U(cur)` empty means nothing to emit).
fn best_by(
    suggestions: &[crate::candidate::Suggestion],
    score: impl Fn(&str) -> u64,
) -> Option<String> {
    let mut best: Option<(&str, u64)> = None;
    for s in suggestions {
        let sc = score(&s.word);
        match best {
            Some((_, best_sc)) if sc <= best_sc => {}
            _ => best = Some((&s.word, sc)),
        }
    }
    best.map(|(w, _)| w.to_string())
}

/// Pick the pair `(c, x)` from `u_cur x u_nxt` maximising `score`, falling
/// back to the first element of each list when no pair scores above zero.
fn best_pair(
    u_cur: &[crate::candidate::Suggestion],
    u_nxt: &[crate::candidate::Suggestion],
    score: impl Fn(&str, &str) -> u64,
) -> (Option<String>, Option<String>) {
    let mut best: Option<(&str, &str, u64)> = None;
    for c in u_cur {
        for x in u_nxt {
            let sc = score(&c.word, &x.word);
            match best {
                Some((_, _, best_sc)) if sc <= best_sc => {}
                _ => best = Some((&c.word, &x.word, sc)),
            }
        }
    }
    match best {
        Some((c, x, sc)) if sc > 0 => (Some(c.to_string()), Some(x.to_string())),
        _ => (
            u_cur.first().map(|s| s.word.clone()),
            u_nxt.first().map(|s| s.word.clone()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell_with(unigram: &str, bigram: &str) -> (Spell, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let unigram_path = dir.path().join("unigram.txt");
        std::fs::write(&unigram_path, unigram).unwrap();
        std::fs::write(dir.path().join("bigram.txt"), bigram).unwrap();
        let spell = Spell::init(&unigram_path, None).unwrap();
        (spell, dir)
    }

    #[test]
    fn known_words_never_appear_in_output() {
        let (spell, _dir) = spell_with("the\t100\nanswer\t50\n", "");
        let out = disambiguate(&spell, "the answer", 3);
        assert!(out.is_empty());
    }

    #[test]
    fn s0_next_known_prefers_the_bigram_winner_over_stable_order() {
        // "cax" -> {"car", "cat"} both at edit distance 1 with equal unigram
        // counts, so generation order alone would favour "car" ('r' < 't'
        // in the replacement alphabet). The bigram with "answer" should
        // override that and pick "cat".
        let unigram = "answer\t50\ncar\t10\ncat\t10\n";
        let bigram = "car answer\t1\ncat answer\t20\n";
        let (spell, _dir) = spell_with(unigram, bigram);
        let out = disambiguate(&spell, "cax answer", 5);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "cax");
        assert_eq!(out[0].suggestions, vec!["cat".to_string()]);
    }

    #[test]
    fn s1_prefers_the_word_with_the_higher_prev_bigram_count() {
        let unigram = "the\t100\ncar\t10\ncat\t10\n";
        let bigram = "the car\t1\nthe cat\t50\n";
        let (spell, _dir) = spell_with(unigram, bigram);
        let out = disambiguate(&spell, "the cax", 5);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].suggestions, vec!["cat".to_string()]);
    }

    #[test]
    fn s0_stream_end_returns_the_full_unigram_list() {
        let unigram = "spelling\t100\nspell\t10\n";
        let (spell, _dir) = spell_with(unigram, "");
        let out = disambiguate(&spell, "speling", 5);
        assert_eq!(out.len(), 1);
        assert!(!out[0].suggestions.is_empty());
    }

    #[test]
    fn unknown_word_with_no_candidates_emits_nothing() {
        let (spell, _dir) = spell_with("the\t100\n", "");
        let out = disambiguate(&spell, "the xqzxqz", 5);
        assert!(out.is_empty());
    }
}
