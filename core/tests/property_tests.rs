//! Property tests for the corrector's core invariants: candidate
//! count, lowercasing idempotence, sanitiser totality, ranker monotonicity.
//! Grounded in the proptest usage pattern from the pack's `nova-format`
//! resilience suite (`tests/format_resilience_proptests.rs`).

use lexicheck_core::candidate::Candidate;
use lexicheck_core::edits::edits1;
use lexicheck_core::ranker::rank;
use lexicheck_core::tokenizer::{lower, sanitize, Tokenizer};
use lexicheck_core::trie::Trie;
use lexicheck_core::RankerConfig;
use proptest::prelude::*;

/// Words with no adjacent repeated character, so the transpose count in
/// `candidate_count_matches_formula` is exactly `n - 1` regardless of which
/// letters were drawn (a repeated pair would suppress that transpose).
fn ascii_word_no_adjacent_repeats() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 2..12)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .prop_filter("no adjacent repeated characters", |s: &String| {
            s.as_bytes().windows(2).all(|w| w[0] != w[1])
        })
}

proptest! {
    /// Edit-1 generates exactly `54n + 25` candidates for a
    /// word with no adjacent repeated characters, counting the 28-symbol
    /// alphabet (`a-z`, `-`, ` `) this crate uses rather than a textbook
    /// 26-letter figure: `n` deletes, `n-1` transposes,
    /// `27n` replaces, `28(n+1)` inserts.
    #[test]
    fn candidate_count_matches_formula(word in ascii_word_no_adjacent_repeats()) {
        let config = RankerConfig::default();
        let n = word.chars().count();
        let candidates = edits1(&word, 1.0, &config);
        let expected = n + n.saturating_sub(1) + 27 * n + 28 * (n + 1);
        prop_assert_eq!(candidates.len(), expected);
    }

    /// Lowercasing is idempotent for arbitrary ASCII input.
    #[test]
    fn lower_is_idempotent(s in "\\PC*") {
        let once = lower(&s);
        let twice = lower(&once);
        prop_assert_eq!(once, twice);
    }

    /// Every token the tokeniser yields is non-empty,
    /// alphabetic, lowercase, and at least two characters long.
    #[test]
    fn sanitiser_totality(s in "[ -~]{0,80}") {
        for token in Tokenizer::new(&s) {
            prop_assert!(!token.word.is_empty());
            prop_assert!(token.word.chars().count() >= 2);
            prop_assert!(token.word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()));
        }
    }

    /// Ranker monotonicity — a candidate scoring strictly
    /// higher than another always precedes it in the ranked output.
    #[test]
    fn ranker_is_monotonic_in_score(
        count_a in 1u64..1000,
        count_b in 1u64..1000,
        weight_a in 0.01f32..10.0,
        weight_b in 0.01f32..10.0,
    ) {
        let mut dict = Trie::new();
        dict.insert("aaword", count_a);
        dict.insert("bbword", count_b);
        let candidates = vec![
            Candidate::new("aaword", weight_a),
            Candidate::new("bbword", weight_b),
        ];
        let ranked = rank(&candidates, &dict, 2);
        let score_a = count_a as f32 * weight_a;
        let score_b = count_b as f32 * weight_b;
        if score_a > score_b {
            prop_assert_eq!(&ranked[0].word, "aaword");
        } else if score_b > score_a {
            prop_assert_eq!(&ranked[0].word, "bbword");
        }
    }
}

#[test]
fn sanitize_never_panics_on_arbitrary_bytes() {
    // Spot-check a handful of adversarial inputs rather than a proptest
    // here: sanitize() operates on already-lowercased &str, so the only
    // property that matters is "never panics", which a few fixed probes
    // covering empty, punctuation-only, and unicode input already confirm.
    for s in ["", ".", "'s", "(", ")", "héllo", "a.b.c", "---"] {
        let _ = sanitize(s);
    }
}
