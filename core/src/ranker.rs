//! Candidate ranker: filters generated candidates against a dictionary,
//! scores, sorts, truncates, and falls back edit-1 -> edit-2 -> phonetic.
//! Ported from `original_source/libspell.c`'s `spell_get_corrections` and
//! its `max_count`-driven insertion sort, restated as a stable sort here.

use crate::candidate::{Candidate, Suggestion};
use crate::metaphone;
use crate::phonetic::PhoneticBucket;
use crate::trie::Trie;

/// Filter `candidates` by dictionary membership in `dict`, score each
/// surviving one as `count * weight`, stable-sort descending by score,
/// and truncate to `top_k`.
pub fn rank(candidates: &[Candidate], dict: &Trie, top_k: usize) -> Vec<Suggestion> {
    let mut scored: Vec<Suggestion> = candidates
        .iter()
        .filter_map(|c| {
            let count = dict.get(&c.surface);
            if count == 0 {
                return None;
            }
            Some(Suggestion::new(c.surface.clone(), count as f32 * c.weight))
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);
    scored
}

/// Phonetic fallback: the single base word sharing `word`'s Double
/// Metaphone code with the lowest Levenshtein distance to `word`. Ties
/// are broken by bucket order (the first minimiser encountered wins),
/// matching the source's single-pass scan for a best match.
pub fn phonetic_fallback(word: &str, buckets: &PhoneticBucket) -> Option<Suggestion> {
    let code = metaphone::double_metaphone(word)?;
    let mut candidates = buckets.get(&code.primary).to_vec();
    if let Some(secondary) = &code.secondary {
        candidates.extend_from_slice(buckets.get(secondary));
    }

    candidates
        .into_iter()
        .map(|w| {
            let d = levenshtein(word, &w);
            (w, d)
        })
        .min_by_key(|(_, d)| *d)
        .map(|(w, d)| Suggestion::new(w, 1.0 / (1.0 + d as f32)))
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut cur = vec![i; b.len() + 1];
        for j in 1..=b.len() {
            cur[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(prev[j]).min(cur[j - 1])
            };
        }
        prev = cur;
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_with(words: &[(&str, u64)]) -> Trie {
        let mut t = Trie::new();
        for (w, c) in words {
            t.insert(w, *c);
        }
        t
    }

    #[test]
    fn unknown_candidates_are_discarded() {
        let dict = dict_with(&[("cat", 100)]);
        let candidates = vec![Candidate::new("cat", 1.0), Candidate::new("xqz", 1.0)];
        let ranked = rank(&candidates, &dict, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "cat");
    }

    #[test]
    fn higher_count_times_weight_sorts_first() {
        let dict = dict_with(&[("cat", 100), ("car", 5)]);
        let candidates = vec![Candidate::new("car", 1.0), Candidate::new("cat", 1.0)];
        let ranked = rank(&candidates, &dict, 5);
        assert_eq!(ranked[0].word, "cat");
        assert_eq!(ranked[1].word, "car");
    }

    #[test]
    fn truncates_to_top_k() {
        let dict = dict_with(&[("a", 1), ("b", 2), ("c", 3)]);
        let candidates = vec![
            Candidate::new("a", 1.0),
            Candidate::new("b", 1.0),
            Candidate::new("c", 1.0),
        ];
        let ranked = rank(&candidates, &dict, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "c");
        assert_eq!(ranked[1].word, "b");
    }

    #[test]
    fn empty_candidate_list_ranks_to_nothing() {
        let dict = dict_with(&[("cat", 100)]);
        let ranked = rank(&[], &dict, 5);
        assert!(ranked.is_empty());
    }

    #[test]
    fn phonetic_fallback_picks_closest_bucket_member() {
        let mut buckets = PhoneticBucket::new();
        buckets.insert("KRT", "court");
        buckets.insert("KRT", "cart");
        let result = phonetic_fallback("kart", &buckets).unwrap();
        assert_eq!(result.word, "cart");
    }

    #[test]
    fn phonetic_fallback_is_none_without_a_matching_bucket() {
        let buckets = PhoneticBucket::new();
        assert!(phonetic_fallback("zzz", &buckets).is_none());
    }
}
