//! Edit-distance-1 (and, by composition, edit-distance-2) candidate
//! generation. Ported from `original_source/libspell.c`'s `edits1` and
//! `edits_plus_one`: the same four operation kinds in the same order
//! (delete, transpose, replace, insert), over the same alphabet
//! (`a`-`z`, `-`, ` `), with the same weight arithmetic.

use crate::candidate::Candidate;
use crate::config::RankerConfig;
use crate::metaphone;

fn alphabet() -> [char; 28] {
    let mut out = ['\0'; 28];
    for (i, c) in ('a'..='z').enumerate() {
        out[i] = c;
    }
    out[26] = '-';
    out[27] = ' ';
    out
}

fn apply_homophone_boost(weight: f32, candidate: &str, word_soundex: &Option<String>, config: &RankerConfig) -> f32 {
    match (word_soundex, metaphone::soundex(candidate)) {
        (Some(ws), Some(cs)) if *ws == cs => weight * config.homophone_boost,
        _ => weight,
    }
}

/// Generate every candidate at edit distance 1 from `word`. `distance` is
/// the nominal edit distance of this pass (1 for a direct call, 2 when
/// used to expand an edit-1 candidate) and scales every candidate's weight.
/// Returns an empty list for words of length < 2, matching the source's
/// `wordlen <= 1` guard.
pub fn edits1(word: &str, distance: f32, config: &RankerConfig) -> Vec<Candidate> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n <= 1 {
        return Vec::new();
    }
    let word_soundex = metaphone::soundex(word);
    let alphabet = alphabet();
    let mut out = Vec::with_capacity(57 * n + 27);

    for i in 0..=n {
        let prefix = &chars[..i];
        let suffix = &chars[i..];

        if i < n {
            let mut cand = prefix.to_vec();
            cand.extend_from_slice(&suffix[1..]);
            let surface: String = cand.into_iter().collect();
            let mut w = 1.0 / distance;
            if i == 0 {
                w *= config.prefix_penalty;
            }
            w /= config.delete_replace_divisor;
            w = apply_homophone_boost(w, &surface, &word_soundex, config);
            out.push(Candidate::new(surface, w));
        }

        if i < n - 1 && suffix[0] != suffix[1] {
            let mut cand = prefix.to_vec();
            cand.push(suffix[1]);
            cand.push(suffix[0]);
            cand.extend_from_slice(&suffix[2..]);
            let surface: String = cand.into_iter().collect();
            let mut w = 1.0 / distance;
            if i == 0 {
                w *= config.prefix_penalty;
            }
            w = apply_homophone_boost(w, &surface, &word_soundex, config);
            out.push(Candidate::new(surface, w));
        }

        for &c in &alphabet {
            if i < n && suffix[0] != c {
                let mut cand = prefix.to_vec();
                cand.push(c);
                cand.extend_from_slice(&suffix[1..]);
                let surface: String = cand.into_iter().collect();
                let mut w = 1.0 / distance;
                if i == 0 {
                    w *= config.prefix_penalty;
                }
                w /= config.delete_replace_divisor;
                w = apply_homophone_boost(w, &surface, &word_soundex, config);
                out.push(Candidate::new(surface, w));
            }

            let mut cand = prefix.to_vec();
            cand.push(c);
            cand.extend_from_slice(suffix);
            let surface: String = cand.into_iter().collect();
            let mut w = 1.0 / distance;
            if i == 0 {
                w *= config.prefix_penalty;
            }
            w *= config.insert_boost;
            w = apply_homophone_boost(w, &surface, &word_soundex, config);
            out.push(Candidate::new(surface, w));
        }
    }
    out
}

/// Expand an edit-1 candidate list one distance further: run `edits1`
/// again over every surviving surface, at nominal distance 2. Callers only
/// reach for this pass when the edit-1 ranked result came back empty — see
/// `Spell::suggest` in `spell.rs`.
pub fn edits2(edit1_candidates: &[Candidate], config: &RankerConfig) -> Vec<Candidate> {
    edit1_candidates
        .iter()
        .flat_map(|c| edits1(&c.surface, 2.0, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_count_matches_formula() {
        // For a word with no adjacent repeated characters: n deletes,
        // n-1 transposes, 27n replaces (28-symbol alphabet minus the
        // one self-match at each position), 28(n+1) inserts.
        let config = RankerConfig::default();
        let word = "cat";
        let n = word.chars().count();
        let candidates = edits1(word, 1.0, &config);
        let expected = n + (n - 1) + 27 * n + 28 * (n + 1);
        assert_eq!(candidates.len(), expected);
    }

    #[test]
    fn short_words_produce_nothing() {
        let config = RankerConfig::default();
        assert!(edits1("a", 1.0, &config).is_empty());
        assert!(edits1("", 1.0, &config).is_empty());
    }

    #[test]
    fn every_candidate_is_edit_distance_one() {
        let config = RankerConfig::default();
        for c in edits1("cat", 1.0, &config) {
            assert!(levenshtein("cat", &c.surface) <= 1, "{} not within 1 of cat", c.surface);
        }
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

    #[test]
    fn leading_edits_are_penalised() {
        let config = RankerConfig::default();
        let candidates = edits1("cat", 1.0, &config);
        let leading_delete = candidates.iter().find(|c| c.surface == "at").unwrap();
        let non_leading_delete = candidates.iter().find(|c| c.surface == "ct").unwrap();
        assert!(leading_delete.weight < non_leading_delete.weight);
    }
}
