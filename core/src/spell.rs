//! `Spell`: the correction engine facade. Loads the unigram dictionary
//! (plus optional whitelist, bigram, and soundex corpora) and exposes
//! `is_known` / `suggest`, mirroring `original_source/libspell.c`'s
//! `spell_init` / `spell_check` / `spell_get_corrections` / `spell_destroy`
//! quartet as one owning struct instead of an opaque pointer the caller
//! must remember to free.

use std::path::Path;

use crate::base_words;
use crate::bigram::BigramMap;
use crate::candidate::Suggestion;
use crate::config::RankerConfig;
use crate::edits;
use crate::error::{Result, SpellError};
use crate::metaphone;
use crate::phonetic::PhoneticBucket;
use crate::ranker;
use crate::tokenizer;
use crate::trie::Trie;

/// Owns the dictionary structures backing corrections. Built once via
/// [`Spell::init`] and queried for the lifetime of a batch run.
pub struct Spell {
    unigrams: Trie,
    bigrams: BigramMap,
    phonetic: PhoneticBucket,
    config: RankerConfig,
}

impl Spell {
    /// Build the unigram index from `unigram_path` (lines `word \t
    /// count`), optionally seeding it first from `whitelist_path` (one
    /// word per line, default count 1, inserted *before* the unigram file
    /// so any real corpus count for the same word overrides it). The
    /// index then gets every base-word-oracle word floored at count 1,
    /// so rare in-vocabulary words stay correctable targets even when
    /// the corpus never observed them.
    ///
    /// `unigram_path` must exist. A missing whitelist, bigram, or soundex
    /// file is not an error: the corresponding map is simply left empty.
    pub fn init<P: AsRef<Path>>(unigram_path: P, whitelist_path: Option<P>) -> Result<Self> {
        let unigram_path = unigram_path.as_ref();
        let mut unigrams = Trie::new();

        if let Some(whitelist_path) = whitelist_path {
            let whitelist_path = whitelist_path.as_ref();
            if let Ok(content) = std::fs::read_to_string(whitelist_path) {
                for line in content.lines() {
                    let word = line.trim();
                    if !word.is_empty() {
                        unigrams.insert(word, 1);
                    }
                }
            }
        }

        let content = std::fs::read_to_string(unigram_path).map_err(|source| SpellError::MissingFile {
            path: unigram_path.to_path_buf(),
            source,
        })?;
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (word, count) = parse_word_count(line).ok_or_else(|| SpellError::MalformedCorpus {
                path: unigram_path.to_path_buf(),
                line_no: line_no + 1,
                reason: "expected `word\\tcount`".to_string(),
            })?;
            unigrams.insert(word, count);
        }

        for word in base_words::words() {
            if unigrams.get(word) == 0 {
                unigrams.insert(word, 1);
            }
        }

        let dict_dir = unigram_path.parent().unwrap_or_else(|| Path::new("."));

        let mut bigrams = BigramMap::new();
        let bigram_path = dict_dir.join("bigram.txt");
        if let Ok(content) = std::fs::read_to_string(&bigram_path) {
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                if let Some((pair, count)) = parse_word_count(line) {
                    if let Some((w1, w2)) = pair.split_once(' ') {
                        bigrams.insert(w1, w2, count);
                    }
                }
            }
        }

        let mut phonetic = PhoneticBucket::new();
        let soundex_path = dict_dir.join("soundex.txt");
        if let Ok(content) = std::fs::read_to_string(&soundex_path) {
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                if let Some((code, word)) = line.split_once('\t') {
                    phonetic.insert(code, word);
                }
            }
        }

        tracing::debug!(
            unigrams = unigrams.collect("").len(),
            bigrams = bigrams.len(),
            phonetic_buckets = phonetic.len(),
            "spell dictionary loaded"
        );

        Ok(Spell {
            unigrams,
            bigrams,
            phonetic,
            config: RankerConfig::default(),
        })
    }

    pub fn with_config(mut self, config: RankerConfig) -> Self {
        self.config = config;
        self
    }

    /// Dictionary count for `w`. `ngram = 1` queries the unigram index;
    /// `ngram = 2` treats `w` as a `"word1 word2"` pair against the
    /// bigram map. Unknown words/pairs return 0.
    pub fn is_known(&self, w: &str, ngram: u8) -> u64 {
        match ngram {
            2 => match w.split_once(' ') {
                Some((w1, w2)) => self.bigrams.get(w1, w2),
                None => 0,
            },
            _ => self.unigrams.get(w),
        }
    }

    /// `count(word1 + " " + word2, 2)` — exposed separately from
    /// [`Spell::is_known`] since the bigram disambiguator always has the
    /// pair already split.
    pub fn bigram_count(&self, word1: &str, word2: &str) -> u64 {
        self.bigrams.get(word1, word2)
    }

    /// Ranked suggestions for `w`, lower-cased in place; `self` is never
    /// mutated. Tries edit-1, then edit-2, then the phonetic fallback,
    /// stopping at the first stage with a non-empty result.
    pub fn suggest(&self, w: &str, n: usize) -> Vec<String> {
        let w = tokenizer::lower(w);
        tracing::trace!(word = %w, top_k = n, "suggest");

        let edit1 = edits::edits1(&w, 1.0, &self.config);
        let ranked = ranker::rank(&edit1, &self.unigrams, n);
        if !ranked.is_empty() {
            return into_words(ranked);
        }

        let edit2 = edits::edits2(&edit1, &self.config);
        let ranked = ranker::rank(&edit2, &self.unigrams, n);
        if !ranked.is_empty() {
            return into_words(ranked);
        }

        if !self.phonetic.is_empty() {
            if let Some(s) = ranker::phonetic_fallback(&w, &self.phonetic) {
                tracing::debug!(word = %w, suggestion = %s.word, "phonetic fallback");
                return vec![s.word];
            }
        }

        tracing::debug!(word = %w, "no suggestions found");
        Vec::new()
    }

    /// Ranked unigram suggestions with their scores, for callers (the
    /// bigram disambiguator) that need the candidate set itself rather
    /// than just the winning surface form.
    pub fn suggest_scored(&self, w: &str, n: usize) -> Vec<Suggestion> {
        let w = tokenizer::lower(w);
        let edit1 = edits::edits1(&w, 1.0, &self.config);
        let ranked = ranker::rank(&edit1, &self.unigrams, n);
        if !ranked.is_empty() {
            return ranked;
        }
        let edit2 = edits::edits2(&edit1, &self.config);
        ranker::rank(&edit2, &self.unigrams, n)
    }

    /// Double Metaphone primary code for `w`, used by callers that want
    /// to bucket words phonetically without going through `suggest`.
    pub fn phonetic_code(&self, w: &str) -> Option<String> {
        metaphone::double_metaphone(w).map(|c| c.primary)
    }
}

fn into_words(suggestions: Vec<Suggestion>) -> Vec<String> {
    suggestions.into_iter().map(|s| s.word).collect()
}

fn parse_word_count(line: &str) -> Option<(&str, u64)> {
    let (word, count) = line.split_once('\t')?;
    let count: u64 = count.trim().parse().ok()?;
    Some((word, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn missing_unigram_file_is_an_error() {
        let result = Spell::init(std::path::Path::new("/nonexistent/unigram.txt"), None);
        assert!(result.is_err());
    }

    #[test]
    fn known_word_reports_its_count() {
        let unigram = write_temp("cat\t100\ndog\t50\n");
        let spell = Spell::init(unigram.path(), None).unwrap();
        assert_eq!(spell.is_known("cat", 1), 100);
        assert_eq!(spell.is_known("zzz", 1), 0);
    }

    #[test]
    fn whitelist_entries_are_overridden_by_real_counts() {
        let unigram = write_temp("cat\t100\n");
        let whitelist = write_temp("cat\nbird\n");
        let spell = Spell::init(unigram.path(), Some(whitelist.path())).unwrap();
        assert_eq!(spell.is_known("cat", 1), 100);
        assert_eq!(spell.is_known("bird", 1), 1);
    }

    #[test]
    fn suggest_prefers_a_single_edit_over_two() {
        let unigram = write_temp("cat\t100\ncart\t1\n");
        let spell = Spell::init(unigram.path(), None).unwrap();
        let suggestions = spell.suggest("cta", 3);
        assert!(suggestions.contains(&"cat".to_string()));
    }

    #[test]
    fn malformed_unigram_line_is_reported() {
        let unigram = write_temp("cat\tnotanumber\n");
        let result = Spell::init(unigram.path(), None);
        assert!(result.is_err());
    }
}
