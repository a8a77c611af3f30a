//! Bigram frequency map: `(word1, word2) -> count`.
//!
//! A thin wrapper contract — the map only needs point lookup and
//! accumulation, never ordered iteration, so an `ahash`-keyed hash map
//! stands in for a balanced tree without losing any required operation.
//! Shaped like a word-pair frequency map, trimmed to the single `count`
//! the corrector needs instead of a full interpolation model.

use ahash::AHashMap;

/// Maps an ordered word pair to how often it was observed adjacent in the
/// training corpus.
#[derive(Debug, Clone, Default)]
pub struct BigramMap {
    data: AHashMap<(String, String), u64>,
}

impl BigramMap {
    pub fn new() -> Self {
        BigramMap {
            data: AHashMap::new(),
        }
    }

    /// Record an observation of `word1 word2` occurring `count` times.
    /// Repeated calls for the same pair accumulate rather than overwrite,
    /// so a corpus file may be loaded line by line without pre-merging
    /// duplicate pairs.
    pub fn insert(&mut self, word1: &str, word2: &str, count: u64) {
        *self
            .data
            .entry((word1.to_string(), word2.to_string()))
            .or_insert(0) += count;
    }

    /// Look up the observed count for `word1 word2`. `0` if never seen.
    pub fn get(&self, word1: &str, word2: &str) -> u64 {
        self.data
            .get(&(word1.to_string(), word2.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_repeated_pairs() {
        let mut b = BigramMap::new();
        b.insert("the", "answer", 3);
        b.insert("the", "answer", 4);
        assert_eq!(b.get("the", "answer"), 7);
    }

    #[test]
    fn missing_pair_is_zero() {
        let b = BigramMap::new();
        assert_eq!(b.get("the", "answer"), 0);
    }

    #[test]
    fn order_matters() {
        let mut b = BigramMap::new();
        b.insert("the", "answer", 5);
        assert_eq!(b.get("answer", "the"), 0);
    }
}
