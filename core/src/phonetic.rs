//! Phonetic bucket map: double-metaphone (or soundex) code -> base words.
//!
//! Same wrapper contract as [`crate::bigram::BigramMap`],
//! but the value side is an append-ordered list rather than a scalar count,
//! since the phonetic fallback needs every base word sharing a code, not
//! just one.

use ahash::AHashMap;

#[derive(Debug, Clone, Default)]
pub struct PhoneticBucket {
    data: AHashMap<String, Vec<String>>,
}

impl PhoneticBucket {
    pub fn new() -> Self {
        PhoneticBucket {
            data: AHashMap::new(),
        }
    }

    /// Append `word` to the bucket for `code`. Duplicate `(code, word)`
    /// pairs are kept as-is; the corpus loader is responsible for not
    /// feeding the same line twice.
    pub fn insert(&mut self, code: &str, word: &str) {
        self.data
            .entry(code.to_string())
            .or_default()
            .push(word.to_string());
    }

    /// Every word sharing `code`, in the order they were inserted.
    pub fn get(&self, code: &str) -> &[String] {
        self.data.get(code).map(Vec::as_slice).unwrap_or(&[])
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
    fn buckets_accumulate_in_order() {
        let mut b = PhoneticBucket::new();
        b.insert("RPRT", "robert");
        b.insert("RPRT", "rupert");
        assert_eq!(b.get("RPRT"), &["robert".to_string(), "rupert".to_string()]);
    }

    #[test]
    fn missing_code_is_empty_slice() {
        let b = PhoneticBucket::new();
        assert!(b.get("XXXX").is_empty());
    }
}
