//! Lazy tokeniser / sanitiser.
//!
//! Splits an in-memory text buffer into normalised lowercase words, one at
//! a time, the way `original_source/bigspell.c`'s read loop walks a line
//! with repeated `strcspn` calls over a fixed delimiter set. The
//! subsequent bracket/apostrophe/alphabetic checks mirror
//! `original_source/libspell.c`'s `sanitize_string`, kept as a separately
//! callable function since corpus-building tooling (out of scope here)
//! would reuse it the same way the original did.

const DELIMITERS: &[char] = &[
    ' ', '\t', '(', ')', '<', '>', '@', '?', '\'', '"', ',', ';', '-', ':', '.', '\\',
];

const EOS_DELIMITERS: &[char] = &['?', '.', ';', '-', '\t', '(', ')'];

/// A word surviving sanitisation, plus whether the delimiter that ended it
/// marks a sentence boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub eos: bool,
}

/// Iterates the words of `text`, lowercased and sanitised, skipping
/// anything the sanitiser rejects or that ends up shorter than two
/// characters.
pub struct Tokenizer<'a> {
    remaining: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Tokenizer { remaining: text }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.remaining.is_empty() {
                return None;
            }
            let split_at = self.remaining.find(DELIMITERS);
            let (raw, eos) = match split_at {
                Some(i) => {
                    let delim = self.remaining[i..].chars().next().unwrap();
                    let raw = &self.remaining[..i];
                    self.remaining = &self.remaining[i + delim.len_utf8()..];
                    (raw, EOS_DELIMITERS.contains(&delim))
                }
                None => {
                    let raw = self.remaining;
                    self.remaining = "";
                    (raw, false)
                }
            };

            if raw.is_empty() {
                if split_at.is_none() {
                    return None;
                }
                continue;
            }

            let lowered = lower(raw);
            match sanitize(&lowered) {
                Some(word) if word.chars().count() > 1 => return Some(Token { word, eos }),
                _ => continue,
            }
        }
    }
}

/// ASCII-only lowercasing: `A-Z` to `a-z`, every other byte untouched.
pub fn lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Apply the sanitisation pipeline to an already-split, already-lowercased
/// token. Returns `None` if the word is rejected outright (contains a dot,
/// contains a non-alphabetic character). Never panics on empty input.
pub fn sanitize(word: &str) -> Option<String> {
    let mut s = word;
    if let Some(stripped) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        s = stripped;
    }

    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c == '\'' {
            let rest = &s[i + 1..];
            if rest.starts_with('s')
                || rest.starts_with("es")
                || rest.starts_with('m')
                || rest.starts_with('d')
                || rest.starts_with("ll")
            {
                break;
            }
        }
        if c == '.' {
            return None;
        }
        if !c.is_alphabetic() {
            return None;
        }
        out.push(c);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        let toks: Vec<_> = Tokenizer::new("The korrect answer, obviously.")
            .map(|t| t.word)
            .collect();
        assert_eq!(toks, vec!["the", "korrect", "answer", "obviously"]);
    }

    #[test]
    fn marks_end_of_sentence_on_terminal_delimiters() {
        let toks: Vec<_> = Tokenizer::new("one. two").collect();
        assert_eq!(toks[0].word, "one");
        assert!(toks[0].eos);
        assert_eq!(toks[1].word, "two");
    }

    #[test]
    fn drops_single_character_tokens() {
        let toks: Vec<_> = Tokenizer::new("a cat is a pet").map(|t| t.word).collect();
        assert_eq!(toks, vec!["cat", "is", "pet"]);
    }

    #[test]
    fn sanitize_truncates_possessive_apostrophes() {
        assert_eq!(sanitize("dog's").as_deref(), Some("dog"));
        assert_eq!(sanitize("cats'll").as_deref(), Some("cats"));
    }

    #[test]
    fn sanitize_rejects_dots_and_non_alpha() {
        assert_eq!(sanitize("e.g"), None);
        assert_eq!(sanitize("abc123"), None);
    }

    #[test]
    fn sanitize_strips_surrounding_parens() {
        assert_eq!(sanitize("(hello)").as_deref(), Some("hello"));
    }

    #[test]
    fn lower_is_ascii_only_and_idempotent() {
        let s = "Héllo World";
        let once = lower(s);
        let twice = lower(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "héllo world");
    }
}
