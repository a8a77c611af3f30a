//! Base-word oracle: a compile-time perfect-hash predicate over a closed
//! set of common English base forms.
//!
//! The core only ever calls [`is_base_word`] — it never inspects how the
//! set was built. A production deployment would generate the full ~80k
//! word table offline the way `phf_codegen` does; this crate ships a
//! curated seed large enough to exercise the facade's init-time union
//! logic and the phonetic-bucket seeding it feeds.

static BASE_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "a", "about", "above", "across", "act", "after", "again", "against",
    "age", "ago", "air", "all", "also", "always", "am", "among", "an",
    "and", "animal", "another", "answer", "any", "are", "arm", "around",
    "as", "ask", "at", "away", "back", "bad", "ball", "be", "bear",
    "because", "become", "been", "before", "began", "begin", "behind",
    "being", "below", "best", "better", "between", "big", "bird", "black",
    "book", "both", "bring", "brother", "build", "but", "buy", "by",
    "call", "came", "can", "car", "care", "carry", "cat", "change",
    "child", "city", "class", "close", "cold", "come", "complete",
    "correct", "could", "country", "cut", "day", "did", "different",
    "do", "does", "dog", "done", "down", "draw", "during", "each",
    "early", "earth", "eat", "end", "enough", "even", "ever", "every",
    "example", "eye", "face", "family", "far", "father", "feel", "few",
    "find", "first", "fish", "follow", "food", "for", "form", "found",
    "four", "friend", "from", "front", "get", "girl", "give", "go",
    "good", "got", "great", "group", "grow", "had", "hand", "hard",
    "has", "have", "he", "head", "hear", "help", "her", "here", "high",
    "him", "his", "home", "house", "how", "idea", "if", "important",
    "in", "into", "is", "it", "its", "just", "keep", "kind", "knew",
    "know", "land", "large", "last", "later", "learn", "leave", "left",
    "less", "letter", "life", "light", "like", "line", "list", "little",
    "live", "long", "look", "made", "make", "man", "many", "may", "me",
    "mean", "men", "might", "more", "most", "mother", "mountain", "move",
    "much", "must", "my", "name", "near", "need", "never", "new", "next",
    "night", "no", "not", "now", "number", "of", "off", "often", "old",
    "on", "once", "one", "only", "open", "or", "other", "our", "out",
    "over", "own", "page", "paper", "part", "people", "picture", "place",
    "plant", "play", "point", "put", "question", "quick", "read", "ready",
    "real", "right", "river", "run", "said", "same", "saw", "say",
    "school", "sea", "second", "see", "seem", "sentence", "set", "she",
    "should", "show", "side", "since", "small", "so", "some", "something",
    "sound", "spell", "spelling", "start", "state", "still", "stop",
    "story", "study", "such", "take", "talk", "tell", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "thing",
    "think", "this", "those", "thought", "three", "through", "time",
    "to", "together", "too", "took", "tree", "try", "turn", "two",
    "under", "until", "up", "us", "use", "very", "want", "was", "water",
    "way", "we", "well", "went", "were", "what", "when", "where",
    "which", "while", "white", "who", "why", "will", "with", "without",
    "word", "work", "world", "would", "write", "year", "you", "young",
    "your",
};

/// Predicate over the closed base-word set. The core treats this as a
/// read-only function and never depends on how the table is built.
pub fn is_base_word(s: &str) -> bool {
    BASE_WORDS.contains(s)
}

/// Every word in the closed set, for callers seeding a dictionary floor
/// (`Spell::init`) rather than testing membership.
pub fn words() -> impl Iterator<Item = &'static str> {
    BASE_WORDS.iter().copied()
}
