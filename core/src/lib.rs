//! lexicheck-core
//!
//! The correction engine behind `lexicheck`: dictionary structures,
//! edit-distance candidate generation, Double Metaphone/Soundex phonetic
//! encoding, the scored candidate ranker, and the bigram contextual
//! disambiguator. CLI front-ends, the corpus-building tool, and the
//! compiled base-word perfect-hash table are external collaborators — this
//! crate only consumes the latter as the read-only predicate
//! [`base_words::is_base_word`].
//!
//! The facade is [`spell::Spell`]: built once via [`spell::Spell::init`]
//! from a unigram frequency file (plus optional whitelist, bigram and
//! soundex corpora), then queried through `is_known`/`suggest` for the
//! lifetime of a batch run. [`bigram_disambiguator::disambiguate`] layers
//! context-aware correction on top of it for callers that have a full
//! token stream rather than a single word.

pub mod base_words;
pub mod bigram;
pub mod bigram_disambiguator;
pub mod candidate;
pub mod config;
pub mod edits;
pub mod error;
pub mod metaphone;
pub mod phonetic;
pub mod ranker;
pub mod spell;
pub mod tokenizer;
pub mod trie;

pub use bigram_disambiguator::{disambiguate, Disambiguated};
pub use candidate::{Candidate, Suggestion};
pub use config::RankerConfig;
pub use error::{Result, SpellError};
pub use spell::Spell;
pub use tokenizer::{Token, Tokenizer};
