//! Candidate and suggestion value types.
//!
//! `Candidate` is the edit generator's output: a proposed surface form
//! plus a priority weight, not yet checked against any dictionary.
//! `Suggestion` is what survives ranking: a base word the caller can act
//! on, carrying the final `count * weight` score.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub surface: String,
    pub weight: f32,
}

impl Candidate {
    pub fn new<T: Into<String>>(surface: T, weight: f32) -> Self {
        Candidate {
            surface: surface.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub score: f32,
}

impl Suggestion {
    pub fn new<T: Into<String>>(word: T, score: f32) -> Self {
        Suggestion {
            word: word.into(),
            score,
        }
    }
}
