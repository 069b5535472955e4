//! User-defined words
//!
//! Bodies are stored as raw, unparsed tokens and re-evaluated on every call,
//! so redefining a word changes the behaviour of every word that calls it
//! from the next call on.

use crate::error::{EvalError, EvalResult};
use rustc_hash::FxHashMap;

/// Names that are control words, never user words
pub const RESERVED: &[&str] = &["end", "dump"];

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashMap<String, Vec<String>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            words: FxHashMap::default(),
        }
    }

    /// Store `body` under `name`, replacing any earlier definition.
    /// Returns whether a definition was replaced.
    pub fn define(&mut self, name: String, body: Vec<String>) -> bool {
        self.words.insert(name, body).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.words.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Check that `name` can be defined as a word.
///
/// Names are non-empty, not reserved, do not start with an ASCII digit, and
/// consist of alphanumerics, underscores or non-ASCII code points.
pub fn validate_word_name(name: &str) -> EvalResult<()> {
    let Some(first) = name.chars().next() else {
        return Err(EvalError::invalid_definition("empty word name"));
    };
    if RESERVED.contains(&name) {
        return Err(EvalError::invalid_definition(format!(
            "'{}' is a reserved word",
            name
        )));
    }
    if first.is_ascii_digit() {
        return Err(EvalError::invalid_definition(format!(
            "word name '{}' starts with a digit",
            name
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|&c| !(c.is_alphanumeric() || c == '_' || !c.is_ascii()))
    {
        return Err(EvalError::invalid_definition(format!(
            "illegal character '{}' in word name '{}'",
            bad, name
        )));
    }
    Ok(())
}
