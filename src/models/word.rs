use serde::Serialize;
use std::fmt;

use crate::{config::ScoringRules, error::Result, game::WordValidator};

/// A playable word: 1 to `max_word_length` letters, each with a letter
/// value. Keeps the casing it was played with; scoring ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
    #[serde(skip)]
    letter_count: usize,
}

impl Word {
    /// Validate `raw` under the standard rules
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, &ScoringRules::default())
    }

    pub fn parse_with(raw: &str, rules: &ScoringRules) -> Result<Self> {
        WordValidator::from_rules(rules).validate(raw)
    }

    /// Only the validator builds words, after checking every letter
    pub(crate) fn new_validated(text: String, letter_count: usize) -> Self {
        Self { text, letter_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// True when the word uses a full rack and earns the bingo bonus
    pub fn is_bingo(&self, rules: &ScoringRules) -> bool {
        rules.is_full_rack(self.letter_count)
    }

    /// Letters normalized to uppercase, as used for value lookup
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().map(|c| c.to_ascii_uppercase())
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
