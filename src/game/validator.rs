use crate::{
    config::ScoringRules,
    error::{Result, ScrabbleError},
    models::Word,
    utils::letters::letter_value,
};

pub struct WordValidator {
    max_length: usize,
}

impl WordValidator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn from_rules(rules: &ScoringRules) -> Self {
        Self::new(rules.max_word_length)
    }

    /// Check that `raw` is non-empty, no longer than the maximum length,
    /// and made only of letters with a value
    pub fn validate(&self, raw: &str) -> Result<Word> {
        if raw.is_empty() {
            return Err(ScrabbleError::EmptyWord);
        }

        let len = raw.chars().count();
        if len > self.max_length {
            return Err(ScrabbleError::WordTooLong {
                word: raw.to_string(),
                max: self.max_length,
            });
        }

        if let Some(ch) = raw.chars().find(|&c| letter_value(c).is_none()) {
            return Err(ScrabbleError::InvalidCharacter {
                word: raw.to_string(),
                ch,
            });
        }

        Ok(Word::new_validated(raw.to_string(), len))
    }

    pub fn is_valid_word(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }
}

impl Default for WordValidator {
    fn default() -> Self {
        Self::from_rules(&ScoringRules::default())
    }
}
