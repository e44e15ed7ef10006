use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_MAX_WORD_LENGTH: usize = 7;
pub const DEFAULT_BINGO_BONUS: u32 = 50;
pub const DEFAULT_WINNING_SCORE: u32 = 100;

/// Rules that decide how words are validated and scored and when a
/// player has won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Longest playable word. A word of exactly this length earns the
    /// bingo bonus and wins tie-breaks.
    pub max_word_length: usize,
    pub bingo_bonus: u32,
    pub winning_score: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            bingo_bonus: DEFAULT_BINGO_BONUS,
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }
}

impl ScoringRules {
    /// True when a word of `letter_count` letters uses the whole rack
    pub fn is_full_rack(&self, letter_count: usize) -> bool {
        letter_count == self.max_word_length
    }

    /// Load rules from the environment (and `.env` if present).
    /// Unset variables fall back to the standard rules.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let rules = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::info!(
            "Scoring rules loaded: max word length {}, bingo bonus {}, winning score {}",
            rules.max_word_length,
            rules.bingo_bonus,
            rules.winning_score
        );
        Ok(rules)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_word_length: usize = lookup("SCRABBLE_MAX_WORD_LENGTH")
            .unwrap_or_else(|| DEFAULT_MAX_WORD_LENGTH.to_string())
            .parse()
            .context("SCRABBLE_MAX_WORD_LENGTH must be a number")?;

        if max_word_length == 0 {
            anyhow::bail!("SCRABBLE_MAX_WORD_LENGTH must be at least 1");
        }

        let bingo_bonus = lookup("SCRABBLE_BINGO_BONUS")
            .unwrap_or_else(|| DEFAULT_BINGO_BONUS.to_string())
            .parse()
            .context("SCRABBLE_BINGO_BONUS must be a number")?;

        let winning_score = lookup("SCRABBLE_WINNING_SCORE")
            .unwrap_or_else(|| DEFAULT_WINNING_SCORE.to_string())
            .parse()
            .context("SCRABBLE_WINNING_SCORE must be a number")?;

        Ok(Self {
            max_word_length,
            bingo_bonus,
            winning_score,
        })
    }
}
