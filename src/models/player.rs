use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    config::ScoringRules,
    error::{Result, ScrabbleError},
    game::{highest_score_from_with, Scorer},
    models::Word,
};

/// A named player and the words they have played, in order.
///
/// Total score and win status are derived from the play history. Once
/// the total reaches the winning score the player is done: further
/// plays are declined, not rejected.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    plays: Vec<Word>,
    rules: ScoringRules,
}

/// Serializable snapshot of a player's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub plays: Vec<String>,
    pub total_score: u32,
    pub has_won: bool,
}

impl Player {
    /// Create a player under the standard rules
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_rules(name, ScoringRules::default())
    }

    pub fn with_rules(name: impl Into<String>, rules: ScoringRules) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScrabbleError::EmptyName);
        }

        Ok(Self {
            name,
            plays: Vec::new(),
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plays(&self) -> &[Word] {
        &self.plays
    }

    pub fn play_count(&self) -> usize {
        self.plays.len()
    }

    /// Record a word for this player.
    ///
    /// Returns `Ok(false)` without touching the history if the player has
    /// already won. Invalid words are an error and are not recorded.
    pub fn play(&mut self, word: &str) -> Result<bool> {
        if self.has_won() {
            tracing::warn!(
                "Player {} has already won, declining play '{}'",
                self.name,
                word
            );
            return Ok(false);
        }

        let word = Word::parse_with(word, &self.rules)?;
        let score = Scorer::calculate_score_with(&word, &self.rules);
        let total = self.total_score().saturating_add(score);

        tracing::info!(
            "Player {} played '{}' for {} points (total {})",
            self.name,
            word,
            score,
            total
        );
        self.plays.push(word);

        if total >= self.rules.winning_score {
            tracing::info!("Player {} has won with {} points", self.name, total);
        }

        Ok(true)
    }

    /// Sum of the scores of every word played so far
    pub fn total_score(&self) -> u32 {
        self.plays
            .iter()
            .map(|word| Scorer::calculate_score_with(word, &self.rules))
            .fold(0, u32::saturating_add)
    }

    pub fn has_won(&self) -> bool {
        self.total_score() >= self.rules.winning_score
    }

    /// Best word played so far, with the usual tie-break rules
    pub fn highest_scoring_word(&self) -> Result<&Word> {
        if self.plays.is_empty() {
            return Err(ScrabbleError::NoPlays(self.name.clone()));
        }
        highest_score_from_with(&self.plays, &self.rules)
    }

    pub fn highest_word_score(&self) -> Result<u32> {
        let word = self.highest_scoring_word()?;
        Ok(Scorer::calculate_score_with(word, &self.rules))
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            name: self.name.clone(),
            plays: self.plays.iter().map(|w| w.as_str().to_string()).collect(),
            total_score: self.total_score(),
            has_won: self.has_won(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} points", self.name, self.total_score())
    }
}
