use crate::{config::ScoringRules, models::Word, utils::letters::letter_value};

/// Result of scoring a word, split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    /// Sum of the letter values
    pub letter_total: u32,
    /// Bonus for playing a full-length word
    pub bingo_bonus: u32,
    /// Total score for the word
    pub score: u32,
}

pub struct Scorer;

impl Scorer {
    /// Score a validated word under the given rules.
    ///
    /// Scoring rules:
    /// - Each letter has a base value, case does not matter
    /// - A word of exactly `max_word_length` letters earns a flat bingo bonus
    pub fn calculate_score_with_bonus(word: &Word, rules: &ScoringRules) -> ScoreResult {
        let letter_total: u32 = word
            .letters()
            .map(|ch| letter_value(ch).map_or(0, u32::from))
            .sum();

        let bingo_bonus = Self::length_bonus(word, rules);
        let score = letter_total.saturating_add(bingo_bonus);

        tracing::debug!(
            "Scored '{}': {} from letters + {} bonus = {}",
            word,
            letter_total,
            bingo_bonus,
            score
        );

        ScoreResult {
            letter_total,
            bingo_bonus,
            score,
        }
    }

    /// Score a word under the standard rules
    pub fn calculate_score(word: &Word) -> u32 {
        Self::calculate_score_with(word, &ScoringRules::default())
    }

    pub fn calculate_score_with(word: &Word, rules: &ScoringRules) -> u32 {
        Self::calculate_score_with_bonus(word, rules).score
    }

    /// Bonus points based on word length: only a full rack earns it
    fn length_bonus(word: &Word, rules: &ScoringRules) -> u32 {
        if word.is_bingo(rules) {
            rules.bingo_bonus
        } else {
            0
        }
    }
}
