//! Scrabble-style word scoring.
//!
//! Scores single words, picks the best of several with a deterministic
//! tie-break, and tracks a player's running total until they reach the
//! winning score.
//!
//! ```
//! use scrabble_score::{highest_score_from, score, Player};
//!
//! assert_eq!(score("academy").unwrap(), 65);
//! assert_eq!(highest_score_from(&["dog", "goat"]).unwrap(), "dog");
//!
//! let mut player = Player::new("alice").unwrap();
//! assert!(player.play("zzzzzzz").unwrap());
//! assert!(player.has_won());
//! assert!(!player.play("dog").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use config::ScoringRules;
pub use error::{Result, ScrabbleError};
pub use game::{tie_breaker, ScoreResult, Scorer, WordValidator};
pub use models::{Player, PlayerSummary, Word};
pub use utils::letters::{letter_value, LETTER_VALUES};

/// Score a word under the standard rules: the sum of its letter values,
/// plus 50 for a seven letter word
pub fn score(word: &str) -> Result<u32> {
    score_with(word, &ScoringRules::default())
}

pub fn score_with(word: &str, rules: &ScoringRules) -> Result<u32> {
    let word = Word::parse_with(word, rules)?;
    Ok(Scorer::calculate_score_with(&word, rules))
}

/// Return the highest scoring word, breaking ties with [`tie_breaker`]
pub fn highest_score_from<S: AsRef<str>>(words: &[S]) -> Result<&str> {
    game::highest_score_from_with(words, &ScoringRules::default()).map(|word| word.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_matches_letter_sum() {
        for word in ["dog", "cat", "pig", "quiz", "jazzmen", "k"] {
            let letters: u32 = word
                .chars()
                .map(|c| letter_value(c).unwrap() as u32)
                .sum();
            let bonus = if word.len() == 7 { 50 } else { 0 };
            assert_eq!(score(word).unwrap(), letters + bonus, "Score for '{}'", word);
        }
    }

    #[test]
    fn test_score_case_insensitive() {
        for word in ["dog", "academy", "Zombify"] {
            let expected = score(word).unwrap();
            assert_eq!(score(&word.to_uppercase()).unwrap(), expected);
            assert_eq!(score(&word.to_lowercase()).unwrap(), expected);
        }
    }

    #[test]
    fn test_score_rejects_invalid_words() {
        assert_eq!(score(""), Err(ScrabbleError::EmptyWord));
        assert!(matches!(
            score("abcdefgh"),
            Err(ScrabbleError::WordTooLong { .. })
        ));
        assert!(matches!(
            score("char^"),
            Err(ScrabbleError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_score_assumptions() {
        assert_eq!(score("zzzzzz").unwrap(), 60);
        assert_eq!(score("iiiiddd").unwrap(), 60);
        assert_eq!(score("jazzmen").unwrap(), 84);
        assert_eq!(score("jazzman").unwrap(), 84);
        assert_eq!(score("goat").unwrap(), 5);
    }

    #[test]
    fn test_highest_score_from() {
        assert_eq!(highest_score_from(&["dog"]).unwrap(), "dog");
        assert_eq!(highest_score_from(&["dog", "pig"]).unwrap(), "pig");
        assert_eq!(highest_score_from(&["zzzzzz", "iiiiddd"]).unwrap(), "iiiiddd");
        assert_eq!(highest_score_from(&["goat", "dog"]).unwrap(), "dog");
        assert_eq!(highest_score_from(&["cat", "dog"]).unwrap(), "cat");

        let owned = vec!["i".to_string(), "dog".to_string(), "cat".to_string()];
        assert_eq!(highest_score_from(&owned).unwrap(), "dog");
    }

    #[test]
    fn test_highest_score_from_empty_fails() {
        let words: Vec<String> = Vec::new();
        assert_eq!(highest_score_from(&words), Err(ScrabbleError::NoWords));
    }

    #[test]
    fn test_custom_rules_score() {
        let rules = ScoringRules {
            max_word_length: 8,
            bingo_bonus: 50,
            ..ScoringRules::default()
        };
        assert_eq!(score_with("abcdefgh", &rules).unwrap(), 70);
        assert_eq!(score_with("academy", &rules).unwrap(), 15);
    }
}
