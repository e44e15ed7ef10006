//! Picking the best word out of several.
//!
//! Equal scores are settled by length: a full-rack word beats anything
//! shorter, otherwise the shorter word wins, and among equal lengths the
//! word seen first is kept.

use std::cmp::Ordering;

use crate::{
    config::ScoringRules,
    error::{Result, ScrabbleError},
    game::Scorer,
    models::Word,
};

/// Of two equally scored words, return the preferred one under the
/// standard rules
pub fn tie_breaker<'a>(first: &'a str, second: &'a str) -> &'a str {
    tie_breaker_with(first, second, &ScoringRules::default())
}

pub fn tie_breaker_with<'a>(first: &'a str, second: &'a str, rules: &ScoringRules) -> &'a str {
    if prefers_second(first.chars().count(), second.chars().count(), rules) {
        second
    } else {
        first
    }
}

fn prefers_second(first_len: usize, second_len: usize, rules: &ScoringRules) -> bool {
    match (rules.is_full_rack(first_len), rules.is_full_rack(second_len)) {
        (true, false) => false,
        (false, true) => true,
        _ => second_len < first_len,
    }
}

/// Return the highest scoring entry of `words`, validating every one.
/// Fails on an empty slice or on the first invalid word.
pub fn highest_score_from_with<'a, S>(words: &'a [S], rules: &ScoringRules) -> Result<&'a S>
where
    S: AsRef<str>,
{
    let mut iter = words.iter();
    let first = iter.next().ok_or(ScrabbleError::NoWords)?;

    let mut best = first;
    let mut best_word = Word::parse_with(first.as_ref(), rules)?;
    let mut best_score = Scorer::calculate_score_with(&best_word, rules);

    for candidate in iter {
        let word = Word::parse_with(candidate.as_ref(), rules)?;
        let score = Scorer::calculate_score_with(&word, rules);

        let replace = match score.cmp(&best_score) {
            Ordering::Greater => true,
            Ordering::Equal => {
                prefers_second(best_word.letter_count(), word.letter_count(), rules)
            }
            Ordering::Less => false,
        };

        if replace {
            tracing::debug!(
                "'{}' ({}) replaces '{}' ({}) as best word",
                word,
                score,
                best_word,
                best_score
            );
            best = candidate;
            best_word = word;
            best_score = score;
        }
    }

    Ok(best)
}
