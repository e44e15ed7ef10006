use thiserror::Error;

/// Every failure the scoring library reports. All variants are invalid
/// input from the caller and are always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrabbleError {
    #[error("invalid input: word must not be empty")]
    EmptyWord,

    #[error("invalid input: word '{word}' is longer than {max} letters")]
    WordTooLong { word: String, max: usize },

    #[error("invalid input: word '{word}' contains '{ch}', which has no letter value")]
    InvalidCharacter { word: String, ch: char },

    #[error("invalid input: no words to choose from")]
    NoWords,

    #[error("invalid input: player name must not be empty")]
    EmptyName,

    #[error("invalid input: player '{0}' has not played any words")]
    NoPlays(String),
}

pub type Result<T> = std::result::Result<T, ScrabbleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_input() {
        let err = ScrabbleError::InvalidCharacter {
            word: "char^".to_string(),
            ch: '^',
        };
        assert!(err.to_string().contains("char^"));
        assert!(err.to_string().contains('^'));

        let err = ScrabbleError::WordTooLong {
            word: "abcdefgh".to_string(),
            max: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid input: word 'abcdefgh' is longer than 7 letters"
        );
    }

    #[test]
    fn test_no_plays_names_the_player() {
        let err = ScrabbleError::NoPlays("test player".to_string());
        assert_eq!(
            err.to_string(),
            "invalid input: player 'test player' has not played any words"
        );
    }
}
