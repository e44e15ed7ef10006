pub mod scorer;
pub mod selector;
pub mod validator;

pub use scorer::{ScoreResult, Scorer};
pub use selector::{highest_score_from_with, tie_breaker, tie_breaker_with};
pub use validator::WordValidator;
