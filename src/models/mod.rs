pub mod player;
pub mod word;

pub use player::{Player, PlayerSummary};
pub use word::Word;
