use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("player '{name}' is not seated at this table")]
    UnknownPlayer { name: String },
    #[error("begin_game must be called before playing rounds")]
    GameNotStarted,
    #[error("table has zero total capacity")]
    ZeroCapacity,
    #[error("no valid guess found around {center} after {attempts} attempts")]
    GuessSearchExhausted { center: i64, attempts: usize },
}
