use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("At least 2 players are required")]
    InsufficientPlayers,
    #[error("At most 10 players are supported")]
    TooManyPlayers,
    #[error("The game has already started")]
    GameAlreadyStarted,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
