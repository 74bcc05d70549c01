use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid square index")]
    InvalidSquare,
    #[error("History step out of range")]
    InvalidStep,
    #[error("History has no initial record")]
    EmptyHistory,
}

pub type Result<T> = core::result::Result<T, GameError>;
