use crate::core::WordError;
use thiserror::Error;

/// Reasons a submitted word is rejected
///
/// All of them are recoverable: nothing was recorded, the player may type
/// another word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the word must have {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("the word must start with {expected}")]
    WrongFirstLetter { expected: char, found: Option<char> },

    #[error("{0} is not in the dictionary")]
    NotInDictionary(String),

    #[error("today's puzzle is already over")]
    SessionClosed,
}

/// Invariant violations detected by [`SessionState`](super::SessionState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("all {limit} attempts are already used")]
    CapacityExceeded { limit: usize },

    #[error("the session is already finished")]
    SessionClosed,
}

impl From<SessionError> for GuessError {
    // Both mean the session cannot take more guesses
    fn from(_: SessionError) -> Self {
        Self::SessionClosed
    }
}

/// Errors raised while opening a game
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid secret word")]
    Word(#[from] WordError),
}
