use serde::{Deserialize, Serialize};
use std::fmt;

/// Every way a game event can be refused. The state of the session is left untouched whenever
/// one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameError {
    SessionNotFound,
    DatasetNotLoaded,
    AlreadyStarted,
    NotAcceptingGuesses,
    InvalidCoordinates,
    NoGuessRecorded,
    NotReady,
    NotRevealed,
    UnsamplableCity,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GameError::SessionNotFound => "no such game session",
            GameError::DatasetNotLoaded => "the city dataset has not loaded yet",
            GameError::AlreadyStarted => "the game has already started",
            GameError::NotAcceptingGuesses => "guesses are only accepted while a round is live",
            GameError::InvalidCoordinates => "the guess is not a valid coordinate",
            GameError::NoGuessRecorded => "there is no guess to submit",
            GameError::NotReady => "there is no live round to submit a guess for",
            GameError::NotRevealed => "a round can only be restarted after its result is shown",
            GameError::UnsamplableCity => "no location could be picked inside the chosen city",
        };
        f.write_str(message)
    }
}

impl std::error::Error for GameError {}
