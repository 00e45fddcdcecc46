use crate::map::models::LatLng;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Position of the city in the dataset.
    pub city_index: usize,
    pub city_name: String,
    pub true_point: LatLng,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Guess {
    pub point: LatLng,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub distance_km: f64,
    pub round: Round,
    pub guess: Guess,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GamePhase {
    Loading,
    Ready {
        round: Round,
        #[serde(skip_serializing_if = "Option::is_none")]
        guess: Option<Guess>,
    },
    Revealed {
        result: GameResult,
    },
}

impl GamePhase {
    pub fn label(&self) -> &'static str {
        match self {
            GamePhase::Loading => "loading",
            GamePhase::Ready { guess: None, .. } => "ready(noGuess)",
            GamePhase::Ready { guess: Some(_), .. } => "ready(hasGuess)",
            GamePhase::Revealed { .. } => "revealed",
        }
    }
}

#[cfg(test)]
impl GamePhase {
    pub fn round(&self) -> Option<&Round> {
        match self {
            GamePhase::Loading => None,
            GamePhase::Ready { round, .. } => Some(round),
            GamePhase::Revealed { result } => Some(&result.round),
        }
    }
}

/// Events the session reacts to, independent of what produced them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    DatasetLoaded,
    GuessReceived(LatLng),
    SubmitPressed,
    RestartPressed,
}
