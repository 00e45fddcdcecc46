use crate::game::errors::GameError;
use crate::game::models::{GameEvent, GamePhase, GameResult, Guess, Round};
use crate::game::rounds::{self, RoundGenerator};
use crate::map;
use crate::map::models::LatLng;
use crate::map::widgets::{MapDescriptor, MapWidget};
use rand::Rng;
use serde::Serialize;

/// One player's game: the round state machine plus the map panes it owns.
///
/// ```text
/// Loading --DatasetLoaded--> Ready(noGuess) --GuessReceived--> Ready(hasGuess)
///                                 ^                              |    ^
///                                 |                              |    | GuessReceived
///                           RestartPressed                 SubmitPressed
///                                 |                              v
///                                 +-------------------------- Revealed
/// ```
#[derive(Debug)]
pub struct GameSession {
    phase: GamePhase,
    satellite_map: Option<MapWidget>,
    guess_map: Option<MapWidget>,
    result_map: Option<MapWidget>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub phase: GamePhase,
    pub controls: Controls,
    pub maps: MapsView,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub submit_enabled: bool,
    pub restart_visible: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satellite: Option<MapDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<MapDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MapDescriptor>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Loading,
            satellite_map: None,
            guess_map: None,
            result_map: None,
        }
    }

    pub fn controls(&self) -> Controls {
        Controls {
            submit_enabled: matches!(self.phase, GamePhase::Ready { guess: Some(_), .. }),
            restart_visible: matches!(self.phase, GamePhase::Revealed { .. }),
        }
    }

    pub fn view(&self, session_id: &str) -> SessionView {
        SessionView {
            session_id: session_id.to_string(),
            phase: self.phase.clone(),
            controls: self.controls(),
            maps: MapsView {
                satellite: self.satellite_map.as_ref().map(|w| w.descriptor().clone()),
                guess: self.guess_map.as_ref().map(|w| w.descriptor().clone()),
                result: self.result_map.as_ref().map(|w| w.descriptor().clone()),
            },
        }
    }

    /// Applies one event. `rounds` is `None` while the dataset is still loading.
    pub fn handle<R>(
        &mut self,
        event: GameEvent,
        rounds: Option<&RoundGenerator<'_>>,
        rng: &mut R,
    ) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        match event {
            GameEvent::DatasetLoaded => {
                self.start(rounds.ok_or(GameError::DatasetNotLoaded)?, rng)?;
            }
            GameEvent::GuessReceived(point) => {
                self.record_guess(point)?;
            }
            GameEvent::SubmitPressed => {
                self.submit()?;
            }
            GameEvent::RestartPressed => {
                self.restart(rounds.ok_or(GameError::DatasetNotLoaded)?, rng)?;
            }
        }
        Ok(())
    }

    /// Leaves `Loading` as soon as a dataset is available; a no-op in every other case.
    pub fn catch_up<R>(
        &mut self,
        rounds: Option<&RoundGenerator<'_>>,
        rng: &mut R,
    ) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        if rounds.is_none() || !matches!(self.phase, GamePhase::Loading) {
            return Ok(());
        }
        self.handle(GameEvent::DatasetLoaded, rounds, rng)
    }

    pub fn start<R>(
        &mut self,
        rounds: &RoundGenerator<'_>,
        rng: &mut R,
    ) -> Result<Round, GameError>
    where
        R: Rng + ?Sized,
    {
        if !matches!(self.phase, GamePhase::Loading) {
            return Err(GameError::AlreadyStarted);
        }
        let round = rounds.start_round(rng)?;
        self.guess_map.get_or_insert_with(MapWidget::guess);
        Ok(self.enter_round(round))
    }

    pub fn record_guess(&mut self, point: LatLng) -> Result<Guess, GameError> {
        let GamePhase::Ready { guess, .. } = &mut self.phase else {
            return Err(GameError::NotAcceptingGuesses);
        };
        let point = point.normalized().ok_or(GameError::InvalidCoordinates)?;
        let new_guess = Guess { point };
        *guess = Some(new_guess);
        let guess_map = self.guess_map.get_or_insert_with(MapWidget::guess);
        guess_map.remove_markers();
        guess_map.place_marker(point, None, false);
        Ok(new_guess)
    }

    pub fn submit(&mut self) -> Result<GameResult, GameError> {
        let (round, guess) = match &self.phase {
            GamePhase::Ready {
                round,
                guess: Some(guess),
            } => (round.clone(), *guess),
            GamePhase::Ready { guess: None, .. } => return Err(GameError::NoGuessRecorded),
            _ => return Err(GameError::NotReady),
        };
        let distance_km = rounds::score(&round, &guess);
        let result = GameResult {
            distance_km,
            summary: map::describe_distance(distance_km, &round.city_name),
            round,
            guess,
        };
        self.result_map = Some(MapWidget::result(result.round.true_point, guess.point));
        self.phase = GamePhase::Revealed {
            result: result.clone(),
        };
        Ok(result)
    }

    pub fn restart<R>(
        &mut self,
        rounds: &RoundGenerator<'_>,
        rng: &mut R,
    ) -> Result<Round, GameError>
    where
        R: Rng + ?Sized,
    {
        if !matches!(self.phase, GamePhase::Revealed { .. }) {
            return Err(GameError::NotRevealed);
        }
        let round = rounds.start_round(rng)?;
        self.result_map = None;
        if let Some(guess_map) = self.guess_map.as_mut() {
            guess_map.remove_markers();
        }
        Ok(self.enter_round(round))
    }

    fn enter_round(&mut self, round: Round) -> Round {
        // The old pane is dropped before its replacement is created.
        self.satellite_map = None;
        self.satellite_map = Some(MapWidget::satellite(round.true_point));
        self.phase = GamePhase::Ready {
            round: round.clone(),
            guess: None,
        };
        round
    }
}

#[cfg(test)]
impl GameSession {
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn satellite_map(&self) -> Option<&MapWidget> {
        self.satellite_map.as_ref()
    }

    pub fn guess_map(&self) -> Option<&MapWidget> {
        self.guess_map.as_ref()
    }

    pub fn result_map(&self) -> Option<&MapWidget> {
        self.result_map.as_ref()
    }

    /// A session already in `Ready(noGuess)` for a hand-picked round.
    pub fn with_round(round: Round) -> Self {
        let mut session = Self::new();
        session.guess_map = Some(MapWidget::guess());
        session.enter_round(round);
        session
    }
}
