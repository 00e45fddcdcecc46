use crate::game::errors::GameError;
use crate::game::models::GameEvent;
use crate::game::rounds::RoundGenerator;
use crate::game::session::SessionView;
use std::time::Duration;

pub trait ISessionStorage: SessionRepo + SessionGameFlowHandler {}

pub trait SessionRepo {
    /// Creates a session, already playing if `rounds` is available.
    async fn create(&self, rounds: Option<&RoundGenerator<'_>>) -> Result<SessionView, GameError>;

    /// Current state of the session, after leaving `Loading` if the dataset arrived meanwhile.
    async fn view(
        &self,
        session_id: &str,
        rounds: Option<&RoundGenerator<'_>>,
    ) -> Result<SessionView, GameError>;

    async fn remove(&self, session_id: &str) -> bool;

    async fn count(&self) -> usize;

    /// Drops every session untouched for at least `max_idle`, returning how many went.
    async fn evict_idle(&self, max_idle: Duration) -> usize;
}

pub trait SessionGameFlowHandler {
    async fn dispatch(
        &self,
        session_id: &str,
        event: GameEvent,
        rounds: Option<&RoundGenerator<'_>>,
    ) -> Result<SessionView, GameError>;
}
