use crate::app_context::AppContext;
use crate::game::errors::GameError;
use crate::game::models::GameEvent;
use crate::map::models::LatLng;
use crate::sessions::services::responses::{CloseSessionResponse, SessionResponse};
use crate::storage::interface::ISessionStorage;

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    session_id: &'a str,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, session_id: &'a str) -> Self {
        Self {
            app_context,
            session_id,
        }
    }

    pub async fn state(&self) -> SessionResponse {
        let rounds = self.app_context.round_generator();
        self.app_context
            .sessions
            .view(self.session_id, rounds.as_ref())
            .await
            .into()
    }

    pub async fn guess(&self, point: LatLng) -> SessionResponse {
        self.dispatch(GameEvent::GuessReceived(point)).await
    }

    pub async fn submit(&self) -> SessionResponse {
        self.dispatch(GameEvent::SubmitPressed).await
    }

    pub async fn restart(&self) -> SessionResponse {
        self.dispatch(GameEvent::RestartPressed).await
    }

    pub async fn close(&self) -> CloseSessionResponse {
        if self.app_context.sessions.remove(self.session_id).await {
            tracing::info!(
                task = "game_event",
                session_id = self.session_id,
                "Closed the session."
            );
            CloseSessionResponse {
                error: false,
                error_code: None,
            }
        } else {
            CloseSessionResponse {
                error: true,
                error_code: Some(GameError::SessionNotFound),
            }
        }
    }

    async fn dispatch(&self, event: GameEvent) -> SessionResponse {
        let rounds = self.app_context.round_generator();
        let outcome = self
            .app_context
            .sessions
            .dispatch(self.session_id, event, rounds.as_ref())
            .await;
        match &outcome {
            Ok(view) => tracing::info!(
                task = "game_event",
                session_id = self.session_id,
                event = ?event,
                state = view.phase.label(),
            ),
            Err(err) => tracing::info!(
                task = "game_event",
                session_id = self.session_id,
                event = ?event,
                rejected = %err,
            ),
        }
        outcome.into()
    }
}

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> SessionResponse {
        let rounds = self.app_context.round_generator();
        let outcome = self.app_context.sessions.create(rounds.as_ref()).await;
        if let Ok(view) = &outcome {
            tracing::info!(
                task = "game_event",
                session_id = %view.session_id,
                state = view.phase.label(),
                "Created a session."
            );
        }
        outcome.into()
    }
}
